use super::core::{ConstraintHost, ConstraintId, ConstraintSpec};
use crate::relation::Priority;

#[derive(Debug, Clone)]
struct Record {
    spec: ConstraintSpec,
    active: bool,
}

/// In-memory reference host.
///
/// Records what a real engine would be told, without solving anything.
/// Handles are never reused; a removed slot stays tombstoned so stale ids
/// cannot alias a later constraint.
#[derive(Debug, Default)]
pub struct ConstraintTable {
    records: Vec<Option<Record>>,
}

impl ConstraintTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently active constraints.
    pub fn active_count(&self) -> usize {
        self.records
            .iter()
            .flatten()
            .filter(|record| record.active)
            .count()
    }

    fn record(&self, id: ConstraintId) -> Option<&Record> {
        self.records.get(id.value() as usize)?.as_ref()
    }

    fn record_mut(&mut self, id: ConstraintId) -> Option<&mut Record> {
        self.records.get_mut(id.value() as usize)?.as_mut()
    }
}

impl ConstraintHost for ConstraintTable {
    fn install(&mut self, spec: ConstraintSpec) -> ConstraintId {
        let id = ConstraintId::new(self.records.len() as u64);
        self.records.push(Some(Record {
            spec,
            active: false,
        }));
        id
    }

    fn remove(&mut self, id: ConstraintId) {
        if let Some(slot) = self.records.get_mut(id.value() as usize) {
            *slot = None;
        }
    }

    fn set_active(&mut self, id: ConstraintId, active: bool) {
        if let Some(record) = self.record_mut(id) {
            record.active = active;
        }
    }

    fn is_active(&self, id: ConstraintId) -> bool {
        self.record(id).map(|record| record.active).unwrap_or(false)
    }

    fn constant(&self, id: ConstraintId) -> f32 {
        self.record(id).map(|record| record.spec.constant).unwrap_or(0.0)
    }

    fn set_constant(&mut self, id: ConstraintId, constant: f32) {
        if let Some(record) = self.record_mut(id) {
            record.spec.constant = constant;
        }
    }

    fn priority(&self, id: ConstraintId) -> Priority {
        self.record(id)
            .map(|record| record.spec.priority)
            .unwrap_or(Priority::REQUIRED)
    }

    fn set_priority(&mut self, id: ConstraintId, priority: Priority) {
        if let Some(record) = self.record_mut(id) {
            record.spec.priority = priority;
        }
    }

    fn spec(&self, id: ConstraintId) -> Option<ConstraintSpec> {
        self.record(id).map(|record| record.spec)
    }

    fn installed(&self) -> usize {
        self.records.iter().flatten().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::{Anchor, AnchorKind};
    use crate::relation::RelationOp;
    use crate::tree::BoxId;

    fn spec() -> ConstraintSpec {
        ConstraintSpec {
            subject: Anchor {
                box_id: BoxId::new(0),
                kind: AnchorKind::Top,
            },
            target: Some(Anchor {
                box_id: BoxId::new(1),
                kind: AnchorKind::Top,
            }),
            op: RelationOp::Equal,
            constant: 8.0,
            multiplier: 1.0,
            priority: Priority::REQUIRED,
        }
    }

    #[test]
    fn install_starts_inactive() {
        let mut table = ConstraintTable::new();
        let id = table.install(spec());
        assert!(!table.is_active(id));
        assert_eq!(table.installed(), 1);
        assert_eq!(table.active_count(), 0);
    }

    #[test]
    fn activation_is_idempotent() {
        let mut table = ConstraintTable::new();
        let id = table.install(spec());
        table.set_active(id, true);
        table.set_active(id, true);
        assert!(table.is_active(id));
        assert_eq!(table.active_count(), 1);
    }

    #[test]
    fn mutators_proxy_to_record() {
        let mut table = ConstraintTable::new();
        let id = table.install(spec());
        table.set_constant(id, -4.0);
        table.set_priority(id, Priority::LOW);
        assert_eq!(table.constant(id), -4.0);
        assert_eq!(table.priority(id), Priority::LOW);
    }

    #[test]
    fn removed_handles_read_as_neutral() {
        let mut table = ConstraintTable::new();
        let id = table.install(spec());
        table.set_active(id, true);
        table.remove(id);
        assert!(!table.is_active(id));
        assert_eq!(table.installed(), 0);
        assert_eq!(table.spec(id), None);

        // Handle of a removed slot never aliases a new constraint.
        let next = table.install(spec());
        assert_ne!(id, next);
    }
}
