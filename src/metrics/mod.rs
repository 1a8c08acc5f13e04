use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Counters for constraint-description activity on one box tree.
///
/// `dropped_ops` is the one to watch: it counts chained calls that were
/// silently skipped because a required ambient relationship was missing.
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    connections: u64,
    activations: u64,
    deactivations: u64,
    destroyed: u64,
    dropped_ops: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_connection(&mut self) {
        self.connections = self.connections.saturating_add(1);
    }

    pub fn record_activations(&mut self, count: usize) {
        self.activations = self.activations.saturating_add(count as u64);
    }

    pub fn record_deactivations(&mut self, count: usize) {
        self.deactivations = self.deactivations.saturating_add(count as u64);
    }

    pub fn record_destroyed(&mut self, count: usize) {
        self.destroyed = self.destroyed.saturating_add(count as u64);
    }

    pub fn record_dropped_op(&mut self) {
        self.dropped_ops = self.dropped_ops.saturating_add(1);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            connections: self.connections,
            activations: self.activations,
            deactivations: self.deactivations,
            destroyed: self.destroyed,
            dropped_ops: self.dropped_ops,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub connections: u64,
    pub activations: u64,
    pub deactivations: u64,
    pub destroyed: u64,
    pub dropped_ops: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target.to_string(),
            "layout_metrics".to_string(),
            self.as_fields(),
        )
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("connections".to_string(), json!(self.connections));
        map.insert("activations".to_string(), json!(self.activations));
        map.insert("deactivations".to_string(), json!(self.deactivations));
        map.insert("destroyed".to_string(), json!(self.destroyed));
        map.insert("dropped_ops".to_string(), json!(self.dropped_ops));
        map
    }
}
