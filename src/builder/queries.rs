use super::core::LayoutBuilder;
use crate::anchor::AnchorKind;
use crate::connection::Connection;

/// Group queries over accumulated connections.
impl LayoutBuilder {
    /// All connections of the given kind, in insertion order.
    pub fn find_all(&self, kind: AnchorKind) -> Vec<Connection> {
        self.connections()
            .iter()
            .filter(|connection| connection.kind() == kind)
            .cloned()
            .collect()
    }

    /// First connection of the given kind, if any.
    pub fn first_of(&self, kind: AnchorKind) -> Option<Connection> {
        self.connections()
            .iter()
            .find(|connection| connection.kind() == kind)
            .cloned()
    }

    /// Same as `find_all(AnchorKind::Leading)`.
    pub fn leading_connections(&self) -> Vec<Connection> {
        self.find_all(AnchorKind::Leading)
    }

    /// Same as `find_all(AnchorKind::Trailing)`.
    pub fn trailing_connections(&self) -> Vec<Connection> {
        self.find_all(AnchorKind::Trailing)
    }

    /// Same as `find_all(AnchorKind::Left)`.
    pub fn left_connections(&self) -> Vec<Connection> {
        self.find_all(AnchorKind::Left)
    }

    /// Same as `find_all(AnchorKind::Right)`.
    pub fn right_connections(&self) -> Vec<Connection> {
        self.find_all(AnchorKind::Right)
    }

    /// Same as `find_all(AnchorKind::Top)`.
    pub fn top_connections(&self) -> Vec<Connection> {
        self.find_all(AnchorKind::Top)
    }

    /// Same as `find_all(AnchorKind::Bottom)`.
    pub fn bottom_connections(&self) -> Vec<Connection> {
        self.find_all(AnchorKind::Bottom)
    }

    /// Same as `find_all(AnchorKind::Width)`.
    pub fn width_connections(&self) -> Vec<Connection> {
        self.find_all(AnchorKind::Width)
    }

    /// Same as `find_all(AnchorKind::Height)`.
    pub fn height_connections(&self) -> Vec<Connection> {
        self.find_all(AnchorKind::Height)
    }

    /// Same as `find_all(AnchorKind::CenterX)`.
    pub fn center_x_connections(&self) -> Vec<Connection> {
        self.find_all(AnchorKind::CenterX)
    }

    /// Same as `find_all(AnchorKind::CenterY)`.
    pub fn center_y_connections(&self) -> Vec<Connection> {
        self.find_all(AnchorKind::CenterY)
    }

    /// Same as `find_all(AnchorKind::FirstBaseline)`.
    pub fn first_baseline_connections(&self) -> Vec<Connection> {
        self.find_all(AnchorKind::FirstBaseline)
    }

    /// Same as `find_all(AnchorKind::LastBaseline)`.
    pub fn last_baseline_connections(&self) -> Vec<Connection> {
        self.find_all(AnchorKind::LastBaseline)
    }
}
