//! Drag source and drop target contracts.
//!
//! # Responsibility
//! - Describe how a source publishes a project id on drag start.
//! - Describe the hover, drop, and leave phases of a drop target.
//!
//! # Invariants
//! - The payload carries only the project id under `PROJECT_ID_MEDIA_TYPE`.
//! - Only `drop` may mutate board data, and only through the store.

use crate::drag::transfer::{DataTransfer, PROJECT_ID_MEDIA_TYPE};
use crate::store::project_store::ProjectStore;

/// Result of the continuous hover check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOverDecision {
    /// Payload is acceptable; the adapter must suppress the platform's
    /// default rejection.
    Accept,
    /// Payload is not a project id; leave platform behavior untouched.
    Reject,
}

impl DragOverDecision {
    pub fn is_accept(self) -> bool {
        self == Self::Accept
    }
}

/// Element that can be picked up and dragged.
pub trait Draggable {
    fn drag_start(&self, transfer: &mut DataTransfer);
    fn drag_end(&self, transfer: &DataTransfer);
}

/// Element that can receive a dropped project.
pub trait DragTarget {
    fn drag_over(&mut self, transfer: &DataTransfer) -> DragOverDecision;
    fn drop(&mut self, transfer: &DataTransfer, store: &mut ProjectStore);
    fn drag_leave(&mut self);
}

/// Whether the first declared media type is the project id kind.
pub fn carries_project_id(transfer: &DataTransfer) -> bool {
    transfer.first_type() == Some(PROJECT_ID_MEDIA_TYPE)
}

/// Project id carried by `transfer`, if any.
pub fn project_id_payload(transfer: &DataTransfer) -> Option<&str> {
    transfer.get_data(PROJECT_ID_MEDIA_TYPE)
}

#[cfg(test)]
mod tests {
    use super::{carries_project_id, project_id_payload};
    use crate::drag::transfer::{DataTransfer, PROJECT_ID_MEDIA_TYPE};

    #[test]
    fn only_first_declared_type_counts() {
        let mut transfer = DataTransfer::new();
        transfer.set_data("text/html", "<b>x</b>");
        transfer.set_data(PROJECT_ID_MEDIA_TYPE, "id-1");

        assert!(!carries_project_id(&transfer));
        assert_eq!(project_id_payload(&transfer), Some("id-1"));
    }

    #[test]
    fn plain_text_payload_is_accepted() {
        let mut transfer = DataTransfer::new();
        transfer.set_data(PROJECT_ID_MEDIA_TYPE, "id-1");
        assert!(carries_project_id(&transfer));
    }
}
