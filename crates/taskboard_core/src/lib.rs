//! Core logic for the task board.
//! This crate is the single source of truth for board invariants: the
//! project store, the drag-and-drop status transfer, and form validation.

pub mod config;
pub mod drag;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
pub mod view;

pub use config::{BoardConfig, InputRules, LoggingOptions};
pub use drag::protocol::{DragOverDecision, DragTarget, Draggable};
pub use drag::transfer::{DataTransfer, DropEffect, PROJECT_ID_MEDIA_TYPE};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use store::listeners::{Listener, ListenerRegistry};
pub use store::project_store::ProjectStore;
pub use validation::{check, validate, ConstraintViolation, FieldValue, Validatable};
pub use view::component::Component;
pub use view::project_input::{
    InputError, NewProject, ProjectInput, ProjectInputView, INVALID_INPUT_MESSAGE,
};
pub use view::project_item::{ProjectItem, ProjectItemView};
pub use view::project_list::{ProjectList, ProjectListView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
