//! Drag-and-drop status transfer.
//!
//! A drag source writes a project id into a [`transfer::DataTransfer`]; a
//! drop target reads it back and asks the store to change that project's
//! status. The platform delivers each drop to at most one target.

pub mod protocol;
pub mod transfer;
