//! Project state management.
//!
//! # Responsibility
//! - Hold the only writable copy of board projects.
//! - Notify subscribers with snapshots after every change.

pub mod listeners;
pub mod project_store;
