//! Render-agnostic board views.
//!
//! # Responsibility
//! - Turn store snapshots into plain view models for a host renderer.
//! - Implement the drag source and drop target roles.
//!
//! # Invariants
//! - Views never mutate projects directly; all writes go through
//!   `ProjectStore`.

pub mod component;
pub mod project_input;
pub mod project_item;
pub mod project_list;
