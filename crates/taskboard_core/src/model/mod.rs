//! Domain model for the task board.
//!
//! # Responsibility
//! - Define the project record and its status enumeration.
//!
//! # Invariants
//! - Every project is identified by a `ProjectId` generated at creation.

pub mod project;
