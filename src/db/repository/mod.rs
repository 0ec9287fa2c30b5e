//! Repository trait definitions for store operations.
//!
//! This module abstracts the persistence boundary behind a focused trait so
//! storage backends can be swapped without touching the import pipeline or
//! the HTTP layer.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`schedule`]: CRUD operations for schedule entries

pub mod error;
pub mod schedule;

// Re-export error types
pub use error::{RepositoryError, RepositoryResult};

// Re-export the trait
pub use schedule::ScheduleRepository;
