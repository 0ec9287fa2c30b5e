//! Database module for schedule entry storage.
//!
//! This module provides abstractions for store operations via the
//! Repository pattern, allowing different storage backends to be swapped
//! easily.
//!
//! # Architecture
//!
//! The database module follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, import pipeline)          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Cross-cutting concerns   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! **For new code, use the service layer:**
//! ```
//! use studyhub::api::{SemesterId, UserId};
//! use studyhub::db::{services, RepositoryFactory};
//!
//! # async fn example() -> Result<(), studyhub::db::RepositoryError> {
//! let repo = RepositoryFactory::create_local();
//! let entries = services::list_entries(
//!     repo.as_ref(),
//!     SemesterId::new(1),
//!     UserId::new(1),
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod factory;
pub mod repositories;
pub mod repository;
pub mod services;


// ==================== Service Layer (Recommended for new code) ====================
// Use these high-level functions that work with any repository implementation

pub use services::{create_entry, delete_entry, health_check, list_entries, update_entry};

// ==================== Repository Pattern Exports ====================

pub use factory::RepositoryFactory;
pub use repositories::LocalRepository;
pub use repository::{RepositoryError, RepositoryResult, ScheduleRepository};
