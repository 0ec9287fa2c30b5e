//! Core schedule repository trait for CRUD operations.
//!
//! This trait defines the persistence boundary for weekly class-schedule
//! entries. The import pipeline consumes it as an opaque set of calls; any
//! domain rules the store enforces (day-of-week range, time-of-day format)
//! surface as [`RepositoryError`]s recorded per row.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{EntryId, SemesterId, UserId};
use crate::models::{NewScheduleEntry, ScheduleEntry};

/// Repository trait for schedule entry persistence.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Check if the store connection is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if connection is healthy
    /// - `Ok(false)` if connection is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Insert one schedule entry.
    ///
    /// The store is the only enforcement point for the day-of-week domain
    /// (2 through 8, 8 = Sunday) and time-of-day well-formedness; a
    /// violating payload is rejected with a store error. No existence or
    /// uniqueness check is performed before insertion.
    ///
    /// # Returns
    /// * `Ok(EntryId)` - Identifier assigned to the new entry
    /// * `Err(RepositoryError)` - If the store rejects the payload
    async fn create_entry(&self, entry: &NewScheduleEntry) -> RepositoryResult<EntryId>;

    /// List all entries of one user within one semester.
    ///
    /// Entries come back in weekly-timetable order: day of week first,
    /// then start time.
    async fn list_entries(
        &self,
        semester_id: SemesterId,
        user_id: UserId,
    ) -> RepositoryResult<Vec<ScheduleEntry>>;

    /// Replace the fields of an existing entry.
    ///
    /// The payload is validated exactly like a create.
    ///
    /// # Returns
    /// * `Ok(())` on success
    /// * `Err(RepositoryError::NotFound)` - If the entry doesn't exist
    async fn update_entry(
        &self,
        entry_id: EntryId,
        entry: &NewScheduleEntry,
    ) -> RepositoryResult<()>;

    /// Delete one entry.
    ///
    /// # Returns
    /// * `Ok(())` on success
    /// * `Err(RepositoryError::NotFound)` - If the entry doesn't exist
    async fn delete_entry(&self, entry_id: EntryId) -> RepositoryResult<()>;
}
