//! High-level database service layer.
//!
//! This module provides repository-agnostic operations that work with any
//! implementation of [`ScheduleRepository`]. The HTTP handlers call these
//! functions rather than the repository directly, so logging and any
//! cross-cutting behavior stay consistent regardless of the storage
//! backend.

use log::{info, warn};

use crate::api::{EntryId, SemesterId, UserId};
use crate::db::repository::{RepositoryResult, ScheduleRepository};
use crate::models::{NewScheduleEntry, ScheduleEntry};

// ==================== Health & Connection ====================

/// Check if the store connection is healthy.
pub async fn health_check<R>(repo: &R) -> RepositoryResult<bool>
where
    R: ScheduleRepository + ?Sized,
{
    repo.health_check().await
}

// ==================== Schedule Entry Operations ====================

/// List one user's entries for a semester in timetable order.
pub async fn list_entries<R>(
    repo: &R,
    semester_id: SemesterId,
    user_id: UserId,
) -> RepositoryResult<Vec<ScheduleEntry>>
where
    R: ScheduleRepository + ?Sized,
{
    let entries = repo.list_entries(semester_id, user_id).await?;
    info!(
        "Service layer: listed {} entries for user {} in semester {}",
        entries.len(),
        user_id,
        semester_id
    );
    Ok(entries)
}

/// Create one schedule entry.
pub async fn create_entry<R>(repo: &R, entry: &NewScheduleEntry) -> RepositoryResult<EntryId>
where
    R: ScheduleRepository + ?Sized,
{
    info!(
        "Service layer: creating entry '{}' for user {} in semester {}",
        entry.subject_name, entry.user_id, entry.semester_id
    );
    let entry_id = repo.create_entry(entry).await?;
    info!("Service layer: created entry {}", entry_id);
    Ok(entry_id)
}

/// Replace the fields of an existing entry.
pub async fn update_entry<R>(
    repo: &R,
    entry_id: EntryId,
    entry: &NewScheduleEntry,
) -> RepositoryResult<()>
where
    R: ScheduleRepository + ?Sized,
{
    info!("Service layer: updating entry {}", entry_id);
    if let Err(err) = repo.update_entry(entry_id, entry).await {
        warn!("Service layer: update of entry {} failed: {}", entry_id, err);
        return Err(err);
    }
    Ok(())
}

/// Delete one entry.
pub async fn delete_entry<R>(repo: &R, entry_id: EntryId) -> RepositoryResult<()>
where
    R: ScheduleRepository + ?Sized,
{
    info!("Service layer: deleting entry {}", entry_id);
    repo.delete_entry(entry_id).await
}
