//! In-memory local repository implementation.
//!
//! This module provides a local implementation of the repository trait
//! suitable for unit testing and local development. All data is stored in
//! memory using a HashMap, providing fast, deterministic, and isolated
//! execution.

use async_trait::async_trait;
use chrono::NaiveTime;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::api::{EntryId, SemesterId, UserId};
use crate::db::repository::{RepositoryError, RepositoryResult, ScheduleRepository};
use crate::models::{
    day_of_week_in_domain, NewScheduleEntry, ScheduleEntry, DAY_OF_WEEK_MAX, DAY_OF_WEEK_MIN,
};

/// In-memory local repository.
///
/// This implementation enforces the same domain rules a production store
/// would: the day-of-week value must be an integer inside the 2..=8 wire
/// domain and the time-of-day strings must parse as `HH:MM:SS` or `HH:MM`
/// (minute-precision input is widened to second granularity).
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    entries: HashMap<EntryId, ScheduleEntry>,

    // ID counter
    next_entry_id: i64,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            next_entry_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        let is_healthy = data.is_healthy;
        *data = LocalData {
            is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of entries stored.
    pub fn entry_count(&self) -> usize {
        self.data.read().unwrap().entries.len()
    }

    /// Check if an entry exists.
    pub fn has_entry(&self, entry_id: EntryId) -> bool {
        self.data.read().unwrap().entries.contains_key(&entry_id)
    }

    /// All entries in id-assignment order (insertion order).
    pub fn entries_in_id_order(&self) -> Vec<ScheduleEntry> {
        let data = self.data.read().unwrap();
        let mut entries: Vec<ScheduleEntry> = data.entries.values().cloned().collect();
        entries.sort_by_key(|e| e.entry_id);
        entries
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(RepositoryError::ConnectionError(
                "Store is not healthy".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply the store-side domain rules to a candidate payload.
    fn validate(entry: &NewScheduleEntry) -> RepositoryResult<(i32, NaiveTime, NaiveTime)> {
        if entry.subject_name.trim().is_empty() {
            return Err(RepositoryError::ValidationError(
                "subject name must not be empty".to_string(),
            ));
        }

        let day_of_week = entry.day_of_week.ok_or_else(|| {
            RepositoryError::ValidationError(format!(
                "day of week must be an integer between {DAY_OF_WEEK_MIN} and {DAY_OF_WEEK_MAX}"
            ))
        })?;
        if !day_of_week_in_domain(day_of_week) {
            return Err(RepositoryError::ValidationError(format!(
                "day of week {day_of_week} out of range {DAY_OF_WEEK_MIN}-{DAY_OF_WEEK_MAX}"
            )));
        }

        let start_time = parse_time_of_day(&entry.start_time)?;
        let end_time = parse_time_of_day(&entry.end_time)?;

        Ok((day_of_week, start_time, end_time))
    }
}

/// Parse a time-of-day string, widening minute precision to seconds.
fn parse_time_of_day(raw: &str) -> RepositoryResult<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| RepositoryError::ValidationError(format!("invalid time of day: {raw:?}")))
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScheduleRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn create_entry(&self, entry: &NewScheduleEntry) -> RepositoryResult<EntryId> {
        self.check_health()?;
        let (day_of_week, start_time, end_time) = Self::validate(entry)?;

        let mut data = self.data.write().unwrap();
        let entry_id = EntryId::new(data.next_entry_id);
        data.next_entry_id += 1;

        data.entries.insert(
            entry_id,
            ScheduleEntry {
                entry_id,
                user_id: entry.user_id,
                semester_id: entry.semester_id,
                subject_name: entry.subject_name.trim().to_string(),
                day_of_week,
                start_time,
                end_time,
                room: entry.room.clone(),
                session_type: entry.session_type,
                campus_name: entry.campus_name.clone(),
                campus_address: entry.campus_address.clone(),
            },
        );

        Ok(entry_id)
    }

    async fn list_entries(
        &self,
        semester_id: SemesterId,
        user_id: UserId,
    ) -> RepositoryResult<Vec<ScheduleEntry>> {
        self.check_health()?;
        let data = self.data.read().unwrap();

        let mut entries: Vec<ScheduleEntry> = data
            .entries
            .values()
            .filter(|e| e.semester_id == semester_id && e.user_id == user_id)
            .cloned()
            .collect();

        entries.sort_by_key(|e| (e.day_of_week, e.start_time, e.entry_id));
        Ok(entries)
    }

    async fn update_entry(
        &self,
        entry_id: EntryId,
        entry: &NewScheduleEntry,
    ) -> RepositoryResult<()> {
        self.check_health()?;
        let (day_of_week, start_time, end_time) = Self::validate(entry)?;

        let mut data = self.data.write().unwrap();
        let existing = data
            .entries
            .get_mut(&entry_id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Entry {entry_id} not found")))?;

        *existing = ScheduleEntry {
            entry_id,
            user_id: entry.user_id,
            semester_id: entry.semester_id,
            subject_name: entry.subject_name.trim().to_string(),
            day_of_week,
            start_time,
            end_time,
            room: entry.room.clone(),
            session_type: entry.session_type,
            campus_name: entry.campus_name.clone(),
            campus_address: entry.campus_address.clone(),
        };

        Ok(())
    }

    async fn delete_entry(&self, entry_id: EntryId) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();
        data.entries
            .remove(&entry_id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("Entry {entry_id} not found")))
    }
}
