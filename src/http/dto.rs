//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The import endpoint's response body is the serialized
//! [`crate::import::ImportOutcome`] itself.

use serde::{Deserialize, Serialize};

use crate::api::{SemesterId, UserId};
use crate::models::{NewScheduleEntry, ScheduleEntry, SessionType};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Store connection status
    pub database: String,
}

/// Query parameters for the list endpoint.
///
/// Caller identity arrives explicitly; session handling lives in an
/// upstream gateway, not in this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListQuery {
    pub user_id: i64,
    pub semester_id: i64,
}

/// Schedule entry DTO for API responses.
///
/// Times are rendered at minute precision for display, even though the
/// store keeps seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntryDto {
    pub entry_id: i64,
    pub subject_name: String,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub room: Option<String>,
    pub session_type: SessionType,
    pub campus_name: Option<String>,
    pub campus_address: Option<String>,
}

impl From<ScheduleEntry> for ScheduleEntryDto {
    fn from(entry: ScheduleEntry) -> Self {
        Self {
            entry_id: entry.entry_id.value(),
            subject_name: entry.subject_name,
            day_of_week: entry.day_of_week,
            start_time: entry.start_time.format("%H:%M").to_string(),
            end_time: entry.end_time.format("%H:%M").to_string(),
            room: entry.room,
            session_type: entry.session_type,
            campus_name: entry.campus_name,
            campus_address: entry.campus_address,
        }
    }
}

/// Schedule list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleListResponse {
    /// Entries in timetable order
    pub schedules: Vec<ScheduleEntryDto>,
    /// Total count
    pub total: usize,
}

/// Request body for creating or updating a schedule entry.
///
/// The shape deliberately stays as loose as the store's contract: the
/// day-of-week range and time format are enforced by the store, not here,
/// and an unrecognized session type silently becomes a lecture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRequest {
    pub user_id: i64,
    pub semester_id: i64,
    pub subject_name: String,
    #[serde(default)]
    pub day_of_week: Option<i32>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub session_type: Option<String>,
    #[serde(default)]
    pub campus_name: Option<String>,
    #[serde(default)]
    pub campus_address: Option<String>,
}

impl EntryRequest {
    /// Convert into the candidate payload the store accepts.
    pub fn into_new_entry(self) -> NewScheduleEntry {
        NewScheduleEntry {
            user_id: UserId::new(self.user_id),
            semester_id: SemesterId::new(self.semester_id),
            subject_name: self.subject_name.trim().to_string(),
            day_of_week: self.day_of_week,
            start_time: self.start_time.trim().to_string(),
            end_time: self.end_time.trim().to_string(),
            room: none_if_blank(self.room),
            session_type: SessionType::from_raw(self.session_type.as_deref()),
            campus_name: none_if_blank(self.campus_name),
            campus_address: none_if_blank(self.campus_address),
        }
    }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Response for entry creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEntryResponse {
    /// Identifier assigned by the store
    pub entry_id: i64,
    /// Message about the operation
    pub message: String,
}

/// Response for update and delete operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResponse {
    /// Message about the operation
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EntryId;
    use chrono::NaiveTime;

    #[test]
    fn test_entry_dto_renders_minute_precision() {
        let entry = ScheduleEntry {
            entry_id: EntryId::new(1),
            user_id: UserId::new(2),
            semester_id: SemesterId::new(3),
            subject_name: "Toán".to_string(),
            day_of_week: 2,
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            room: Some("A101".to_string()),
            session_type: SessionType::Lecture,
            campus_name: None,
            campus_address: None,
        };
        let dto = ScheduleEntryDto::from(entry);
        assert_eq!(dto.start_time, "08:00");
        assert_eq!(dto.end_time, "09:30");
    }

    #[test]
    fn test_entry_request_coerces_session_type_and_blanks() {
        let request = EntryRequest {
            user_id: 1,
            semester_id: 2,
            subject_name: " Lý ".to_string(),
            day_of_week: Some(3),
            start_time: "10:00".to_string(),
            end_time: "11:30".to_string(),
            room: Some("   ".to_string()),
            session_type: Some("XYZ".to_string()),
            campus_name: None,
            campus_address: None,
        };
        let entry = request.into_new_entry();
        assert_eq!(entry.subject_name, "Lý");
        assert_eq!(entry.room, None);
        assert_eq!(entry.session_type, SessionType::Lecture);
    }
}
