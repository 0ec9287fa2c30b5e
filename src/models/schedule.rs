//! Domain types for weekly class-schedule entries.
//!
//! A [`ScheduleEntry`] is one weekly, recurring class session owned by a
//! user and scoped to a semester. [`NewScheduleEntry`] is the candidate
//! payload produced by the import pipeline or a direct create request; it
//! carries fields exactly as loosely as the input did, leaving domain
//! enforcement (day-of-week range, time-of-day format) to the store.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::api::{EntryId, SemesterId, UserId};

/// Smallest valid day-of-week value (Monday).
///
/// The wire contract numbers days 2 through 8, with 8 denoting Sunday.
/// Existing data and clients depend on this numbering; do not renumber to
/// ISO weekdays.
pub const DAY_OF_WEEK_MIN: i32 = 2;

/// Largest valid day-of-week value (Sunday).
pub const DAY_OF_WEEK_MAX: i32 = 8;

/// Whether `day` falls inside the 2..=8 wire domain.
pub fn day_of_week_in_domain(day: i32) -> bool {
    (DAY_OF_WEEK_MIN..=DAY_OF_WEEK_MAX).contains(&day)
}

/// Classification of a class meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SessionType {
    /// Lecture session (`"lt"` on the wire).
    #[default]
    #[serde(rename = "lt")]
    Lecture,
    /// Lab/practical session (`"th"` on the wire).
    #[serde(rename = "th")]
    Practical,
}

impl SessionType {
    /// Coerce a raw input value to a session type.
    ///
    /// Only the exact string `"th"` (case-insensitive) maps to
    /// [`SessionType::Practical`]; anything else, including an absent
    /// value, becomes [`SessionType::Lecture`]. Unrecognized values are
    /// never an error.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.trim().eq_ignore_ascii_case("th") => SessionType::Practical,
            _ => SessionType::Lecture,
        }
    }

    /// Wire representation of the session type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Lecture => "lt",
            SessionType::Practical => "th",
        }
    }
}

/// Candidate schedule entry, not yet persisted.
///
/// Times travel as trimmed strings and `day_of_week` is `None` when the
/// input was present but not an integer; the store decides whether either
/// is acceptable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewScheduleEntry {
    pub user_id: UserId,
    pub semester_id: SemesterId,
    pub subject_name: String,
    #[serde(default)]
    pub day_of_week: Option<i32>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub session_type: SessionType,
    #[serde(default)]
    pub campus_name: Option<String>,
    #[serde(default)]
    pub campus_address: Option<String>,
}

/// One weekly, recurring class session as persisted by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub entry_id: EntryId,
    pub user_id: UserId,
    pub semester_id: SemesterId,
    pub subject_name: String,
    /// Always inside the 2..=8 domain once persisted.
    pub day_of_week: i32,
    /// Stored at second granularity even when the input carried minutes.
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room: Option<String>,
    pub session_type: SessionType,
    pub campus_name: Option<String>,
    pub campus_address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_type_coercion() {
        assert_eq!(SessionType::from_raw(Some("th")), SessionType::Practical);
        assert_eq!(SessionType::from_raw(Some("TH")), SessionType::Practical);
        assert_eq!(SessionType::from_raw(Some(" th ")), SessionType::Practical);
        assert_eq!(SessionType::from_raw(Some("lt")), SessionType::Lecture);
        assert_eq!(SessionType::from_raw(Some("XYZ")), SessionType::Lecture);
        assert_eq!(SessionType::from_raw(Some("")), SessionType::Lecture);
        assert_eq!(SessionType::from_raw(None), SessionType::Lecture);
    }

    #[test]
    fn test_session_type_wire_names() {
        assert_eq!(serde_json::to_string(&SessionType::Lecture).unwrap(), "\"lt\"");
        assert_eq!(serde_json::to_string(&SessionType::Practical).unwrap(), "\"th\"");
    }

    #[test]
    fn test_day_of_week_domain() {
        assert!(!day_of_week_in_domain(1));
        assert!(day_of_week_in_domain(2));
        assert!(day_of_week_in_domain(8));
        assert!(!day_of_week_in_domain(9));
        assert!(!day_of_week_in_domain(0));
    }
}
