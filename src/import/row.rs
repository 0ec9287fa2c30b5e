//! Per-row validation and transformation.
//!
//! Each decoded record is turned into a [`NewScheduleEntry`] candidate or a
//! structured issue. The transform is a pure function: no I/O, and the same
//! raw row always yields the same payload or the same issue.

use std::collections::HashMap;

use crate::api::{SemesterId, UserId};
use crate::import::headers::CanonicalField;
use crate::import::pipeline::ImportIssue;
use crate::models::{NewScheduleEntry, SessionType};

/// One decoded data row: record key (canonical or raw header) to raw value.
pub type RawRecord = HashMap<String, String>;

/// Look up a field by canonical key, falling back to the raw Vietnamese
/// label. Header normalization is best-effort, so the double lookup keeps
/// rows readable even when the header line escaped recognition.
///
/// Empty-after-trim values count as absent.
fn field<'a>(record: &'a RawRecord, key: CanonicalField) -> Option<&'a str> {
    record
        .get(key.as_key())
        .or_else(|| record.get(key.raw_label()))
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

/// Validate and transform one decoded record into a candidate entry.
///
/// `line` is the 1-based position in the file, counting the header line as
/// line 1 (so the first data row is line 2); it is used only for issue
/// reporting.
///
/// Required fields are subject name, day of week, start time, and end
/// time; a row missing any of them is rejected. The day-of-week value is
/// parsed leniently: a present-but-non-numeric value becomes `None` and is
/// left for the store to reject. Times pass through trimmed but otherwise
/// unchecked.
pub fn transform_row(
    record: &RawRecord,
    line: usize,
    user_id: UserId,
    semester_id: SemesterId,
) -> Result<NewScheduleEntry, ImportIssue> {
    let subject_name = field(record, CanonicalField::SubjectName);
    let day_of_week = field(record, CanonicalField::DayOfWeek);
    let start_time = field(record, CanonicalField::StartTime);
    let end_time = field(record, CanonicalField::EndTime);

    let (subject_name, day_of_week, start_time, end_time) =
        match (subject_name, day_of_week, start_time, end_time) {
            (Some(subject), Some(day), Some(start), Some(end)) => (subject, day, start, end),
            _ => {
                return Err(ImportIssue::Validation {
                    row: line,
                    message: "missing required column (subject name, day of week, start time, end time)"
                        .to_string(),
                })
            }
        };

    Ok(NewScheduleEntry {
        user_id,
        semester_id,
        subject_name: subject_name.to_string(),
        day_of_week: day_of_week.parse::<i32>().ok(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        room: optional(record, CanonicalField::Room),
        session_type: SessionType::from_raw(field(record, CanonicalField::SessionType)),
        campus_name: optional(record, CanonicalField::CampusName),
        campus_address: optional(record, CanonicalField::CampusAddress),
    })
}

fn optional(record: &RawRecord, key: CanonicalField) -> Option<String> {
    field(record, key).map(str::to_string)
}
