//! Header normalization for imported schedule files.
//!
//! Input files label their columns in Vietnamese, with or without
//! diacritics, in any case, and with irregular whitespace. This module
//! reduces each raw header cell to a normalized spelling and resolves it
//! against a fixed table of known spellings to a canonical field name.
//! Unrecognized headers pass through unchanged so their columns stay
//! retrievable under the raw name.

use std::collections::HashMap;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical field a recognized header column maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    SubjectName,
    CampusName,
    CampusAddress,
    DayOfWeek,
    StartTime,
    EndTime,
    Room,
    SessionType,
}

impl CanonicalField {
    /// Key the field is stored under in a decoded record.
    pub fn as_key(&self) -> &'static str {
        match self {
            CanonicalField::SubjectName => "subject_name",
            CanonicalField::CampusName => "campus_name",
            CanonicalField::CampusAddress => "campus_address",
            CanonicalField::DayOfWeek => "day_of_week",
            CanonicalField::StartTime => "start_time",
            CanonicalField::EndTime => "end_time",
            CanonicalField::Room => "room",
            CanonicalField::SessionType => "session_type",
        }
    }

    /// The diacritic-carrying Vietnamese label for the field.
    ///
    /// Row lookup falls back to this raw label when the canonical key is
    /// absent, since header normalization is best-effort.
    pub fn raw_label(&self) -> &'static str {
        match self {
            CanonicalField::SubjectName => "tên môn học",
            CanonicalField::CampusName => "tên cơ sở",
            CanonicalField::CampusAddress => "địa chỉ cơ sở",
            CanonicalField::DayOfWeek => "thứ",
            CanonicalField::StartTime => "giờ bắt đầu",
            CanonicalField::EndTime => "giờ kết thúc",
            CanonicalField::Room => "phòng học",
            CanonicalField::SessionType => "loại",
        }
    }
}

/// Accepted header spellings, both diacritic-carrying and stripped.
const KNOWN_SPELLINGS: &[(&str, CanonicalField)] = &[
    ("tên môn học", CanonicalField::SubjectName),
    ("ten mon hoc", CanonicalField::SubjectName),
    ("tên cơ sở", CanonicalField::CampusName),
    ("ten co so", CanonicalField::CampusName),
    ("địa chỉ cơ sở", CanonicalField::CampusAddress),
    ("dia chi co so", CanonicalField::CampusAddress),
    ("thứ", CanonicalField::DayOfWeek),
    ("thu", CanonicalField::DayOfWeek),
    ("giờ bắt đầu", CanonicalField::StartTime),
    ("gio bat dau", CanonicalField::StartTime),
    ("giờ kết thúc", CanonicalField::EndTime),
    ("gio ket thuc", CanonicalField::EndTime),
    ("phòng học", CanonicalField::Room),
    ("phong hoc", CanonicalField::Room),
    ("loại", CanonicalField::SessionType),
    ("loai", CanonicalField::SessionType),
];

/// Reduce a raw header cell to its normalized spelling.
///
/// Lowercases, trims, strips combining marks after NFD decomposition, and
/// collapses internal whitespace runs to a single space. Idempotent: a
/// normalized spelling normalizes to itself.
pub fn normalize_header(raw: &str) -> String {
    let stripped: String = raw
        .to_lowercase()
        .trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Maps raw header spellings to canonical field names.
///
/// The spelling table is an immutable value fixed at construction;
/// [`HeaderNormalizer::new`] installs the known Vietnamese spellings, and
/// [`HeaderNormalizer::with_table`] accepts a custom table for callers that
/// need different labels.
#[derive(Debug, Clone)]
pub struct HeaderNormalizer {
    table: HashMap<String, CanonicalField>,
}

impl HeaderNormalizer {
    /// Normalizer with the built-in spelling table.
    pub fn new() -> Self {
        Self::with_table(KNOWN_SPELLINGS.iter().copied())
    }

    /// Normalizer with a caller-supplied spelling table.
    ///
    /// Spellings are normalized on the way in, so the table matches the
    /// same way regardless of how its keys were written.
    pub fn with_table<'a, I>(spellings: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, CanonicalField)>,
    {
        let table = spellings
            .into_iter()
            .map(|(raw, field)| (normalize_header(raw), field))
            .collect();
        Self { table }
    }

    /// Resolve a raw header cell to a canonical field, if recognized.
    pub fn resolve(&self, raw: &str) -> Option<CanonicalField> {
        self.table.get(&normalize_header(raw)).copied()
    }

    /// Key a raw header cell's values are stored under in decoded records.
    ///
    /// Recognized headers map to their canonical key; unrecognized ones
    /// pass through unchanged.
    pub fn record_key(&self, raw: &str) -> String {
        match self.resolve(raw) {
            Some(field) => field.as_key().to_string(),
            None => raw.to_string(),
        }
    }
}

impl Default for HeaderNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_strips_diacritics_and_case() {
        assert_eq!(normalize_header("Tên Môn Học"), "ten mon hoc");
        assert_eq!(normalize_header("ten mon hoc"), "ten mon hoc");
        assert_eq!(normalize_header("TEN MON HOC"), "ten mon hoc");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_header("  tên   môn \t học "), "ten mon hoc");
    }

    #[test]
    fn test_d_with_stroke_survives_normalization() {
        // 'đ' has no NFD decomposition, so it is not stripped. Both table
        // keys are normalized the same way, so the header still resolves.
        assert_eq!(normalize_header("Giờ Bắt Đầu"), "gio bat đau");
        let normalizer = HeaderNormalizer::new();
        assert_eq!(
            normalizer.resolve("Giờ Bắt Đầu"),
            Some(CanonicalField::StartTime)
        );
        assert_eq!(
            normalizer.resolve("gio bat dau"),
            Some(CanonicalField::StartTime)
        );
    }

    #[test]
    fn test_resolve_known_spellings() {
        let normalizer = HeaderNormalizer::new();
        assert_eq!(
            normalizer.resolve("Tên Môn Học"),
            Some(CanonicalField::SubjectName)
        );
        assert_eq!(normalizer.resolve("THU"), Some(CanonicalField::DayOfWeek));
        assert_eq!(
            normalizer.resolve("giờ kết thúc"),
            Some(CanonicalField::EndTime)
        );
        assert_eq!(normalizer.resolve("Loại"), Some(CanonicalField::SessionType));
    }

    #[test]
    fn test_unrecognized_header_passes_through() {
        let normalizer = HeaderNormalizer::new();
        assert_eq!(normalizer.resolve("ghi chú"), None);
        assert_eq!(normalizer.record_key("Ghi chú"), "Ghi chú");
    }

    #[test]
    fn test_record_key_for_known_header() {
        let normalizer = HeaderNormalizer::new();
        assert_eq!(normalizer.record_key("Phòng Học"), "room");
    }

    #[test]
    fn test_custom_table() {
        let normalizer =
            HeaderNormalizer::with_table([("Course Title", CanonicalField::SubjectName)]);
        assert_eq!(
            normalizer.resolve("course  title"),
            Some(CanonicalField::SubjectName)
        );
        assert_eq!(normalizer.resolve("tên môn học"), None);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(raw in "\\PC{0,40}") {
            let once = normalize_header(&raw);
            prop_assert_eq!(normalize_header(&once), once);
        }

        #[test]
        fn normalize_is_case_insensitive(raw in "[a-zA-Z ]{0,40}") {
            prop_assert_eq!(
                normalize_header(&raw.to_uppercase()),
                normalize_header(&raw.to_lowercase())
            );
        }
    }
}
