//! Bulk schedule import from delimited text files.
//!
//! The pipeline ingests a user-supplied tabular file describing weekly
//! class sessions and runs it through three stages:
//!
//! 1. [`headers`]: map arbitrary header spellings (case, diacritics,
//!    whitespace) to canonical field names, applied positionally to every
//!    data row.
//! 2. [`row`]: validate and transform each row independently into a
//!    [`crate::models::NewScheduleEntry`] candidate, collecting a
//!    structured issue per failing row.
//! 3. [`pipeline`]: drive the two-phase preview/commit protocol and, when
//!    committing, persist candidates one by one with per-row failure
//!    isolation.
//!
//! One bad row never aborts the batch; the caller always receives a count
//! of successes and an itemized list of failures.

pub mod headers;
pub mod pipeline;
pub mod row;

pub use headers::{normalize_header, CanonicalField, HeaderNormalizer};
pub use pipeline::{ImportError, ImportIssue, ImportMode, ImportOutcome, ScheduleImporter};
