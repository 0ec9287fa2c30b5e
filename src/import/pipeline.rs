//! Two-phase import orchestrator.
//!
//! Drives the preview/commit protocol over a delimited input file: decode
//! the file once, validate every data row, then either return a bounded
//! preview or persist the candidates row by row. Persistence is sequential
//! and best-effort; each row is its own unit of work and a failing row
//! never aborts its siblings.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::api::{SemesterId, UserId};
use crate::db::repository::ScheduleRepository;
use crate::import::headers::HeaderNormalizer;
use crate::import::row::{transform_row, RawRecord};
use crate::models::NewScheduleEntry;

/// Maximum number of normalized rows returned in a preview.
pub const PREVIEW_LIMIT: usize = 10;

/// Which phase of the two-phase protocol to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Validate only; no persistence call is made.
    Preview,
    /// Validate, then persist every normalized row in file order.
    Commit,
}

/// One recorded failure, tagged by the stage that produced it.
///
/// Validation issues carry the 1-based line number (header line is 1);
/// persistence issues carry the subject name, since row-number context is
/// no longer threaded through at that stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "lowercase")]
pub enum ImportIssue {
    Validation { row: usize, message: String },
    Persistence { subject: String, message: String },
}

/// Result of one import invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ImportOutcome {
    /// Dry-run result: nothing was persisted.
    Preview {
        /// Always zero; kept so both variants report the same counter.
        imported: usize,
        /// Total number of rows that passed validation.
        preview_count: usize,
        /// At most [`PREVIEW_LIMIT`] normalized rows, in file order.
        preview: Vec<NewScheduleEntry>,
        errors: Vec<ImportIssue>,
    },
    /// Best-effort batch result.
    Commit {
        /// Number of rows actually persisted.
        imported: usize,
        errors: Vec<ImportIssue>,
    },
}

impl ImportOutcome {
    /// Number of rows persisted by this invocation.
    pub fn imported(&self) -> usize {
        match self {
            ImportOutcome::Preview { imported, .. } => *imported,
            ImportOutcome::Commit { imported, .. } => *imported,
        }
    }

    /// Issues recorded across validation and persistence.
    pub fn errors(&self) -> &[ImportIssue] {
        match self {
            ImportOutcome::Preview { errors, .. } => errors,
            ImportOutcome::Commit { errors, .. } => errors,
        }
    }
}

/// Batch-level failure: the file itself could not be read or decoded.
///
/// Per-row problems never surface here; they are recorded as
/// [`ImportIssue`]s inside a normally-returned [`ImportOutcome`].
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read import file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode delimited input: {0}")]
    Decode(#[from] csv::Error),
}

/// Orchestrator for the bulk schedule import.
pub struct ScheduleImporter {
    normalizer: HeaderNormalizer,
}

impl ScheduleImporter {
    /// Importer with the built-in header spelling table.
    pub fn new() -> Self {
        Self::with_normalizer(HeaderNormalizer::new())
    }

    /// Importer with a caller-configured header normalizer.
    pub fn with_normalizer(normalizer: HeaderNormalizer) -> Self {
        Self { normalizer }
    }

    /// Run an import over a file on disk.
    pub async fn import_path<R>(
        &self,
        repo: &R,
        path: &Path,
        user_id: UserId,
        semester_id: SemesterId,
        mode: ImportMode,
    ) -> Result<ImportOutcome, ImportError>
    where
        R: ScheduleRepository + ?Sized,
    {
        let file = File::open(path)?;
        self.import_reader(repo, BufReader::new(file), user_id, semester_id, mode)
            .await
    }

    /// Run an import over any byte source with a header line.
    pub async fn import_reader<R, S>(
        &self,
        repo: &R,
        source: S,
        user_id: UserId,
        semester_id: SemesterId,
        mode: ImportMode,
    ) -> Result<ImportOutcome, ImportError>
    where
        R: ScheduleRepository + ?Sized,
        S: Read,
    {
        let records = self.decode(source)?;

        if records.is_empty() {
            info!("import file has a header but no data rows");
            let issue = ImportIssue::Validation {
                row: 0,
                message: "file contains no data rows".to_string(),
            };
            return Ok(match mode {
                ImportMode::Preview => ImportOutcome::Preview {
                    imported: 0,
                    preview_count: 0,
                    preview: Vec::new(),
                    errors: vec![issue],
                },
                ImportMode::Commit => ImportOutcome::Commit {
                    imported: 0,
                    errors: vec![issue],
                },
            });
        }

        info!(rows = records.len(), "decoded import file");

        let mut errors = Vec::new();
        let mut normalized = Vec::new();

        // Line numbering counts the header line as 1.
        for (index, record) in records.iter().enumerate() {
            let line = index + 2;
            match transform_row(record, line, user_id, semester_id) {
                Ok(entry) => normalized.push(entry),
                Err(issue) => {
                    debug!(line, "row failed validation");
                    errors.push(issue);
                }
            }
        }

        match mode {
            ImportMode::Preview => {
                info!(
                    valid = normalized.len(),
                    failed = errors.len(),
                    "preview complete, nothing persisted"
                );
                let preview_count = normalized.len();
                normalized.truncate(PREVIEW_LIMIT);
                Ok(ImportOutcome::Preview {
                    imported: 0,
                    preview_count,
                    preview: normalized,
                    errors,
                })
            }
            ImportMode::Commit => {
                let mut imported = 0;
                for entry in &normalized {
                    match repo.create_entry(entry).await {
                        Ok(entry_id) => {
                            debug!(%entry_id, subject = %entry.subject_name, "row persisted");
                            imported += 1;
                        }
                        Err(err) => {
                            warn!(subject = %entry.subject_name, error = %err, "row rejected by store");
                            errors.push(ImportIssue::Persistence {
                                subject: entry.subject_name.clone(),
                                message: err.to_string(),
                            });
                        }
                    }
                }
                info!(
                    imported,
                    attempted = normalized.len(),
                    failed = errors.len(),
                    "import committed"
                );
                Ok(ImportOutcome::Commit { imported, errors })
            }
        }
    }

    /// Decode the delimited input into one record per data row, applying
    /// the header mapping positionally.
    fn decode<S: Read>(&self, source: S) -> Result<Vec<RawRecord>, ImportError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        let keys: Vec<String> = reader
            .headers()?
            .iter()
            .map(|raw| self.normalizer.record_key(raw))
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let raw = result?;
            let mut record = RawRecord::new();
            for (index, value) in raw.iter().enumerate() {
                // Cells beyond the header width have no name; drop them.
                if let Some(key) = keys.get(index) {
                    record.insert(key.clone(), value.to_string());
                }
            }
            records.push(record);
        }

        Ok(records)
    }
}

impl Default for ScheduleImporter {
    fn default() -> Self {
        Self::new()
    }
}
