use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::config::ReportSettings;
use crate::core::MatchOutcome;
use crate::models::UnmatchedRecord;

/// Errors raised while writing reports
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes the match table and the unmatched remainder
///
/// Output format is chosen by file extension: `.csv` or `.json`.
pub struct ReportSink {
    matches_path: PathBuf,
    unmatched_path: PathBuf,
}

impl ReportSink {
    pub fn new(matches_path: impl Into<PathBuf>, unmatched_path: impl Into<PathBuf>) -> Self {
        Self {
            matches_path: matches_path.into(),
            unmatched_path: unmatched_path.into(),
        }
    }

    pub fn from_settings(settings: &ReportSettings) -> Self {
        Self::new(&settings.matches, &settings.unmatched)
    }

    /// Write both report tables for one matching run
    pub fn write(&self, outcome: &MatchOutcome) -> Result<(), SinkError> {
        write_table(&self.matches_path, &outcome.matches)?;
        tracing::info!(
            "Wrote {} matches to {}",
            outcome.matches.len(),
            self.matches_path.display()
        );

        let unmatched: Vec<UnmatchedRecord> =
            outcome.unmatched.iter().map(UnmatchedRecord::from).collect();
        write_table(&self.unmatched_path, &unmatched)?;
        tracing::info!(
            "Wrote {} unmatched students to {}",
            unmatched.len(),
            self.unmatched_path.display()
        );

        Ok(())
    }
}

/// Serialize rows to `path`, dispatching on the file extension
fn write_table<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), SinkError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => {
            let mut writer = csv::Writer::from_path(path)?;
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
            Ok(())
        }
        "json" => {
            let file = File::create(path)?;
            serde_json::to_writer_pretty(file, rows)?;
            Ok(())
        }
        _ => Err(SinkError::UnsupportedFormat(ext)),
    }
}
