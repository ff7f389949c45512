use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use thiserror::Error;

use crate::config::RosterSettings;

/// Errors raised while reading the roster
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Roster file not available: {0}")]
    Unavailable(String),

    #[error("Unsupported roster format: {0}")]
    UnsupportedFormat(String),

    #[error("Worksheet not found: {0}")]
    MissingSheet(String),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One raw tabular sheet with normalized column names
///
/// Headers are lowercased and trimmed before any lookup, so callers address
/// columns by their normalized names. Rows are keyed the same way; fully
/// blank rows are dropped.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

impl RawTable {
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }
}

/// Reads the student and mentor tables from spreadsheet files
///
/// Both tables may live in one workbook (named sheets) or in separate CSV
/// files; the format is chosen by file extension.
pub struct RosterSource {
    students_path: PathBuf,
    mentors_path: PathBuf,
    students_sheet: String,
    mentors_sheet: String,
}

impl RosterSource {
    pub fn new(
        students_path: impl Into<PathBuf>,
        mentors_path: impl Into<PathBuf>,
        students_sheet: impl Into<String>,
        mentors_sheet: impl Into<String>,
    ) -> Self {
        Self {
            students_path: students_path.into(),
            mentors_path: mentors_path.into(),
            students_sheet: students_sheet.into(),
            mentors_sheet: mentors_sheet.into(),
        }
    }

    pub fn from_settings(settings: &RosterSettings) -> Self {
        Self::new(
            &settings.students,
            &settings.mentors,
            &settings.students_sheet,
            &settings.mentors_sheet,
        )
    }

    pub fn load_students(&self) -> Result<RawTable, SourceError> {
        tracing::debug!("Loading students from {}", self.students_path.display());
        load_table(&self.students_path, &self.students_sheet)
    }

    pub fn load_mentors(&self) -> Result<RawTable, SourceError> {
        tracing::debug!("Loading mentors from {}", self.mentors_path.display());
        load_table(&self.mentors_path, &self.mentors_sheet)
    }
}

/// Parse one table, dispatching on the file extension
fn load_table(path: &Path, sheet: &str) -> Result<RawTable, SourceError> {
    if !path.exists() {
        return Err(SourceError::Unavailable(path.display().to_string()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => read_csv(path),
        "xlsx" | "xls" => read_worksheet(path, sheet),
        _ => Err(SourceError::UnsupportedFormat(ext)),
    }
}

fn read_csv(path: &Path) -> Result<RawTable, SourceError> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row = HashMap::new();

        for (col_idx, value) in record.iter().enumerate() {
            if let Some(header) = headers.get(col_idx) {
                row.insert(header.clone(), value.trim().to_string());
            }
        }

        if row.values().all(|v| v.is_empty()) {
            continue;
        }

        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}

fn read_worksheet(path: &Path, sheet: &str) -> Result<RawTable, SourceError> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e: calamine::XlsxError| SourceError::Workbook(e.to_string()))?;

    let sheet_names = workbook.sheet_names();
    if !sheet_names.iter().any(|name| name == sheet) {
        return Err(SourceError::MissingSheet(sheet.to_string()));
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| SourceError::Workbook(e.to_string()))?;

    let mut sheet_rows = range.rows();
    let header_row = sheet_rows
        .next()
        .ok_or_else(|| SourceError::Workbook(format!("worksheet {} has no rows", sheet)))?;

    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| normalize_header(&cell.to_string()))
        .collect();

    let mut rows = Vec::new();
    for data_row in sheet_rows {
        let mut row = HashMap::new();

        for (col_idx, cell) in data_row.iter().enumerate() {
            if let Some(header) = headers.get(col_idx) {
                row.insert(header.clone(), cell.to_string().trim().to_string());
            }
        }

        if row.values().all(|v| v.is_empty()) {
            continue;
        }

        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}

/// Lowercase and trim a raw column name
fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}
