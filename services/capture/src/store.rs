//! Append-only CSV frame log.
//!
//! One row per successful fetch: `timestamp, v0, v1, ..., v767`. Rows are
//! never rewritten or deleted. Reads do not validate field counts; a bad
//! row is caught at render time.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

/// Timestamp column format (local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row read back from the log, fields still as text.
#[derive(Debug, Clone)]
pub struct LoggedFrame {
    pub timestamp: String,
    pub fields: Vec<String>,
}

/// Handle to the frame log file. Opened per operation, append mode for
/// writes; no locking, single-process tool.
pub struct FrameLog {
    path: PathBuf,
}

impl FrameLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one frame stamped with the current local time.
    pub fn append(&self, values: &[f32]) -> Result<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.append_at(&timestamp, values)
    }

    /// Append one frame with an explicit timestamp.
    pub fn append_at(&self, timestamp: &str, values: &[f32]) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open frame log {}", self.path.display()))?;

        let mut writer = csv::Writer::from_writer(file);

        let mut row = Vec::with_capacity(values.len() + 1);
        row.push(timestamp.to_string());
        row.extend(values.iter().map(|v| v.to_string()));
        writer.write_record(&row)?;
        writer.flush()?;

        Ok(())
    }

    /// Read every logged row in log order.
    ///
    /// A missing log file reads as empty. Field counts are not checked here.
    pub fn read_all(&self) -> Result<Vec<LoggedFrame>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .with_context(|| format!("failed to read frame log {}", self.path.display()))?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.context("malformed frame log record")?;
            let mut fields = record.iter();
            let timestamp = fields.next().unwrap_or_default().to_string();
            rows.push(LoggedFrame {
                timestamp,
                fields: fields.map(str::to_string).collect(),
            });
        }

        Ok(rows)
    }
}
