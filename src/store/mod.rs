//! Flat-file record store -- one runner record per line, seven
//! comma-separated fields in fixed positional order.
//!
//! Reads and writes go through the `csv` crate so a runner name containing
//! a comma or quote is RFC 4180-quoted instead of corrupting column
//! alignment. Plain names produce byte-identical lines to naive joining,
//! so hand-written or legacy logs load fine.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One progress entry. Constructed only from a validated submission,
/// immutable thereafter; appended once, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerRecord {
    pub runner_name: String,
    pub total_distance: f64,
    pub distance_covered: f64,
    pub elapsed_time: f64,
    pub target_time: f64,
    pub current_speed: f64,
    pub required_speed: f64,
}

/// Storage interface for runner history. Injected into request handling;
/// there is no process-wide singleton.
pub trait RecordStore: Send + Sync {
    /// Load the full ordered history. A missing log is an empty history,
    /// not an error.
    fn load_all(&self) -> Result<Vec<RunnerRecord>>;

    /// Append one record to the log. The log grows monotonically; prior
    /// lines are never rewritten.
    fn append(&self, record: &RunnerRecord) -> Result<()>;
}

/// File-backed store. The file is shared mutable state across processes
/// with no locking; each append is a single `O_APPEND` write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Numeric fields parse tolerantly: unparseable or absent values load
/// as 0 rather than failing the whole history.
fn num(record: &csv::StringRecord, index: usize) -> f64 {
    record
        .get(index)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

impl RecordStore for FileStore {
    fn load_all(&self) -> Result<Vec<RunnerRecord>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to open log {}", self.path.display()))
            }
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut records = Vec::new();
        for row in reader.records() {
            let row =
                row.with_context(|| format!("failed to read log {}", self.path.display()))?;
            records.push(RunnerRecord {
                runner_name: row.get(0).unwrap_or("").to_string(),
                total_distance: num(&row, 1),
                distance_covered: num(&row, 2),
                elapsed_time: num(&row, 3),
                target_time: num(&row, 4),
                current_speed: num(&row, 5),
                required_speed: num(&row, 6),
            });
        }

        Ok(records)
    }

    fn append(&self, record: &RunnerRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create data directory {}", parent.display())
                })?;
            }
        }

        // Serialize the full line up front so the file write is a single
        // append, not a field-by-field trickle.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record([
            record.runner_name.clone(),
            record.total_distance.to_string(),
            record.distance_covered.to_string(),
            record.elapsed_time.to_string(),
            record.target_time.to_string(),
            record.current_speed.to_string(),
            record.required_speed.to_string(),
        ])?;
        let line = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("failed to serialize record: {e}"))?;

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .with_context(|| format!("failed to open log {}", self.path.display()))?;
        file.write_all(&line)
            .with_context(|| format!("failed to append to log {}", self.path.display()))?;

        tracing::debug!(runner = %record.runner_name, path = %self.path.display(), "record appended");
        Ok(())
    }
}
