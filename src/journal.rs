use crate::error::Result;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Timestamp layout of every journal line: `2006-Aug-06-14:03:59`.
const TIMESTAMP_FORMAT: &str = "%Y-%b-%d-%H:%M:%S";

/// The eight fixed points in the pipeline where a journal line is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    JobStarted,
    ExtractStarted,
    ExtractEnded,
    TransformStarted,
    TransformEnded,
    LoadStarted,
    LoadEnded,
    JobEnded,
}

impl Checkpoint {
    pub fn message(&self) -> &'static str {
        match self {
            Checkpoint::JobStarted => "ETL Job Started",
            Checkpoint::ExtractStarted => "Extract phase Started",
            Checkpoint::ExtractEnded => "Extract phase Ended",
            Checkpoint::TransformStarted => "Transform phase Started",
            Checkpoint::TransformEnded => "Transform phase Ended",
            Checkpoint::LoadStarted => "Load phase Started",
            Checkpoint::LoadEnded => "Load phase Ended",
            Checkpoint::JobEnded => "ETL Job Ended",
        }
    }
}

/// Append-only job log. Each call opens the file, appends one
/// `timestamp,message` line, and closes the handle again; nothing is held
/// across stage boundaries. The file is never truncated or rotated.
pub struct JobJournal {
    path: PathBuf,
}

impl JobJournal {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn checkpoint(&self, checkpoint: Checkpoint) -> Result<()> {
        self.log(checkpoint.message())
    }

    pub fn log(&self, message: &str) -> Result<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{},{}", timestamp, message)?;

        Ok(())
    }
}
