// src/util/log.rs

//! Diagnostic log - keeps the payloads of submissions that did not go
//! through, so they can be recovered or inspected after the fact.
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;

pub const REJECTED_LOG: &str = "rejected.log";

/// Why a payload ended up in the diagnostic log.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    /// The server answered with a non-200 status.
    Rejected { status: u16 },
    /// The request never produced a status.
    Failed { reason: String },
}

impl DiagnosticKind {
    fn label(&self) -> String {
        match self {
            DiagnosticKind::Rejected { status } => format!("REJECTED status={}", status),
            DiagnosticKind::Failed { reason } => format!("FAILED reason={}", reason),
        }
    }
}

/// Append-only file log of failed submissions.
#[derive(Debug)]
pub struct DiagnosticLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl DiagnosticLog {
    /// Opens (or creates) `rejected.log` under `log_dir`. Existing entries
    /// are kept across runs.
    pub fn open(log_dir: &Path) -> std::io::Result<Self> {
        create_dir_all(log_dir)?;
        let path = log_dir.join(REJECTED_LOG);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one entry: header line, then the payload as sent.
    pub fn record(&self, submission_id: &str, target: &str, kind: &DiagnosticKind, payload: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let formatted = format!(
            "[{}] [{}] submission={} target={}\n{}\n",
            timestamp,
            kind.label(),
            submission_id,
            target,
            payload
        );

        match self.file.lock() {
            Ok(mut file) => {
                if let Err(e) = file.write_all(formatted.as_bytes()).and_then(|_| file.flush()) {
                    tracing::error!(error = %e, path = %self.path.display(), "failed to write diagnostic log");
                }
            }
            Err(_) => {
                tracing::error!(path = %self.path.display(), "diagnostic log lock poisoned");
            }
        }
    }
}
