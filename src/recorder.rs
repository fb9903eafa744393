//! Run recording and export.

use crate::config::{GraphConfig, SerializableConfig};
use crate::runner::RunReport;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while exporting a run record.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize run record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Complete record of one run, for export and cross-engine comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// Configuration used.
    pub config: SerializableConfig,
    /// Engine name.
    pub engine: String,
    /// Final leaf sum.
    pub sum: i64,
    /// Combining-function runs.
    pub evals: u64,
    /// Leaves retained by the sampler.
    pub leaves_read: usize,
    /// Static derived nodes in the graph.
    pub static_nodes: usize,
    /// Dynamic derived nodes in the graph.
    pub dynamic_nodes: usize,
    /// Wall-clock time in milliseconds.
    pub duration_ms: u64,
    /// Metadata.
    pub metadata: RunMetadata,
}

impl RunRecord {
    pub fn new(config: &GraphConfig, report: &RunReport) -> Self {
        Self {
            config: config.to_serializable(),
            engine: report.engine.to_string(),
            sum: report.sum,
            evals: report.evals,
            leaves_read: report.leaves_read,
            static_nodes: report.static_nodes,
            dynamic_nodes: report.dynamic_nodes,
            duration_ms: report.duration.as_millis() as u64,
            metadata: RunMetadata::new(),
        }
    }

    /// Export to a JSON file.
    pub fn export_to_file(&self, path: &Path) -> Result<(), ExportError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Metadata for a run record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    pub timestamp: String,
    pub platform: String,
}

impl RunMetadata {
    pub fn new() -> Self {
        Self {
            timestamp: chrono_lite_timestamp(),
            platform: std::env::consts::OS.to_string(),
        }
    }
}

impl Default for RunMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple timestamp without a chrono dependency.
fn chrono_lite_timestamp() -> String {
    use std::time::SystemTime;
    let duration = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}", duration.as_secs())
}
