//! Filesystem input and output.
//!
//! Handles the two ends of a pipeline run:
//! - Reading the roster JSON
//! - Writing the bundle as a JSON document
//! - Writing the bundle as an ES module with accessor helpers

pub mod json;
pub mod module;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info};

use crate::models::{OutputBundle, Roster};

pub use json::{JsonReader, JsonWriter};
pub use module::{render_module, ModuleWriter};

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Where the two output files go.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub json_file: String,
    pub module_file: String,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            json_file: "stats-data.json".to_string(),
            module_file: "statsData.js".to_string(),
        }
    }

    /// Builder method to set output file names.
    pub fn with_files(mut self, json_file: impl Into<String>, module_file: impl Into<String>) -> Self {
        self.json_file = json_file.into();
        self.module_file = module_file.into();
        self
    }

    pub fn json_path(&self) -> PathBuf {
        self.data_dir.join(&self.json_file)
    }

    pub fn module_path(&self) -> PathBuf {
        self.data_dir.join(&self.module_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

/// Create the parent directory of `path` if needed.
pub(crate) fn ensure_parent(path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Read the input roster (sport → players).
pub fn read_roster(path: &Path) -> Result<Roster, StorageError> {
    let roster: Roster = JsonReader::new(path.to_path_buf()).read()?;
    info!(
        "Read {} players across {} sports from {:?}",
        roster.values().map(Vec::len).sum::<usize>(),
        roster.len(),
        path
    );
    Ok(roster)
}

/// Outcome of [`write_outputs`]. Each file is written independently.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl WriteReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    fn record(&mut self, path: PathBuf, result: Result<(), StorageError>) {
        match result {
            Ok(()) => {
                info!("Wrote {:?}", path);
                self.written.push(path);
            }
            Err(e) => {
                error!("Failed to write {:?}: {}", path, e);
                self.failed.push((path, e.to_string()));
            }
        }
    }
}

/// Write the JSON document and the ES module.
///
/// A failure on one file is logged and reported but does not stop the
/// other, so a run can end with only one of the two on disk.
pub fn write_outputs(config: &StorageConfig, bundle: &OutputBundle) -> WriteReport {
    let mut report = WriteReport::default();

    let json_path = config.json_path();
    let result = JsonWriter::new(json_path.clone()).write(bundle);
    report.record(json_path, result);

    let module_path = config.module_path();
    let result = ModuleWriter::new(module_path.clone()).write(bundle);
    report.record(module_path, result);

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatTaxonomy;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn bundle() -> OutputBundle {
        OutputBundle {
            categories: StatTaxonomy::builtin(),
            leaders: BTreeMap::new(),
            trends: BTreeMap::new(),
            comparisons: BTreeMap::new(),
            injury_analytics: BTreeMap::new(),
            market_analytics: BTreeMap::new(),
            last_updated: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_storage_config_paths() {
        let config = StorageConfig::new(PathBuf::from("/data")).with_files("a.json", "b.js");

        assert_eq!(config.json_path(), PathBuf::from("/data/a.json"));
        assert_eq!(config.module_path(), PathBuf::from("/data/b.js"));
    }

    #[test]
    fn test_storage_config_default() {
        let config = StorageConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.json_file, "stats-data.json");
        assert_eq!(config.module_file, "statsData.js");
    }

    #[test]
    fn test_read_roster_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = read_roster(&temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, StorageError::PathNotFound(_)));
    }

    #[test]
    fn test_read_roster_malformed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("roster.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(read_roster(&path), Err(StorageError::Json(_))));
    }

    #[test]
    fn test_write_outputs_creates_both_files() {
        let temp = TempDir::new().unwrap();
        let config = StorageConfig::new(temp.path().join("out"));

        let report = write_outputs(&config, &bundle());
        assert!(report.is_complete());
        assert_eq!(report.written.len(), 2);
        assert!(config.json_path().exists());
        assert!(config.module_path().exists());
    }

    #[test]
    fn test_write_outputs_failure_is_isolated() {
        let temp = TempDir::new().unwrap();
        // A directory where the JSON file should go makes that write fail
        let config = StorageConfig::new(temp.path().to_path_buf());
        fs::create_dir_all(config.json_path()).unwrap();

        let report = write_outputs(&config, &bundle());
        assert!(!report.is_complete());
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, config.json_path());
        assert!(config.module_path().exists());
    }
}
