//! Path management for SpentSmart
//!
//! ## Path Resolution Order
//!
//! 1. `SPENTSMART_DATA_DIR` environment variable (if set)
//! 2. The platform data directory reported by the `directories` crate,
//!    e.g. `~/.local/share/spentsmart` on Linux

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::SpentSmartError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SPENTSMART_DATA_DIR";

/// Manages all paths used by SpentSmart
#[derive(Debug, Clone)]
pub struct SpentSmartPaths {
    base_dir: PathBuf,
}

impl SpentSmartPaths {
    /// Resolve the base directory from the environment or the platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SpentSmartError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "spentsmart")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| {
                    SpentSmartError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding the expense data file
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Default directory for spreadsheet and full exports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Path to the expense records file with the given name
    pub fn expenses_file(&self, file_name: &str) -> PathBuf {
        self.data_dir().join(file_name)
    }

    /// Ensure the base, data and export directories exist
    pub fn ensure_directories(&self) -> Result<(), SpentSmartError> {
        for dir in [self.base_dir.clone(), self.data_dir(), self.export_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                SpentSmartError::Io(format!(
                    "Failed to create directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}
