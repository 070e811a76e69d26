//! Path management for the GrowthSpring CLI
//!
//! Provides platform-appropriate path resolution for configuration and
//! export output.
//!
//! ## Path Resolution Order
//!
//! 1. `GROWTHSPRING_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (e.g. `~/.config/growthspring-cli` on
//!    Linux, `%APPDATA%\growthspring-cli` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ClubError;

/// Manages all paths used by the CLI
#[derive(Debug, Clone)]
pub struct ClubPaths {
    /// Base directory for all GrowthSpring data
    base_dir: PathBuf,
}

impl ClubPaths {
    /// Create a new ClubPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ClubError> {
        let base_dir = if let Ok(custom) = std::env::var("GROWTHSPRING_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "GrowthSpring", "growthspring-cli").ok_or_else(
                || ClubError::Config("Could not determine a home directory".to_string()),
            )?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create ClubPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the default directory for export output
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), ClubError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ClubError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.exports_dir())
            .map_err(|e| ClubError::Io(format!("Failed to create exports directory: {}", e)))?;

        Ok(())
    }

    /// Check if the CLI has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
