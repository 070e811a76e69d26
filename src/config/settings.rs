//! User settings for the GrowthSpring CLI
//!
//! Manages report branding and formatting preferences. Settings are stored as
//! JSON in the config directory and created with defaults on first use.

use serde::{Deserialize, Serialize};

use super::paths::ClubPaths;
use crate::error::ClubError;

fn default_schema_version() -> u32 {
    1
}

fn default_brand_name() -> String {
    "GrowthSpring".to_string()
}

fn default_footer_note() -> String {
    "GrowthSpring • Internal Use".to_string()
}

fn default_date_format() -> String {
    "%d %b %Y".to_string()
}

fn default_datetime_format() -> String {
    "%d %b %Y, %H:%M".to_string()
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Brand name shown in report headers
    #[serde(default = "default_brand_name")]
    pub brand_name: String,

    /// Footer note printed on every document page
    #[serde(default = "default_footer_note")]
    pub footer_note: String,

    /// Date format for record dates (chrono format string)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Timestamp format for the "Generated:" header line
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            brand_name: default_brand_name(),
            footer_note: default_footer_note(),
            date_format: default_date_format(),
            datetime_format: default_datetime_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if missing
    pub fn load_or_create(paths: &ClubPaths) -> Result<Self, ClubError> {
        let path = paths.settings_file();

        if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| {
                ClubError::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            serde_json::from_str(&contents).map_err(|e| {
                ClubError::Config(format!("Failed to parse {}: {}", path.display(), e))
            })
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ClubPaths) -> Result<(), ClubError> {
        paths.ensure_directories()?;
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ClubError::Config(format!("Failed to write settings: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.brand_name, "GrowthSpring");
        assert_eq!(settings.date_format, "%d %b %Y");
    }

    #[test]
    fn test_load_or_create_roundtrip() {
        let temp = TempDir::new().unwrap();
        let paths = ClubPaths::with_base_dir(temp.path().to_path_buf());

        let created = Settings::load_or_create(&paths).unwrap();
        assert!(paths.is_initialized());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(created.brand_name, loaded.brand_name);
        assert_eq!(created.schema_version, loaded.schema_version);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let temp = TempDir::new().unwrap();
        let paths = ClubPaths::with_base_dir(temp.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), r#"{"brand_name":"TestClub"}"#).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.brand_name, "TestClub");
        assert_eq!(settings.footer_note, "GrowthSpring • Internal Use");
    }
}
