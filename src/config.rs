use config::{Config, ConfigError, Environment, File};
use dotenvy::dotenv;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::SplitError;
use crate::splitter::{DEFAULT_GROUP_SIZE, DEFAULT_PRESET};

const APP_DIR: &str = "novel_splitter";
const ENV_PREFIX: &str = "NOVEL_SPLITTER";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub language: String,
    pub default_preset: String,
    pub group_size: usize,
    pub output_dir: Option<PathBuf>,
    pub keep_preface: bool,

    // Override the per-language decoration around labels in file names
    pub label_prefix: Option<String>,
    pub label_suffix: Option<String>,

    #[serde(default)]
    pub presets: BTreeMap<String, String>,
}

impl Settings {
    /// Load settings from the user config dir, the working directory (or an
    /// explicit file) and `NOVEL_SPLITTER__*` environment variables.
    pub fn new(explicit: Option<&Path>) -> Result<Self, SplitError> {
        dotenv().ok();

        let mut builder = Self::defaults()?;

        if let Some(dir) = dirs::config_dir() {
            let user_file = dir.join(APP_DIR).join("config");
            builder = builder.add_source(File::from(user_file).required(false));
        }

        builder = match explicit {
            Some(path) => builder.add_source(File::from(path.to_path_buf()).required(true)),
            None => builder.add_source(File::with_name(APP_DIR).required(false)),
        };

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("language", "ko")?
            .set_default("default_preset", DEFAULT_PRESET)?
            .set_default("group_size", DEFAULT_GROUP_SIZE as u64)?
            .set_default("keep_preface", false)
    }

    pub fn validate(&self) -> Result<(), SplitError> {
        if self.group_size == 0 {
            return Err(SplitError::InvalidGroupSize(self.group_size));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: "ko".to_string(),
            default_preset: DEFAULT_PRESET.to_string(),
            group_size: DEFAULT_GROUP_SIZE,
            output_dir: None,
            keep_preface: false,
            label_prefix: None,
            label_suffix: None,
            presets: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("splitter.toml");
        fs::write(
            &path,
            "language = \"en\"\ngroup_size = 10\nkeep_preface = true\n\n[presets]\nhwa = '\\d+화'\n",
        )
        .unwrap();

        let settings = Settings::new(Some(path.as_path())).unwrap();
        assert_eq!(settings.language, "en");
        assert_eq!(settings.group_size, 10);
        assert!(settings.keep_preface);
        assert_eq!(settings.default_preset, DEFAULT_PRESET);
        assert_eq!(settings.presets.get("hwa").map(String::as_str), Some(r"\d+화"));
    }

    #[test]
    fn test_zero_group_size_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("splitter.toml");
        fs::write(&path, "group_size = 0\n").unwrap();

        assert!(matches!(
            Settings::new(Some(path.as_path())),
            Err(SplitError::InvalidGroupSize(0))
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(matches!(Settings::new(Some(path.as_path())), Err(SplitError::Config(_))));
    }

    #[test]
    fn test_default_matches_builder_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.group_size, DEFAULT_GROUP_SIZE);
        assert_eq!(settings.language, "ko");
        assert!(settings.validate().is_ok());
    }
}
