use log::{Level, log};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NextTaskError, Result};

/// Prompt shown before each read when no config overrides it
pub const DEFAULT_PROMPT: &str = "Please provide feedback or next task (type 'stop' to exit): ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub prompt: PromptConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub text: String,
    pub separator: String,
    pub separator_width: usize,
    pub color: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_PROMPT.to_string(),
            separator: "=".to_string(),
            separator_width: 50,
            color: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            prompt: PromptConfig::default(),
        }
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// A loaded config plus what happened while finding it.
///
/// Loading runs before the logger exists, so the outcome is kept here and
/// written out by `log_summary` once logging is up.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    /// Implicit config files that existed but could not be used
    pub skipped: Vec<String>,
}

impl LoadedConfig {
    /// Log records describing how the config was found, in order
    pub fn summary(&self) -> Vec<(Level, String)> {
        let mut lines: Vec<(Level, String)> = self.skipped.iter().map(|w| (Level::Warn, w.clone())).collect();
        lines.push(match &self.source {
            ConfigSource::File(path) => (Level::Info, format!("Loaded config from: {}", path.display())),
            ConfigSource::Defaults => (Level::Info, "No config file found, using defaults".to_string()),
        });
        lines
    }

    pub fn log_summary(&self) {
        for (level, line) in self.summary() {
            log!(level, "{}", line);
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<LoadedConfig> {
        // An explicit path must load; no fallback
        if let Some(path) = config_path {
            return Ok(LoadedConfig {
                config: Self::load_from_file(path)?,
                source: ConfigSource::File(path.clone()),
                skipped: Vec::new(),
            });
        }

        let project_name = env!("CARGO_PKG_NAME");
        let mut candidates = Vec::with_capacity(2);

        // Primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(project_name).join(format!("{}.yml", project_name)));
        }

        // Fallback location: ./<project>.yml
        candidates.push(PathBuf::from(format!("{}.yml", project_name)));

        Ok(Self::load_first(candidates))
    }

    /// Use the first candidate that loads, falling back to defaults
    fn load_first(candidates: Vec<PathBuf>) -> LoadedConfig {
        let mut skipped = Vec::new();
        for path in candidates {
            if let Some(config) = Self::try_load(&path, &mut skipped) {
                return LoadedConfig {
                    config,
                    source: ConfigSource::File(path),
                    skipped,
                };
            }
        }

        LoadedConfig {
            config: Self::default(),
            source: ConfigSource::Defaults,
            skipped,
        }
    }

    /// Load an implicit config location, recording and skipping bad files
    fn try_load(path: &Path, skipped: &mut Vec<String>) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        match Self::load_from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                skipped.push(format!("Failed to load config from {}: {}", path.display(), e));
                None
            }
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| NextTaskError::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.prompt.separator.is_empty() {
            return Err(NextTaskError::Config("prompt.separator must not be empty".to_string()));
        }
        if self.prompt.separator_width == 0 {
            return Err(NextTaskError::Config(
                "prompt.separator_width must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert_eq!(config.prompt.text, DEFAULT_PROMPT);
        assert_eq!(config.prompt.separator, "=");
        assert_eq!(config.prompt.separator_width, 50);
        assert!(config.prompt.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: Config = serde_yaml::from_str("prompt:\n  separator_width: 20\n").unwrap();
        assert_eq!(config.prompt.separator_width, 20);
        assert_eq!(config.prompt.separator, "=");
        assert_eq!(config.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_level: debug\nprompt:\n  separator: \"-\"\n  color: false").unwrap();

        let loaded = Config::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(loaded.source, ConfigSource::File(file.path().to_path_buf()));
        assert!(loaded.skipped.is_empty());
        let config = loaded.config;
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.prompt.separator, "-");
        assert!(!config.prompt.color);
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yml");
        let err = Config::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, NextTaskError::Config(_)));
    }

    #[test]
    fn test_load_explicit_invalid_yaml_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "prompt: [not, a, map").unwrap();
        let err = Config::load(Some(&file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, NextTaskError::Yaml(_)));
    }

    #[test]
    fn test_try_load_skips_invalid_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "prompt: [bad").unwrap();

        let mut skipped = Vec::new();
        assert!(Config::try_load(file.path(), &mut skipped).is_none());
        assert_eq!(skipped.len(), 1);
        assert!(skipped[0].contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_try_load_skips_failed_validation() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "prompt:\n  separator_width: 0").unwrap();

        let mut skipped = Vec::new();
        assert!(Config::try_load(file.path(), &mut skipped).is_none());
        assert_eq!(skipped.len(), 1);
        assert!(skipped[0].contains("separator_width"));
    }

    #[test]
    fn test_try_load_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut skipped = Vec::new();
        assert!(Config::try_load(&dir.path().join("nexttask.yml"), &mut skipped).is_none());
        assert!(skipped.is_empty());
    }

    #[test]
    fn test_try_load_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_level: warn").unwrap();

        let mut skipped = Vec::new();
        let config = Config::try_load(file.path(), &mut skipped).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("warn"));
        assert!(skipped.is_empty());
    }

    #[test]
    fn test_load_first_falls_through_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.yml");
        let good = dir.path().join("good.yml");
        std::fs::write(&bad, "prompt: [bad").unwrap();
        std::fs::write(&good, "log_level: debug").unwrap();

        let loaded = Config::load_first(vec![dir.path().join("missing.yml"), bad.clone(), good.clone()]);
        assert_eq!(loaded.source, ConfigSource::File(good.clone()));
        assert_eq!(loaded.config.log_level.as_deref(), Some("debug"));

        let summary = loaded.summary();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].0, Level::Warn);
        assert!(summary[0].1.starts_with(&format!("Failed to load config from {}", bad.display())));
        assert_eq!(summary[1], (Level::Info, format!("Loaded config from: {}", good.display())));
    }

    #[test]
    fn test_load_first_defaults_when_nothing_loads() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("nexttask.yml");
        std::fs::write(&bad, "prompt:\n  separator: \"\"").unwrap();

        let loaded = Config::load_first(vec![bad, dir.path().join("missing.yml")]);
        assert_eq!(loaded.source, ConfigSource::Defaults);
        assert_eq!(loaded.config, Config::default());

        let summary = loaded.summary();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].0, Level::Warn);
        assert_eq!(summary[1], (Level::Info, "No config file found, using defaults".to_string()));
    }

    #[test]
    fn test_explicit_load_summary_names_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_level: info").unwrap();

        let loaded = Config::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(
            loaded.summary(),
            vec![(Level::Info, format!("Loaded config from: {}", file.path().display()))]
        );
    }

    #[test]
    fn test_invalid_config() {
        let config = Config {
            prompt: PromptConfig {
                separator_width: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            prompt: PromptConfig {
                separator: String::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
