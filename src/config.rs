//! Configuration handling for the TUI

use crate::state::ValidityMode;
use crate::submit::{DEFAULT_BANNER_DURATION, DEFAULT_SUBMIT_DELAY};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration for the TUI. Never holds form data.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Artificial submission latency in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// How long the success banner stays visible in milliseconds
    pub banner_duration_ms: Option<u64>,
    /// How the submit button decides the form is valid
    pub validity_mode: Option<ValidityMode>,
    /// Hide password characters
    pub mask_passwords: Option<bool>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "register", "register-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Path of the log file written while the UI owns the terminal
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("register-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file; a missing file yields defaults
    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        Self::or_default(Self::load())
    }

    fn or_default(loaded: Result<Self>) -> Self {
        match loaded {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring unreadable config: {e:#}");
                Self::default()
            }
        }
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SUBMIT_DELAY)
    }

    pub fn banner_duration(&self) -> Duration {
        self.banner_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_BANNER_DURATION)
    }

    pub fn validity_mode(&self) -> ValidityMode {
        self.validity_mode.unwrap_or_default()
    }

    pub fn mask_passwords(&self) -> bool {
        self.mask_passwords.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.submit_delay_ms.is_none());
        assert!(config.banner_duration_ms.is_none());
        assert!(config.validity_mode.is_none());
        assert!(config.mask_passwords.is_none());
    }

    #[test]
    fn test_default_values() {
        let config = TuiConfig::default();
        assert_eq!(config.submit_delay(), Duration::from_millis(2000));
        assert_eq!(config.banner_duration(), Duration::from_millis(3500));
        assert_eq!(config.validity_mode(), ValidityMode::Lenient);
        assert!(config.mask_passwords());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            submit_delay_ms: Some(500),
            banner_duration_ms: Some(1000),
            validity_mode: Some(ValidityMode::Strict),
            mask_passwords: Some(false),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.submit_delay(), Duration::from_millis(500));
        assert_eq!(parsed.banner_duration(), Duration::from_millis(1000));
        assert_eq!(parsed.validity_mode(), ValidityMode::Strict);
        assert!(!parsed.mask_passwords());
    }

    #[test]
    fn test_partial_serialization() {
        let json = r#"{"validity_mode": "strict"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.validity_mode(), ValidityMode::Strict);
        assert_eq!(parsed.submit_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.validity_mode.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"submit_delay_ms": 10, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.submit_delay_ms, Some(10));
    }

    #[test]
    fn test_rejects_unknown_validity_mode() {
        let json = r#"{"validity_mode": "whatever"}"#;
        assert!(serde_json::from_str::<TuiConfig>(json).is_err());
    }

    #[test]
    fn test_paths_are_json_and_log() {
        if let Some(path) = TuiConfig::config_path() {
            assert!(path.ends_with("config.json"));
        }
        if let Some(path) = TuiConfig::log_path() {
            assert!(path.ends_with("register-tui.log"));
        }
    }

    fn temp_config(name: &str, content: Option<&str>) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("register-tui-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let _ = fs::remove_file(&path);
        if let Some(content) = content {
            fs::write(&path, content).unwrap();
        }
        path
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_config("valid.json", Some(r#"{"banner_duration_ms": 100}"#));
        let config = TuiConfig::load_from(&path).unwrap();
        assert_eq!(config.banner_duration(), Duration::from_millis(100));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = temp_config("missing.json", None);
        let config = TuiConfig::load_from(&path).unwrap();
        assert!(config.submit_delay_ms.is_none());
        assert_eq!(config.submit_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let path = temp_config("malformed.json", Some("{ submit_delay_ms: "));
        let loaded = TuiConfig::load_from(&path);
        assert!(loaded.is_err());

        let config = TuiConfig::or_default(loaded);
        assert!(config.submit_delay_ms.is_none());
        assert_eq!(config.submit_delay(), Duration::from_millis(2000));
        assert_eq!(config.validity_mode(), ValidityMode::Lenient);
        fs::remove_file(&path).unwrap();
    }
}
