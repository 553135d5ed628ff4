//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default number of entries in dashboard rankings
pub const DEFAULT_DASHBOARD_LIMIT: usize = 5;

/// PRDM configuration with layered hierarchy
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Default author for new PRDs
    pub author: Option<String>,

    /// Default output format
    pub default_format: Option<String>,

    /// Number of authors / recent PRDs shown on the dashboard
    pub dashboard_limit: Option<usize>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/prdm/config.yaml)
        if let Some(global) = Self::global_config_path().and_then(|p| Self::from_file(&p)) {
            config.merge(global);
        }

        // 3. Environment variables
        config.apply_env(|key| std::env::var(key).ok());

        config
    }

    /// Read a config file, ignoring missing or malformed files
    pub fn from_file(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                None
            }
        }
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "prdm")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(author) = lookup("PRDM_AUTHOR") {
            self.author = Some(author);
        }
        if let Some(format) = lookup("PRDM_FORMAT") {
            self.default_format = Some(format);
        }
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.author.is_some() {
            self.author = other.author;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
        if other.dashboard_limit.is_some() {
            self.dashboard_limit = other.dashboard_limit;
        }
    }

    /// Get the author name, falling back to the login name
    pub fn author(&self) -> String {
        if let Some(ref author) = self.author {
            return author.clone();
        }

        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string())
    }

    pub fn dashboard_limit(&self) -> usize {
        self.dashboard_limit.unwrap_or(DEFAULT_DASHBOARD_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_merge_prefers_other() {
        let mut base = Config {
            author: Some("a".into()),
            default_format: Some("tsv".into()),
            dashboard_limit: None,
        };
        base.merge(Config {
            author: None,
            default_format: Some("json".into()),
            dashboard_limit: Some(3),
        });
        assert_eq!(base.author.as_deref(), Some("a"));
        assert_eq!(base.default_format.as_deref(), Some("json"));
        assert_eq!(base.dashboard_limit(), 3);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [("PRDM_AUTHOR", "Env Author")].into_iter().collect();
        let mut config = Config {
            author: Some("file".into()),
            ..Default::default()
        };
        config.apply_env(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.author(), "Env Author");
        assert_eq!(config.default_format, None);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "author: Jane\ndashboard_limit: 10\n").unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.author.as_deref(), Some("Jane"));
        assert_eq!(config.dashboard_limit(), 10);

        std::fs::write(&path, "dashboard_limit: [not, a, number]\n").unwrap();
        assert!(Config::from_file(&path).is_none());
        assert!(Config::from_file(&dir.path().join("missing.yaml")).is_none());
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(Config::default().dashboard_limit(), DEFAULT_DASHBOARD_LIMIT);
    }
}
