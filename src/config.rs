use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    #[serde(default = "default_skip_proper_nouns")]
    pub skip_proper_nouns: bool,

    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// API key for the external validation oracle; absent means the
    /// oracle is disabled.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_api_timeout_secs")]
    pub api_timeout_secs: u64,
}

fn default_max_suggestions() -> usize {
    crate::checker::suggestions::MAX_SUGGESTIONS
}

fn default_skip_proper_nouns() -> bool {
    true
}

fn default_api_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_suggestions: default_max_suggestions(),
            skip_proper_nouns: default_skip_proper_nouns(),
            ignore_patterns: vec![
                r"\b[A-Z0-9_]{2,}\b".to_string(),    // ALL_CAPS
                r"https?://\S+".to_string(),         // URLs
                r"\b[a-fA-F0-9]{32,}\b".to_string(), // Hashes
            ],
            api_key: None,
            api_timeout_secs: default_api_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config >
    /// global config > defaults.
    pub fn load(
        api_key: Option<String>,
        max_suggestions: Option<usize>,
        cli_patterns: Vec<String>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        let local_path = PathBuf::from(".spellward.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        if let Some(key) = api_key {
            config.api_key = Some(key);
        }
        if let Some(max) = max_suggestions {
            config.max_suggestions = max;
        }
        config.ignore_patterns.extend(cli_patterns);

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        if other.max_suggestions != default_max_suggestions() {
            self.max_suggestions = other.max_suggestions;
        }
        self.skip_proper_nouns = other.skip_proper_nouns;
        if !other.ignore_patterns.is_empty() {
            self.ignore_patterns = other.ignore_patterns;
        }
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.api_timeout_secs != default_api_timeout_secs() {
            self.api_timeout_secs = other.api_timeout_secs;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellward").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.max_suggestions, 5);
        assert!(config.skip_proper_nouns);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_merge_configs() {
        let base = Config::default();
        let override_config = Config {
            max_suggestions: 3,
            api_key: Some("abc".to_string()),
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.max_suggestions, 3);
        assert_eq!(merged.api_key.as_deref(), Some("abc"));
    }

    #[test]
    fn test_parse_toml() {
        let config: Config = toml::from_str(
            r#"
            max_suggestions = 2
            skip_proper_nouns = false
            api_timeout_secs = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.max_suggestions, 2);
        assert!(!config.skip_proper_nouns);
        assert_eq!(config.api_timeout_secs, 3);
        assert!(config.ignore_patterns.is_empty());
    }
}
