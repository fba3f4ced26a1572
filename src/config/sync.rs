//! Sync tool configuration (config.json / config.yaml) data structures
//!
//! Values present in a config file override the defaults; missing fields keep
//! their default value.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{self, MetaError, Result};
use crate::format::Format;

/// Config files looked up by [`SyncConfig::load`], in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &["config.json", "config.yaml", "config.yml"];

/// Sync tool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SyncConfig {
    /// API access token
    pub token: String,

    /// Account login, the first half of the namespace
    pub login: String,

    /// Repository slug, the second half of the namespace
    pub repo: String,

    /// Directory posts are written to
    pub post_path: String,

    /// File caching the last synced state
    pub cache_path: String,

    /// File name template for generated markdown
    pub md_format: String,

    /// Number of documents fetched in parallel
    pub concurrency: usize,

    /// Only sync published documents
    pub only_pub: bool,

    /// Output adapter name
    pub adapter: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            login: String::new(),
            repo: String::new(),
            post_path: "yuque".to_string(),
            cache_path: "yuque.json".to_string(),
            md_format: "Title".to_string(),
            concurrency: 5,
            only_pub: true,
            adapter: "markdown".to_string(),
        }
    }
}

impl SyncConfig {
    /// Load the configuration from `dir`.
    ///
    /// `config.json` wins when it parses. An unreadable or unparseable
    /// `config.json` is skipped with a warning and `config.yaml` (then
    /// `config.yml`) is tried.
    /// With no config file at all the defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns [`MetaError::ConfigReadFailed`] if a YAML config file exists but
    /// cannot be read, [`MetaError::ConfigParseFailed`] if the YAML config is
    /// malformed, and [`MetaError::ConfigInvalid`] if the result fails
    /// [`SyncConfig::validate`].
    pub fn load(dir: &Path) -> Result<Self> {
        for name in CONFIG_FILE_NAMES {
            let path = dir.join(name);
            if !path.is_file() {
                continue;
            }

            let format = Format::from_extension(name);
            let parsed = std::fs::read_to_string(&path)
                .map_err(|e| error::config::read_failed(path.display().to_string(), e.to_string()))
                .and_then(|content| Self::parse(&content, format));

            match parsed {
                Ok(config) => {
                    debug!(path = %path.display(), "loaded sync config");
                    config.validate()?;
                    return Ok(config);
                }
                Err(e) if format == Format::Json => {
                    warn!(path = %path.display(), error = %e, "ignoring unusable config");
                }
                Err(e) => return Err(with_path(e, &path)),
            }
        }

        debug!(dir = %dir.display(), "no config file found, using defaults");
        Ok(Self::default())
    }

    /// Parse configuration overrides from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Parse configuration overrides from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty or comment-only document deserializes as null.
        if serde_yaml::from_str::<serde_yaml::Value>(yaml)?.is_null() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Serialize the configuration to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(yaml)
    }

    /// Check the values a sync run cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`MetaError::ConfigInvalid`] if `concurrency` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(error::config::invalid("concurrency must be at least 1"));
        }
        Ok(())
    }

    /// The `login/repo` namespace documents are synced from.
    pub fn namespace(&self) -> String {
        format!("{}/{}", self.login, self.repo)
    }

    fn parse(content: &str, format: Format) -> Result<Self> {
        match format {
            Format::Json => Self::from_json(content),
            Format::Yaml => Self::from_yaml(content),
            Format::Toml | Format::Unspecified => Err(error::decode::unsupported_format(format)),
        }
    }
}

fn with_path(err: MetaError, path: &Path) -> MetaError {
    match err {
        MetaError::ConfigParseFailed { reason, .. } => {
            error::config::parse_failed(path.display().to_string(), reason)
        }
        other => other,
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_dir() -> TempDir {
        TempDir::new().expect("Failed to create temp directory")
    }

    #[test]
    fn test_defaults() {
        let config = SyncConfig::default();
        assert_eq!(config.post_path, "yuque");
        assert_eq!(config.cache_path, "yuque.json");
        assert_eq!(config.md_format, "Title");
        assert_eq!(config.adapter, "markdown");
        assert_eq!(config.concurrency, 5);
        assert!(config.only_pub);
        assert!(config.token.is_empty());
    }

    #[test]
    fn test_from_json_keeps_defaults_for_missing_fields() {
        let config = SyncConfig::from_json(r#"{"login": "alice", "repo": "notes", "onlyPub": false}"#)
            .expect("Should parse JSON config");
        assert_eq!(config.login, "alice");
        assert_eq!(config.repo, "notes");
        assert!(!config.only_pub);
        assert_eq!(config.post_path, "yuque");
        assert_eq!(config.concurrency, 5);
    }

    #[test]
    fn test_from_yaml_camel_case_keys() {
        let config = SyncConfig::from_yaml("postPath: content/posts\nmdFormat: Slug\nconcurrency: 2\n")
            .expect("Should parse YAML config");
        assert_eq!(config.post_path, "content/posts");
        assert_eq!(config.md_format, "Slug");
        assert_eq!(config.concurrency, 2);
        assert_eq!(config.adapter, "markdown");
    }

    #[test]
    fn test_from_yaml_empty_document() {
        let config = SyncConfig::from_yaml("# all defaults\n").expect("Should parse YAML config");
        assert_eq!(config, SyncConfig::default());
    }

    #[test]
    fn test_namespace() {
        let config = SyncConfig {
            login: "alice".to_string(),
            repo: "notes".to_string(),
            ..SyncConfig::default()
        };
        assert_eq!(config.namespace(), "alice/notes");
    }

    #[test]
    fn test_validate_rejects_zero_concurrency() {
        let config = SyncConfig {
            concurrency: 0,
            ..SyncConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(MetaError::ConfigInvalid { .. })
        ));
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let temp = temp_dir();
        let config = SyncConfig::load(temp.path()).expect("Should load defaults");
        assert_eq!(config, SyncConfig::default());
    }

    #[test]
    fn test_load_prefers_json() {
        let temp = temp_dir();
        std::fs::write(temp.path().join("config.json"), r#"{"login": "json"}"#)
            .expect("Failed to write config.json");
        std::fs::write(temp.path().join("config.yaml"), "login: yaml\n")
            .expect("Failed to write config.yaml");

        let config = SyncConfig::load(temp.path()).expect("Should load config");
        assert_eq!(config.login, "json");
    }

    #[test]
    fn test_load_falls_back_to_yaml_when_json_is_invalid() {
        let temp = temp_dir();
        std::fs::write(temp.path().join("config.json"), "{ not json")
            .expect("Failed to write config.json");
        std::fs::write(temp.path().join("config.yaml"), "login: yaml\n")
            .expect("Failed to write config.yaml");

        let config = SyncConfig::load(temp.path()).expect("Should load config");
        assert_eq!(config.login, "yaml");
    }

    #[test]
    fn test_load_falls_back_to_yaml_when_json_is_not_utf8() {
        let temp = temp_dir();
        std::fs::write(temp.path().join("config.json"), [0xff, 0xfe])
            .expect("Failed to write config.json");
        std::fs::write(temp.path().join("config.yaml"), "login: yaml\n")
            .expect("Failed to write config.yaml");

        let config = SyncConfig::load(temp.path()).expect("Should load config");
        assert_eq!(config.login, "yaml");
    }

    #[test]
    fn test_load_yml_extension() {
        let temp = temp_dir();
        std::fs::write(temp.path().join("config.yml"), "repo: docs\n")
            .expect("Failed to write config.yml");

        let config = SyncConfig::load(temp.path()).expect("Should load config");
        assert_eq!(config.repo, "docs");
    }

    #[test]
    fn test_load_invalid_yaml_is_error_with_path() {
        let temp = temp_dir();
        std::fs::write(temp.path().join("config.yaml"), "login: [unclosed\n")
            .expect("Failed to write config.yaml");

        let err = SyncConfig::load(temp.path()).expect_err("Invalid YAML should fail");
        match err {
            MetaError::ConfigParseFailed { path, .. } => assert!(path.ends_with("config.yaml")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_validates() {
        let temp = temp_dir();
        std::fs::write(temp.path().join("config.json"), r#"{"concurrency": 0}"#)
            .expect("Failed to write config.json");

        let err = SyncConfig::load(temp.path()).expect_err("Zero concurrency should fail");
        assert!(matches!(err, MetaError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_to_yaml_uses_camel_case() {
        let yaml = SyncConfig::default().to_yaml().expect("Should serialize");
        assert!(yaml.contains("postPath: yuque"));
        assert!(yaml.contains("onlyPub: true"));
    }
}
