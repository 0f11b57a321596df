//! Configuration for actor locks.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Reentrancy ceiling used when nothing else is configured.
pub const DEFAULT_MAX_STACK_DEPTH: u32 = 32;

/// Environment variable overriding the reentrancy ceiling.
pub const MAX_STACK_DEPTH_ENV: &str = "TURNSTILE_MAX_STACK_DEPTH";

/// Settings applied to every lock created at actor activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockConfig {
    /// Maximum number of nested holds one invocation chain may stack up.
    #[serde(default = "default_max_stack_depth")]
    pub max_stack_depth: u32,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            max_stack_depth: default_max_stack_depth(),
        }
    }
}

impl LockConfig {
    /// Create a config with the default ceiling.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_stack_depth: DEFAULT_MAX_STACK_DEPTH,
        }
    }

    /// Set the reentrancy ceiling.
    #[must_use]
    pub const fn with_max_stack_depth(mut self, max_stack_depth: u32) -> Self {
        self.max_stack_depth = max_stack_depth;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the ceiling is zero, since no invocation could ever run.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_stack_depth == 0 {
            return Err(ConfigError::invalid("max_stack_depth must be at least 1"));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns error if the document does not parse or fails validation.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::parse_failed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file. `.json` files are parsed as JSON,
    /// anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read, parsed, or validated.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::read_failed(path, e.to_string()))?;

        if path.extension().is_some_and(|e| e == "json") {
            let config: Self = serde_json::from_str(&content)
                .map_err(|e| ConfigError::parse_failed(e.to_string()))?;
            config.validate()?;
            Ok(config)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns error if [`MAX_STACK_DEPTH_ENV`] is set but not a valid ceiling.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns error if the ceiling is present but unparsable or zero.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(MAX_STACK_DEPTH_ENV) {
            config.max_stack_depth = raw.trim().parse().map_err(|e| {
                ConfigError::invalid(format!("{MAX_STACK_DEPTH_ENV}={raw:?}: {e}"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }
}

const fn default_max_stack_depth() -> u32 {
    DEFAULT_MAX_STACK_DEPTH
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = LockConfig::default();
        assert_eq!(config.max_stack_depth, DEFAULT_MAX_STACK_DEPTH);
        assert_eq!(config, LockConfig::new());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides_ceiling() {
        let config = LockConfig::new().with_max_stack_depth(4);
        assert_eq!(config.max_stack_depth, 4);
    }

    #[test]
    fn test_zero_ceiling_is_invalid() {
        let result = LockConfig::new().with_max_stack_depth(0).validate();
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_from_toml_str() {
        let config = LockConfig::from_toml_str("max_stack_depth = 8").unwrap();
        assert_eq!(config.max_stack_depth, 8);

        let defaulted = LockConfig::from_toml_str("").unwrap();
        assert_eq!(defaulted.max_stack_depth, DEFAULT_MAX_STACK_DEPTH);
    }

    #[test]
    fn test_from_toml_str_rejects_garbage() {
        let result = LockConfig::from_toml_str("max_stack_depth = \"deep\"");
        assert!(matches!(result, Err(ConfigError::ParseFailed { .. })));

        let result = LockConfig::from_toml_str("max_stack_depth = -1");
        assert!(matches!(result, Err(ConfigError::ParseFailed { .. })));
    }

    #[test]
    fn test_from_file_toml_and_json() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("lock.toml");
        let mut file = std::fs::File::create(&toml_path).unwrap();
        writeln!(file, "max_stack_depth = 5").unwrap();
        assert_eq!(LockConfig::from_file(&toml_path).unwrap().max_stack_depth, 5);

        let json_path = dir.path().join("lock.json");
        std::fs::write(&json_path, r#"{"max_stack_depth": 7}"#).unwrap();
        assert_eq!(LockConfig::from_file(&json_path).unwrap().max_stack_depth, 7);
    }

    #[test]
    fn test_from_file_missing() {
        let result = LockConfig::from_file(Path::new("/nonexistent/lock.toml"));
        assert!(matches!(result, Err(ConfigError::ReadFailed { .. })));
    }

    #[test]
    fn test_from_lookup() {
        let config = LockConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.max_stack_depth, DEFAULT_MAX_STACK_DEPTH);

        let config = LockConfig::from_lookup(|key| {
            (key == MAX_STACK_DEPTH_ENV).then(|| " 12 ".to_string())
        })
        .unwrap();
        assert_eq!(config.max_stack_depth, 12);

        let result = LockConfig::from_lookup(|_| Some("lots".to_string()));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));

        let result = LockConfig::from_lookup(|_| Some("0".to_string()));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }
}
