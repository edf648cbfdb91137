//! Top-level list2d configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{HistogramConfig, NormalizeConfig, ReplaceConfig};
use crate::constants::{MAX_ROW_LENGTH_BOUND, PROJECT_CONFIG_FILE};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`LIST2D_*`)
/// 3. Project config (`list2d.toml` in the given root)
/// 4. User config (`~/.list2d/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ManipulatorConfig {
    pub histogram: HistogramConfig,
    pub normalize: NormalizeConfig,
    pub replace: ReplaceConfig,
}

/// Override values that take precedence over every file and env layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub skip_label: Option<String>,
    pub max_length: Option<usize>,
    pub stripped_chars: Option<String>,
    pub expression_prefix: Option<String>,
    pub max_expression_len: Option<usize>,
}

impl ManipulatorConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(path = %user_config_path.display(), error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        tracing::debug!(root = %root.display(), "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ManipulatorConfig) -> Result<(), ConfigError> {
        if let Some(ref label) = config.histogram.skip_label {
            if label.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "histogram.skip_label".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref prefix) = config.replace.expression_prefix {
            if prefix.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "replace.expression_prefix".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(bound) = config.histogram.max_length {
            if bound > MAX_ROW_LENGTH_BOUND {
                return Err(ConfigError::ValidationFailed {
                    field: "histogram.max_length".to_string(),
                    message: format!("must not exceed {MAX_ROW_LENGTH_BOUND}"),
                });
            }
        }
        if config.replace.max_expression_len == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "replace.max_expression_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.list2d/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut ManipulatorConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ManipulatorConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut ManipulatorConfig, other: &ManipulatorConfig) {
        // Histogram
        if other.histogram.skip_label.is_some() {
            base.histogram.skip_label = other.histogram.skip_label.clone();
        }
        if other.histogram.max_length.is_some() {
            base.histogram.max_length = other.histogram.max_length;
        }

        // Normalize
        if other.normalize.stripped_chars.is_some() {
            base.normalize.stripped_chars = other.normalize.stripped_chars.clone();
        }

        // Replace
        if other.replace.expression_prefix.is_some() {
            base.replace.expression_prefix = other.replace.expression_prefix.clone();
        }
        if other.replace.max_expression_len.is_some() {
            base.replace.max_expression_len = other.replace.max_expression_len;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `LIST2D_HISTOGRAM_SKIP_LABEL`, `LIST2D_REPLACE_MAX_EXPRESSION_LEN`, etc.
    fn apply_env_overrides(config: &mut ManipulatorConfig) {
        if let Ok(val) = std::env::var("LIST2D_HISTOGRAM_SKIP_LABEL") {
            config.histogram.skip_label = Some(val);
        }
        if let Ok(val) = std::env::var("LIST2D_HISTOGRAM_MAX_LENGTH") {
            if let Ok(v) = val.parse::<usize>() {
                config.histogram.max_length = Some(v);
            }
        }
        if let Ok(val) = std::env::var("LIST2D_NORMALIZE_STRIPPED_CHARS") {
            config.normalize.stripped_chars = Some(val);
        }
        if let Ok(val) = std::env::var("LIST2D_REPLACE_EXPRESSION_PREFIX") {
            config.replace.expression_prefix = Some(val);
        }
        if let Ok(val) = std::env::var("LIST2D_REPLACE_MAX_EXPRESSION_LEN") {
            if let Ok(v) = val.parse::<usize>() {
                config.replace.max_expression_len = Some(v);
            }
        }
    }

    /// Apply programmatic overrides (highest priority).
    pub fn apply_overrides(config: &mut ManipulatorConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.skip_label {
            config.histogram.skip_label = Some(v.clone());
        }
        if let Some(v) = overrides.max_length {
            config.histogram.max_length = Some(v);
        }
        if let Some(ref v) = overrides.stripped_chars {
            config.normalize.stripped_chars = Some(v.clone());
        }
        if let Some(ref v) = overrides.expression_prefix {
            config.replace.expression_prefix = Some(v.clone());
        }
        if let Some(v) = overrides.max_expression_len {
            config.replace.max_expression_len = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level list2d config directory: `~/.list2d/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".list2d"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
