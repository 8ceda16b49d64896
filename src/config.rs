//! Configuration model for seam.
//!
//! This module defines the Config struct that represents an optional
//! `seam.yaml` at the project root. It supports forward-compatible YAML
//! parsing (unknown fields are ignored), sensible defaults for every
//! field, and validation of config values. When no config file exists,
//! the defaults reproduce the original skill-document layout:
//! `src/skills/<unit>/SKILL.template.md` → `skills/<unit>/SKILL.md`.

use crate::error::{Result, SeamError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default templates root, relative to the project root.
pub fn default_templates_dir() -> String {
    "src/skills".to_string()
}

/// Default entry file name expected inside each unit directory.
pub fn default_entry_file() -> String {
    "SKILL.template.md".to_string()
}

/// Default output root, relative to the project root.
pub fn default_output_dir() -> String {
    "skills".to_string()
}

/// Default output file name written per unit.
pub fn default_output_file() -> String {
    "SKILL.md".to_string()
}

/// Configuration for a seam project.
///
/// This struct represents the contents of `seam.yaml`. Unknown fields in
/// the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory containing one subdirectory per template unit,
    /// relative to the project root.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,

    /// Entry file name expected inside each unit directory. A directory
    /// without this file is not a template unit.
    #[serde(default = "default_entry_file")]
    pub entry_file: String,

    /// Directory that receives one subdirectory per built unit,
    /// relative to the project root.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Output file name written inside each unit's output directory.
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            entry_file: default_entry_file(),
            output_dir: default_output_dir(),
            output_file: default_output_file(),
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SeamError::UserError)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SeamError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| SeamError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| SeamError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return an error on invalid values.
    ///
    /// Validation rules:
    /// - all four fields must be non-empty
    /// - `entry_file` and `output_file` must be bare file names
    /// - `templates_dir` and `output_dir` must be relative paths
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("templates_dir", &self.templates_dir),
            ("entry_file", &self.entry_file),
            ("output_dir", &self.output_dir),
            ("output_file", &self.output_file),
        ] {
            if value.is_empty() {
                return Err(SeamError::UserError(format!(
                    "config validation failed: {} must be non-empty",
                    field
                )));
            }
        }

        for (field, value) in [
            ("entry_file", &self.entry_file),
            ("output_file", &self.output_file),
        ] {
            if value.contains('/') || value.contains('\\') {
                return Err(SeamError::UserError(format!(
                    "config validation failed: {} must be a bare file name (found '{}')",
                    field, value
                )));
            }
        }

        for (field, value) in [
            ("templates_dir", &self.templates_dir),
            ("output_dir", &self.output_dir),
        ] {
            if Path::new(value).is_absolute() {
                return Err(SeamError::UserError(format!(
                    "config validation failed: {} must be relative to the project root (found '{}')",
                    field, value
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_original_layout() {
        let config = Config::default();
        assert_eq!(config.templates_dir, "src/skills");
        assert_eq!(config.entry_file, "SKILL.template.md");
        assert_eq!(config.output_dir, "skills");
        assert_eq!(config.output_file, "SKILL.md");
    }

    #[test]
    fn default_config_validates() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_yaml_fills_remaining_defaults() {
        let config = Config::from_yaml("templates_dir: docs/parts\n").unwrap();
        assert_eq!(config.templates_dir, "docs/parts");
        assert_eq!(config.entry_file, "SKILL.template.md");
        assert_eq!(config.output_dir, "skills");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config = Config::from_yaml("output_file: README.md\nfuture_option: true\n").unwrap();
        assert_eq!(config.output_file, "README.md");
    }

    #[test]
    fn empty_field_is_rejected() {
        let err = Config::from_yaml("entry_file: \"\"\n").unwrap_err();
        assert!(err.to_string().contains("entry_file"));
    }

    #[test]
    fn entry_file_with_path_separator_is_rejected() {
        let err = Config::from_yaml("entry_file: sub/entry.md\n").unwrap_err();
        assert!(err.to_string().contains("bare file name"));
    }

    #[test]
    fn absolute_templates_dir_is_rejected() {
        let err = Config::from_yaml("templates_dir: /etc/templates\n").unwrap_err();
        assert!(err.to_string().contains("relative"));
    }

    #[test]
    fn malformed_yaml_is_a_user_error() {
        let err = Config::from_yaml(": not yaml : [").unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
    }

    #[test]
    fn yaml_round_trip() {
        let config = Config {
            templates_dir: "parts".to_string(),
            entry_file: "index.template.md".to_string(),
            output_dir: "out".to_string(),
            output_file: "index.md".to_string(),
        };
        let yaml = config.to_yaml().unwrap();
        let parsed = Config::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
