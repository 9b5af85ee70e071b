use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::ConfigError;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub input: InputConfig,
}

/// How a parsed document is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Tree,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Print the number of raw sections before the tree outline.
    pub show_section_count: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Tree,
            pretty: true,
            show_section_count: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct InputConfig {
    /// Fall back to the built-in sample when the input is empty.
    pub use_sample_when_empty: bool,
}

impl Config {
    /// The defaults compiled into the binary.
    pub fn compiled_default() -> Self {
        // Validated by build.rs, so this only falls back if the embedded
        // file and the structs drift apart.
        toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|e| {
            log::warn!("embedded default config is invalid: {e}");
            Self::default()
        })
    }

    /// Load config from a TOML file. A missing file yields the compiled
    /// defaults; keys absent from the file keep their default values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::compiled_default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_default_matches_struct_defaults() {
        assert_eq!(Config::compiled_default(), Config::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::from_toml("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty);
        assert!(!config.input.use_sample_when_empty);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Config::from_toml("[output]\nformat = \"html\"\n").is_err());
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = Config::load(Path::new("definitely/not/here/mdsections.toml")).unwrap();
        assert_eq!(config, Config::compiled_default());
    }
}
