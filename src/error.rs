use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors surfaced by the command-line inspector.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("error reading {input}: {source}")]
    Input {
        input: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to serialize document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("error writing {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
