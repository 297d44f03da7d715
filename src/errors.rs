use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the stores, the console and start-up configuration.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot write {}: {source}", .path.display())]
    StoreWrite { path: PathBuf, source: io::Error },
    #[error("cannot read {}: {source}", .path.display())]
    StoreRead { path: PathBuf, source: io::Error },
    #[error("record rejected: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("console failure: {0}")]
    Console(#[from] io::Error),
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
