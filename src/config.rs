use std::path::PathBuf;

use config::{Config, Environment};
use serde::Deserialize;

use crate::errors::AppError;

pub const DEFAULT_BOOKINGS_FILE: &str = "bookings.txt";
pub const DEFAULT_FEEDBACK_FILE: &str = "feedback.txt";

/// Where the two stores live. Read from `NEUROSTAY_*` environment variables;
/// with none set the defaults are `bookings.txt` and `feedback.txt` in the
/// working directory, the fixed layout of the plain console program.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub bookings_file: String,
    pub feedback_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            bookings_file: DEFAULT_BOOKINGS_FILE.to_string(),
            feedback_file: DEFAULT_FEEDBACK_FILE.to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the process environment (`NEUROSTAY_DATA_DIR`,
    /// `NEUROSTAY_BOOKINGS_FILE`, `NEUROSTAY_FEEDBACK_FILE`).
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_source(Environment::with_prefix("NEUROSTAY"))
    }

    fn from_source(env: Environment) -> Result<Self, AppError> {
        let settings = Config::builder()
            .set_default("data_dir", ".")?
            .set_default("bookings_file", DEFAULT_BOOKINGS_FILE)?
            .set_default("feedback_file", DEFAULT_FEEDBACK_FILE)?
            .add_source(env)
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Configuration rooted at `dir` with the default file names.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: dir.into(),
            ..Self::default()
        }
    }

    pub fn bookings_path(&self) -> PathBuf {
        self.data_dir.join(&self.bookings_file)
    }

    pub fn feedback_path(&self) -> PathBuf {
        self.data_dir.join(&self.feedback_file)
    }
}
