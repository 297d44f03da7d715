use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use validator::Validate;

use crate::errors::AppError;

/// One line of a store. `encode` never emits a trailing newline and `decode`
/// returns `None` for lines that do not have the record's shape.
pub trait Record: Sized + Validate {
    const KIND: &'static str;

    fn encode(&self) -> String;
    fn decode(line: &str) -> Option<Self>;
}

/// Append-only, line-oriented text file. Every call opens and closes the
/// file; no handle outlives an operation.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name as shown to the operator.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Validates `record` and appends it as one line, creating the file if needed.
    pub fn append<R: Record>(&self, record: &R) -> Result<(), AppError> {
        record.validate()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| AppError::StoreWrite {
                path: self.path.clone(),
                source,
            })?;
        writeln!(file, "{}", record.encode()).map_err(|source| AppError::StoreWrite {
            path: self.path.clone(),
            source,
        })?;
        log::info!("appended {} record to {}", R::KIND, self.path.display());
        Ok(())
    }

    /// Every line in insertion order, without line terminators. Invalid UTF-8
    /// is replaced rather than aborting the scan; any I/O failure is a
    /// `StoreRead` error.
    pub fn scan_all(&self) -> Result<Vec<String>, AppError> {
        let file = File::open(&self.path).map_err(|source| AppError::StoreRead {
            path: self.path.clone(),
            source,
        })?;
        let mut lines = Vec::new();
        for chunk in BufReader::new(file).split(b'\n') {
            let chunk = chunk.map_err(|source| AppError::StoreRead {
                path: self.path.clone(),
                source,
            })?;
            let line = String::from_utf8_lossy(&chunk);
            lines.push(line.trim_end_matches('\r').to_string());
        }
        log::debug!("read {} lines from {}", lines.len(), self.path.display());
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::Booking;
    use crate::models::feedback::Feedback;

    #[test]
    fn append_creates_file_and_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("bookings.txt"));
        store.append(&Booking::new("Alice", "Deluxe", 3)).unwrap();
        store.append(&Booking::new("Bob", "Budget", 1)).unwrap();

        let lines = store.scan_all().unwrap();
        assert_eq!(lines, vec!["Alice|Deluxe|3|6000.00", "Bob|Budget|1|1000.00"]);
        assert_eq!(store.display_name(), "bookings.txt");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("feedback.txt"));
        assert!(matches!(store.scan_all(), Err(AppError::StoreRead { .. })));
    }

    #[test]
    fn unopenable_file_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("missing-dir").join("feedback.txt"));
        let result = store.append(&Feedback::new("Bob", "good"));
        assert!(matches!(result, Err(AppError::StoreWrite { .. })));
    }

    #[test]
    fn directory_in_place_of_store_is_a_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.txt");
        std::fs::create_dir(&path).unwrap();
        let store = Store::new(path);

        assert!(matches!(store.scan_all(), Err(AppError::StoreRead { .. })));
        let result = store.append(&Booking::new("Alice", "Deluxe", 1));
        assert!(matches!(result, Err(AppError::StoreWrite { .. })));
    }

    #[test]
    fn invalid_record_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("bookings.txt"));
        let result = store.append(&Booking::new("Alice", "Deluxe", 0));
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(!store.path().exists());
    }

    #[test]
    fn scan_replaces_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.txt");
        std::fs::write(&path, b"A|Deluxe|1|2000.00\r\n\xff|Budget|2|2000.00\n").unwrap();
        let lines = Store::new(path).scan_all().unwrap();
        assert_eq!(lines, vec!["A|Deluxe|1|2000.00", "\u{fffd}|Budget|2|2000.00"]);
    }
}
