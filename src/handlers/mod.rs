use std::io::{BufRead, Write};

use crate::console::Console;
use crate::db::{Record, Store};
use crate::errors::AppError;

pub mod bookings;
pub mod feedback;
pub mod recommendation;
pub mod report;

/// Appends `record`, turning store and validation failures into an operator
/// message. Returns whether the record was written.
fn append_or_report<R, W, T>(
    console: &mut Console<R, W>,
    store: &Store,
    record: &T,
) -> Result<bool, AppError>
where
    R: BufRead,
    W: Write,
    T: Record,
{
    match store.append(record) {
        Ok(()) => Ok(true),
        Err(AppError::StoreWrite { path, source }) => {
            log::warn!("cannot append to {}: {}", path.display(), source);
            console.println(&format!(
                "Error: cannot open {} for writing.",
                store.display_name()
            ))?;
            Ok(false)
        }
        Err(AppError::Validation(errors)) => {
            log::warn!("{} record failed validation: {}", T::KIND, errors);
            console.println(&format!("Error: {} rejected: {}", T::KIND, errors))?;
            Ok(false)
        }
        Err(other) => Err(other),
    }
}

/// Reads every line of `store`, or prints `missing` and yields `None` when
/// the store cannot be opened.
fn scan_or_report<R, W>(
    console: &mut Console<R, W>,
    store: &Store,
    missing: &str,
) -> Result<Option<Vec<String>>, AppError>
where
    R: BufRead,
    W: Write,
{
    match store.scan_all() {
        Ok(lines) => Ok(Some(lines)),
        Err(AppError::StoreRead { path, source }) => {
            log::debug!("{} unavailable: {}", path.display(), source);
            console.println(&format!("\n{missing}"))?;
            Ok(None)
        }
        Err(other) => Err(other),
    }
}
