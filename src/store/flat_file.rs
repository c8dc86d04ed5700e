//! Flat-file storage for booking records

use crate::models::{Booking, LineError, parse_booking, serialize_booking};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Conventional name of the booking file when no path is given.
pub const DEFAULT_BOOKING_FILE: &str = "booking.txt";

/// Errors related to flat-file storage operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Booking file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Malformed record on line {line}: {source}")]
    Malformed { line: usize, source: LineError },
    #[error("Wrong write mode")]
    InvalidMode,
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// How `save` treats existing file contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Add records after the existing contents.
    Append,
    /// Discard existing contents and replace them.
    Overwrite,
}

impl FromStr for WriteMode {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "append" | "a" => Ok(WriteMode::Append),
            "overwrite" | "w" => Ok(WriteMode::Overwrite),
            _ => Err(StoreError::InvalidMode),
        }
    }
}

/// Load all booking records from a file, in file order.
///
/// Empty lines are skipped. Any other line must hold exactly ten
/// semicolon-delimited fields; a line that does not fails the whole load
/// (there is no partial result).
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Booking>, StoreError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            StoreError::FileNotFound(path.to_path_buf())
        } else {
            StoreError::Io(e)
        }
    })?;

    let reader = BufReader::new(file);
    let mut bookings = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let booking = parse_booking(line).map_err(|source| StoreError::Malformed {
            line: index + 1,
            source,
        })?;
        bookings.push(booking);
    }

    Ok(bookings)
}

/// Save booking records to a file, one line per record, in input order.
///
/// `Overwrite` replaces the file's contents; `Append` adds after them.
/// Saving what `load` returned to a fresh path reproduces the records
/// field-for-field.
pub fn save(
    bookings: &[Booking],
    path: impl AsRef<Path>,
    mode: WriteMode,
) -> Result<(), StoreError> {
    let file = match mode {
        WriteMode::Overwrite => File::create(path.as_ref())?,
        WriteMode::Append => OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?,
    };

    let mut writer = BufWriter::new(file);
    for booking in bookings {
        writer.write_all(serialize_booking(booking).as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    Ok(())
}
