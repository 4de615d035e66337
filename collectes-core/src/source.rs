//! Trait describing record sources and the errors the pipeline can raise.

use std::{io::Error as IoError, path::PathBuf};

use chrono::ParseError as ChronoParseError;
use serde_json::Error as JsonError;

use crate::model::CollectionRecord;

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while loading or aggregating a schedule.
pub enum SourceError {
    /// The schedule file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: IoError,
    },
    /// The schedule document is not in the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] JsonError),
    /// A record date does not match the configured date format.
    #[error("invalid date {value:?}: {source}")]
    Date {
        /// Raw date string of the record.
        value: String,
        /// Parser failure.
        source: ChronoParseError,
    },
}

/// Anything able to hand over the complete, ordered list of collection records.
pub trait ScheduleSource {
    /// Human-friendly name of the source, used in diagnostics.
    fn name(&self) -> &str;

    /// Load every record, in document order.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the records cannot be read or decoded.
    fn records(&self) -> Result<Vec<CollectionRecord>, SourceError>;
}
