use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Extraction failures
// ---------------------------------------------------------------------------

/// Why a single record could not supply a needed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFault {
    /// The record ends before the requested field.
    MissingField { found: usize },
    /// The field is present but is not a decimal integer.
    NotAnInteger(String),
    /// The physical line holds no record at all.
    BlankLine,
}

impl fmt::Display for RecordFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordFault::MissingField { found } => write!(f, "record has only {found} fields"),
            RecordFault::NotAnInteger(text) => write!(f, "'{text}' is not an integer"),
            RecordFault::BlankLine => write!(f, "line is blank"),
        }
    }
}

/// Everything that can stop a raw log from yielding a window.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no input file given (use --fin)")]
    MissingInputPath,

    #[error("cannot open {}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}, field {field}: {fault}")]
    MalformedRecord {
        line: u64,
        field: usize,
        fault: RecordFault,
    },

    #[error("state column never reached the start code; no window found")]
    BoundaryNotFound,

    #[error("window opened at line {start} but the stop code never appeared")]
    WindowNotClosed { start: u64 },

    #[error("window is empty (start {start}, stop {stop})")]
    EmptyWindow { start: u64, stop: u64 },

    #[error("reading line {line}")]
    Read {
        line: u64,
        #[source]
        source: std::io::Error,
    },
}
