//! Error types for the regmem-core library.

use thiserror::Error;

/// Main error type for the regmem library.
#[derive(Error, Debug)]
pub enum RegmemError {
    /// Corpus structure error.
    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),

    /// Field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Resource loading error.
    #[error("resource error: {0}")]
    Resource(#[from] ResourceError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to the disclosed-interests corpus.
///
/// These are fatal: they mean the crawler output violates its own shape
/// contract, so the extraction rules cannot be trusted for the run.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Failed to deserialize the corpus document.
    #[error("failed to parse corpus: {0}")]
    Parse(#[from] serde_json::Error),

    /// An entry is neither a plain text block nor a heading with sub-blocks.
    #[error("invalid entry shape in section {section:?}: {detail}")]
    InvalidEntryShape { section: String, detail: String },
}

/// Errors related to heuristic field extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A date fragment contained no recognizable date.
    #[error("unrecognized date fragment {0:?}")]
    Date(String),

    /// A date range had endpoints out of order.
    #[error("date range ends before it starts: {start} > {end}")]
    InvertedRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
}

/// Errors related to loading external resources (override table).
///
/// Fatal at startup: a missing or corrupt resource means the whole run
/// would silently misclassify entries.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The resource file could not be read.
    #[error("failed to read resource {path:?}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// The resource content is not valid.
    #[error("corrupt resource {path:?}: {source}")]
    Corrupt {
        path: String,
        source: serde_json::Error,
    },
}

/// Result type for the regmem library.
pub type Result<T> = std::result::Result<T, RegmemError>;
