//! Error types for the CSV to TMX converter
//!
//! This module defines all error types that can occur during a conversion.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Input Errors**: Input file not found, required column missing
//! - **Output Errors**: TMX file cannot be created, written or flushed
//! - **Configuration Errors**: Identical source and target language
//! - **Everything else**: Malformed CSV rows, invalid UTF-8, unreadable input

use thiserror::Error;

/// Main error type for the converter
///
/// Every failure of a conversion is reported through one of these variants.
/// None of them are recoverable: the conversion stops at the first error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Input CSV file does not exist
    #[error("CSV file not found: {path}")]
    NotFound {
        /// The path that was not found
        path: String,
    },

    /// A required column header is absent from the input
    #[error("Column header not found: '{column}'")]
    MissingColumn {
        /// Name of the missing column
        column: String,
    },

    /// The TMX output could not be opened, written or flushed
    ///
    /// Content written before the failure may remain on disk.
    #[error("Failed to write TMX file '{path}': {message}")]
    IoWrite {
        /// Destination path
        path: String,
        /// Description of the I/O error
        message: String,
    },

    /// Source and target language codes are identical
    #[error("Source and target language must differ (both are '{lang}')")]
    SameLanguage {
        /// The language code given for both sides
        lang: String,
    },

    /// Catch-all for anything else (malformed rows, encoding errors, ...)
    #[error("An error occurred: {message}")]
    Unclassified {
        /// Description of the error
        message: String,
    },
}

// Conversion from csv::Error to ConversionError
impl From<csv::Error> for ConversionError {
    fn from(error: csv::Error) -> Self {
        let message = match error.position() {
            Some(pos) => format!("line {}: {}", pos.line(), error),
            None => error.to_string(),
        };

        ConversionError::Unclassified { message }
    }
}

impl ConversionError {
    /// Classify an error raised while opening the input file
    ///
    /// Only a missing file is reported as `NotFound`; permission problems
    /// and the like fall into `Unclassified`.
    pub fn input_open(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            ConversionError::NotFound {
                path: path.display().to_string(),
            }
        } else {
            ConversionError::Unclassified {
                message: format!("Failed to open '{}': {}", path.display(), error),
            }
        }
    }

    /// Create a MissingColumn error
    pub fn missing_column(column: &str) -> Self {
        ConversionError::MissingColumn {
            column: column.to_string(),
        }
    }

    /// Create an IoWrite error
    pub fn io_write(path: &std::path::Path, error: std::io::Error) -> Self {
        ConversionError::IoWrite {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }
}
