//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: Input rows and the column names they are read from
//! - `translation_unit`: Translation units and language codes
//! - `error`: Error types for the converter

pub mod error;
pub mod record;
pub mod translation_unit;

pub use error::ConversionError;
pub use record::{ColumnNames, Record};
pub use translation_unit::{LanguageCode, LanguagePair, TranslationUnit, TEXT_DATATYPE};
