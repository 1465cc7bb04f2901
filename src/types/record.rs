//! Input-side types: one CSV row and the columns it is read from

/// Default header of the source-language column
pub const DEFAULT_SOURCE_COLUMN: &str = "Danish";

/// Default header of the target-language column
pub const DEFAULT_TARGET_COLUMN: &str = "English";

/// One input row
///
/// Created by the reader for every data line, consumed by the mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub source_text: String,
    pub target_text: String,
}

impl Record {
    pub fn new(source_text: impl Into<String>, target_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            target_text: target_text.into(),
        }
    }
}

/// Header names of the two required columns (exact, case-sensitive)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub source: String,
    pub target: String,
}

impl ColumnNames {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_COLUMN, DEFAULT_TARGET_COLUMN)
    }
}
