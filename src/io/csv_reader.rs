//! CSV reader with iterator interface
//!
//! Provides a lazy iterator over phrase records read from a CSV file.
//!
//! # Design
//!
//! `PhraseReader` opens the file, reads the header row and resolves the two
//! required columns up front, so a missing column is reported before any
//! row is read. Rows are then read one at a time with a reused
//! `csv::StringRecord` and projected onto the two resolved columns. Any
//! additional column is ignored.
//!
//! ```no_run
//! use csv2tmx::io::PhraseReader;
//! use csv2tmx::types::ColumnNames;
//! use std::path::Path;
//!
//! let reader = PhraseReader::open(Path::new("phrases.csv"), &ColumnNames::default()).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("{} = {}", record.source_text, record.target_text),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - A missing file or a missing column is returned from `open()`
//! - Rows with a field count different from the header, and invalid UTF-8,
//!   are yielded as `Err` items carrying the csv crate's message

use crate::types::{ColumnNames, ConversionError, Record};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::Path;

/// CSV reader yielding one [`Record`] per data row
///
/// The underlying file is closed when the reader is dropped.
#[derive(Debug)]
pub struct PhraseReader {
    reader: csv::Reader<File>,
    row: StringRecord,
    source_index: usize,
    target_index: usize,
}

impl PhraseReader {
    /// Open a CSV file and resolve the required columns
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CSV file
    /// * `columns` - Header names of the source and target columns
    ///
    /// # Returns
    ///
    /// * `Ok(PhraseReader)` positioned on the first data row
    /// * `Err(ConversionError::NotFound)` if the file does not exist
    /// * `Err(ConversionError::MissingColumn)` naming the first absent column
    /// * `Err(ConversionError::Unclassified)` for any other open or header error
    pub fn open(path: &Path, columns: &ColumnNames) -> Result<Self, ConversionError> {
        let file = File::open(path).map_err(|e| ConversionError::input_open(path, e))?;

        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

        let headers = reader.headers()?;
        let source_index = find_column(headers, &columns.source)?;
        let target_index = find_column(headers, &columns.target)?;

        tracing::debug!(
            path = %path.display(),
            source_column = %columns.source,
            source_index,
            target_column = %columns.target,
            target_index,
            "resolved CSV columns"
        );

        Ok(Self {
            reader,
            row: StringRecord::new(),
            source_index,
            target_index,
        })
    }

    fn current_record(&self) -> Record {
        Record::new(
            self.row.get(self.source_index).unwrap_or_default(),
            self.row.get(self.target_index).unwrap_or_default(),
        )
    }
}

/// Locate a column by exact header name
///
/// When the header repeats a name, the last occurrence wins.
fn find_column(headers: &StringRecord, name: &str) -> Result<usize, ConversionError> {
    headers
        .as_byte_record()
        .iter()
        .rposition(|header| header == name.as_bytes())
        .ok_or_else(|| ConversionError::missing_column(name))
}

impl Iterator for PhraseReader {
    type Item = Result<Record, ConversionError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.row) {
            Ok(true) => Some(Ok(self.current_record())),
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}
