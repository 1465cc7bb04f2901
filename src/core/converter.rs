//! Conversion pipeline
//!
//! Orchestrates the read-map-write flow:
//! - CSV parsing is delegated to `PhraseReader`
//! - Record mapping to `core::mapper`
//! - TMX output to `TmxWriter`
//!
//! The input file is fully drained and closed before the output file is
//! opened, so a failing read never creates the output file.

use crate::core::mapper::add_record;
use crate::io::{PhraseReader, SegmentEscaping, TmxWriter};
use crate::types::{ColumnNames, ConversionError, LanguagePair};
use std::path::PathBuf;

/// Everything a single conversion needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub columns: ColumnNames,
    pub languages: LanguagePair,
    pub escaping: SegmentEscaping,
}

impl ConversionOptions {
    /// Options with the default Danish/English columns and `da`/`en` codes
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            columns: ColumnNames::default(),
            languages: LanguagePair::default(),
            escaping: SegmentEscaping::default(),
        }
    }
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub rows: usize,
    pub units: usize,
}

/// Convert the CSV at `options.input` into a TMX file at `options.output`
///
/// # Errors
///
/// - `NotFound` / `MissingColumn` / `Unclassified` from the reader; the
///   output file is not touched in that case
/// - `IoWrite` if the TMX file cannot be written
///
/// # Examples
///
/// ```no_run
/// use csv2tmx::{convert_csv_to_tmx, ConversionOptions};
///
/// let summary = convert_csv_to_tmx(&ConversionOptions::new("phrases.csv", "phrases.tmx"))
///     .expect("Conversion failed");
/// println!("{} rows converted", summary.rows);
/// ```
pub fn convert_csv_to_tmx(
    options: &ConversionOptions,
) -> Result<ConversionSummary, ConversionError> {
    let mut tmx = TmxWriter::with_escaping(options.escaping);
    let mut rows = 0;

    {
        let reader = PhraseReader::open(&options.input, &options.columns)?;
        for result in reader {
            let record = result?;
            add_record(&mut tmx, &record, &options.languages);
            rows += 1;
        }
    }

    tmx.write_to_file(&options.output)?;

    let summary = ConversionSummary {
        rows,
        units: tmx.len(),
    };
    tracing::info!(
        input = %options.input.display(),
        output = %options.output.display(),
        rows = summary.rows,
        units = summary.units,
        "converted CSV to TMX"
    );

    Ok(summary)
}
