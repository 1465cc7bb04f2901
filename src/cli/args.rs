use crate::core::ConversionOptions;
use crate::io::SegmentEscaping;
use crate::types::record::{DEFAULT_SOURCE_COLUMN, DEFAULT_TARGET_COLUMN};
use crate::types::translation_unit::{DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG};
use crate::types::{ColumnNames, ConversionError, LanguagePair};
use clap::Parser;
use std::path::PathBuf;

/// Convert CSV file to TMX file
#[derive(Parser, Debug)]
#[command(name = "csv2tmx")]
#[command(about = "Convert CSV file to TMX file.", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: PathBuf,

    /// Output TMX file path
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// Header of the source-language column
    #[arg(long = "source-column", value_name = "NAME", default_value = DEFAULT_SOURCE_COLUMN)]
    pub source_column: String,

    /// Header of the target-language column
    #[arg(long = "target-column", value_name = "NAME", default_value = DEFAULT_TARGET_COLUMN)]
    pub target_column: String,

    /// Language code written for the source column
    #[arg(long = "source-lang", value_name = "CODE", default_value = DEFAULT_SOURCE_LANG)]
    pub source_lang: String,

    /// Language code written for the target column
    #[arg(long = "target-lang", value_name = "CODE", default_value = DEFAULT_TARGET_LANG)]
    pub target_lang: String,

    /// Escape XML special characters in segment text
    #[arg(long = "escape-xml")]
    pub escape_xml: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl CliArgs {
    /// Build the conversion options described by these arguments
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::SameLanguage` when `--source-lang` and
    /// `--target-lang` are equal.
    pub fn to_conversion_options(&self) -> Result<ConversionOptions, ConversionError> {
        let escaping = if self.escape_xml {
            SegmentEscaping::Xml
        } else {
            SegmentEscaping::Verbatim
        };

        Ok(ConversionOptions {
            input: self.input.clone(),
            output: self.output.clone(),
            columns: ColumnNames::new(&self.source_column, &self.target_column),
            languages: LanguagePair::new(&self.source_lang, &self.target_lang)?,
            escaping,
        })
    }
}
