//! csv2tmx Library
//! # Overview
//!
//! Converts a CSV file of paired bilingual phrases into a TMX (Translation
//! Memory eXchange) document, one bidirectional pair of translation units
//! per row.
//!
//! # Architecture
//!
//! - [`types`] - Records, translation units, language codes and errors
//! - [`cli`] - CLI arguments parsing and logging setup
//! - [`core`] - Conversion logic:
//!   - [`core::mapper`] - Record to translation-unit mapping
//!   - [`core::converter`] - Read-map-write orchestration
//! - [`io`] - CSV reading and TMX serialization
//!
//! # Output Layout
//!
//! For a row `hej,hello` under the default `Danish`/`English` columns the
//! document receives two units:
//!
//! - `da: hej` / `en: hej`
//! - `en: hello` / `da: hello`

pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{convert_csv_to_tmx, ConversionOptions, ConversionSummary};
pub use io::{PhraseReader, SegmentEscaping, TmxWriter};
pub use types::{ColumnNames, ConversionError, LanguagePair, Record, TranslationUnit};
