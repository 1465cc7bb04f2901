//! I/O module
//!
//! Handles CSV parsing and TMX output.
//!
//! # Components
//!
//! - `csv_reader` - CSV reader with iterator interface
//! - `tmx_writer` - In-memory TMX document and its serialization

pub mod csv_reader;
pub mod tmx_writer;

pub use csv_reader::PhraseReader;
pub use tmx_writer::{escape_xml, SegmentEscaping, TmxWriter};
