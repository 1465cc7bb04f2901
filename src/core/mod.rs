//! Core conversion logic module
//!
//! - `mapper` - Turns each record into a forward and a reverse translation unit
//! - `converter` - Read-map-write orchestration over files

pub mod converter;
pub mod mapper;

pub use converter::{convert_csv_to_tmx, ConversionOptions, ConversionSummary};
pub use mapper::{add_record, map_record};
