//! Record to translation-unit mapping
//!
//! Every record yields two units, one per direction. Both segments of a
//! unit carry the same text: unit 1 repeats the source text under both
//! language tags, unit 2 repeats the target text.

use crate::io::TmxWriter;
use crate::types::{LanguagePair, Record, TranslationUnit, TEXT_DATATYPE};

/// Build the forward and reverse units for one record
pub fn map_record(record: &Record, languages: &LanguagePair) -> [TranslationUnit; 2] {
    [
        TranslationUnit {
            lang_a: languages.source().to_string(),
            text_a: record.source_text.clone(),
            lang_b: languages.target().to_string(),
            text_b: record.source_text.clone(),
            datatype: TEXT_DATATYPE.to_string(),
        },
        TranslationUnit {
            lang_a: languages.target().to_string(),
            text_a: record.target_text.clone(),
            lang_b: languages.source().to_string(),
            text_b: record.target_text.clone(),
            datatype: TEXT_DATATYPE.to_string(),
        },
    ]
}

/// Map a record and append both units to `writer`
pub fn add_record(writer: &mut TmxWriter, record: &Record, languages: &LanguagePair) {
    for unit in map_record(record, languages) {
        writer.add_translation(unit);
    }
}
