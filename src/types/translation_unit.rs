//! Output-side types: translation units and the language pair they use

use crate::types::ConversionError;

/// Language code as written to `xml:lang` (e.g. `da`, `en`)
pub type LanguageCode = String;

/// Datatype carried by every translation unit
pub const TEXT_DATATYPE: &str = "text";

/// Default source language code
pub const DEFAULT_SOURCE_LANG: &str = "da";

/// Default target language code
pub const DEFAULT_TARGET_LANG: &str = "en";

/// A TMX translation unit with two language-tagged segments
///
/// Invariant: `lang_a != lang_b`. Units built by the mapper take their codes
/// from a [`LanguagePair`], which cannot hold two equal codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationUnit {
    pub lang_a: LanguageCode,
    pub text_a: String,
    pub lang_b: LanguageCode,
    pub text_b: String,
    pub datatype: String,
}

/// Source and target language codes of a conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    source: LanguageCode,
    target: LanguageCode,
}

impl LanguagePair {
    /// Create a language pair
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::SameLanguage` if both codes are equal.
    pub fn new(
        source: impl Into<LanguageCode>,
        target: impl Into<LanguageCode>,
    ) -> Result<Self, ConversionError> {
        let source = source.into();
        let target = target.into();

        if source == target {
            return Err(ConversionError::SameLanguage { lang: source });
        }

        Ok(Self { source, target })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE_LANG.to_string(),
            target: DEFAULT_TARGET_LANG.to_string(),
        }
    }
}
