//! TMX serialization for translation units
//!
//! `TmxWriter` collects translation units in insertion order and renders
//! them inside a fixed TMX 1.4 envelope. Rendering to an arbitrary
//! `std::io::Write` is kept separate from file handling so the format can be
//! tested without touching the filesystem.

use crate::types::{ConversionError, TranslationUnit};
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// How segment text and language codes are written into the XML
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SegmentEscaping {
    /// Text is written exactly as read; `<` or `&` in the input produce
    /// malformed XML
    #[default]
    Verbatim,
    /// XML special characters are replaced by entity references
    Xml,
}

impl SegmentEscaping {
    fn apply<'a>(self, text: &'a str) -> Cow<'a, str> {
        match self {
            SegmentEscaping::Verbatim => Cow::Borrowed(text),
            SegmentEscaping::Xml => escape_xml(text),
        }
    }
}

/// Replace the five XML special characters with entity references
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// In-memory TMX document
///
/// # Examples
///
/// ```
/// use csv2tmx::io::TmxWriter;
/// use csv2tmx::types::TranslationUnit;
///
/// let mut tmx = TmxWriter::new();
/// tmx.add_translation(TranslationUnit {
///     lang_a: "da".to_string(),
///     text_a: "hej".to_string(),
///     lang_b: "en".to_string(),
///     text_b: "hej".to_string(),
///     datatype: "text".to_string(),
/// });
///
/// let mut output = Vec::new();
/// tmx.write_tmx(&mut output).unwrap();
/// assert!(String::from_utf8(output).unwrap().contains("<seg>hej</seg>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TmxWriter {
    units: Vec<TranslationUnit>,
    escaping: SegmentEscaping,
}

impl TmxWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_escaping(escaping: SegmentEscaping) -> Self {
        Self {
            units: Vec::new(),
            escaping,
        }
    }

    /// Append one translation unit; no validation is performed
    pub fn add_translation(&mut self, unit: TranslationUnit) {
        self.units.push(unit);
    }

    pub fn units(&self) -> &[TranslationUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Render the whole document to `output`
    ///
    /// Lines are terminated by `\n` on every platform.
    pub fn write_tmx(&self, output: &mut dyn Write) -> io::Result<()> {
        output.write_all(b"<?xml version=\"1.0\" encoding=\"utf-8\"?>\n")?;
        output.write_all(b"<tmx version=\"1.4\">\n")?;
        output.write_all(b"  <header/>\n")?;
        output.write_all(b"  <body>\n")?;

        for unit in &self.units {
            self.write_unit(unit, output)?;
        }

        output.write_all(b"  </body>\n")?;
        output.write_all(b"</tmx>\n")?;
        Ok(())
    }

    fn write_unit(&self, unit: &TranslationUnit, output: &mut dyn Write) -> io::Result<()> {
        writeln!(output, "    <tu>")?;
        self.write_variant(&unit.lang_a, &unit.text_a, output)?;
        self.write_variant(&unit.lang_b, &unit.text_b, output)?;
        writeln!(output, "    </tu>")
    }

    fn write_variant(&self, lang: &str, text: &str, output: &mut dyn Write) -> io::Result<()> {
        writeln!(
            output,
            "      <tuv xml:lang=\"{}\"><seg>{}</seg></tuv>",
            self.escaping.apply(lang),
            self.escaping.apply(text)
        )
    }

    /// Write the document to `path`, truncating any existing file
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::IoWrite` if the file cannot be created,
    /// written or flushed. Bytes already flushed stay on disk.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ConversionError> {
        let file = File::create(path).map_err(|e| ConversionError::io_write(path, e))?;
        let mut output = BufWriter::new(file);

        self.write_tmx(&mut output)
            .map_err(|e| ConversionError::io_write(path, e))?;
        output
            .flush()
            .map_err(|e| ConversionError::io_write(path, e))?;

        tracing::debug!(path = %path.display(), units = self.units.len(), "wrote TMX file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn unit(lang_a: &str, text_a: &str, lang_b: &str, text_b: &str) -> TranslationUnit {
        TranslationUnit {
            lang_a: lang_a.to_string(),
            text_a: text_a.to_string(),
            lang_b: lang_b.to_string(),
            text_b: text_b.to_string(),
            datatype: "text".to_string(),
        }
    }

    fn render(writer: &TmxWriter) -> String {
        let mut output = Vec::new();
        writer.write_tmx(&mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_empty_document() {
        let writer = TmxWriter::new();

        assert_eq!(
            render(&writer),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <tmx version=\"1.4\">\n  \
               <header/>\n  \
               <body>\n  \
               </body>\n\
             </tmx>\n"
        );
    }

    #[test]
    fn test_units_are_written_in_insertion_order() {
        let mut writer = TmxWriter::new();
        writer.add_translation(unit("da", "hej", "en", "hej"));
        writer.add_translation(unit("en", "hello", "da", "hello"));

        let expected = "<?xml version=\"1.0\" encoding=\"utf-8\"?>
<tmx version=\"1.4\">
  <header/>
  <body>
    <tu>
      <tuv xml:lang=\"da\"><seg>hej</seg></tuv>
      <tuv xml:lang=\"en\"><seg>hej</seg></tuv>
    </tu>
    <tu>
      <tuv xml:lang=\"en\"><seg>hello</seg></tuv>
      <tuv xml:lang=\"da\"><seg>hello</seg></tuv>
    </tu>
  </body>
</tmx>
";
        assert_eq!(render(&writer), expected);
        assert_eq!(writer.len(), 2);
    }

    #[rstest]
    #[case::verbatim(SegmentEscaping::Verbatim, "<seg>Tom & Jerry <3</seg>")]
    #[case::xml(SegmentEscaping::Xml, "<seg>Tom &amp; Jerry &lt;3</seg>")]
    fn test_segment_escaping(#[case] escaping: SegmentEscaping, #[case] expected: &str) {
        let mut writer = TmxWriter::with_escaping(escaping);
        writer.add_translation(unit("da", "Tom & Jerry <3", "en", "Tom & Jerry <3"));

        assert_eq!(render(&writer).matches(expected).count(), 2);
    }

    #[rstest]
    #[case::plain("hej", "hej")]
    #[case::all_specials("<a href=\"x\">'&'</a>", "&lt;a href=&quot;x&quot;&gt;&apos;&amp;&apos;&lt;/a&gt;")]
    #[case::unicode("blåbær & æbler", "blåbær &amp; æbler")]
    fn test_escape_xml(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_xml(input), expected);
    }

    #[test]
    fn test_escape_xml_borrows_clean_text() {
        assert!(matches!(escape_xml("hello"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_write_to_file_truncates_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.tmx");
        fs::write(&path, "x".repeat(4096)).unwrap();

        let writer = TmxWriter::new();
        writer.write_to_file(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), render(&writer));
    }

    #[test]
    fn test_write_to_file_missing_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.tmx");

        let result = TmxWriter::new().write_to_file(&path);

        assert!(matches!(result, Err(ConversionError::IoWrite { .. })));
        assert!(!path.exists());
    }
}
