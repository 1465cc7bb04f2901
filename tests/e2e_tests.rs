//! End-to-end integration tests
//!
//! These tests validate the complete conversion pipeline using predefined
//! fixtures. Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Converts it with the default Danish/English settings
//! 3. Compares the produced TMX byte-for-byte with expected.tmx
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path and header-only inputs
//! - Extra columns and quoted fields
//! - Unicode text
//! - XML special characters, which are written verbatim

#[cfg(test)]
mod tests {
    use csv2tmx::{convert_csv_to_tmx, ConversionOptions, ConversionSummary};
    use rstest::rstest;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Run a fixture by converting input.csv and comparing with expected.tmx
    ///
    /// # Panics
    ///
    /// Panics if the fixture files cannot be read, the conversion fails, or
    /// the output differs from expected.tmx.
    fn run_test_fixture(fixture_name: &str) -> ConversionSummary {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.tmx", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_path = temp_dir.path().join("output.tmx");

        let summary = convert_csv_to_tmx(&ConversionOptions::new(&input_path, &output_path))
            .unwrap_or_else(|e| panic!("Failed to convert {}: {}", fixture_name, e));

        let actual_output = fs::read_to_string(&output_path)
            .unwrap_or_else(|e| panic!("Failed to read output file: {}", e));
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );

        summary
    }

    #[rstest]
    #[case("happy_path", 2)]
    #[case("header_only", 0)]
    #[case("extra_columns", 2)]
    #[case("quoted_fields", 2)]
    #[case("unescaped_specials", 2)]
    #[case("unicode", 2)]
    fn test_fixtures(#[case] fixture: &str, #[case] rows: usize) {
        let summary = run_test_fixture(fixture);

        assert_eq!(summary.rows, rows);
        assert_eq!(summary.units, rows * 2);
    }

    #[test]
    fn test_single_row_segments() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.path().join("input.csv");
        let output_path = temp_dir.path().join("output.tmx");
        fs::write(&input_path, "Danish,English\nhej,hello\n").unwrap();

        convert_csv_to_tmx(&ConversionOptions::new(&input_path, &output_path)).unwrap();

        let output = fs::read_to_string(&output_path).unwrap();
        let segments: Vec<&str> = output
            .lines()
            .filter(|line| line.contains("<tuv"))
            .map(str::trim)
            .collect();
        assert_eq!(
            segments,
            vec![
                "<tuv xml:lang=\"da\"><seg>hej</seg></tuv>",
                "<tuv xml:lang=\"en\"><seg>hej</seg></tuv>",
                "<tuv xml:lang=\"en\"><seg>hello</seg></tuv>",
                "<tuv xml:lang=\"da\"><seg>hello</seg></tuv>",
            ]
        );
    }
}
