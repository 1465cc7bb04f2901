//! csv2tmx CLI
//!
//! Command-line interface for converting a two-column CSV of paired phrases
//! into a TMX translation memory.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --input input2tmx.csv --output pcat.tmx
//! cargo run -- -i input2tmx.csv -o pcat.tmx
//! cargo run -- -i phrases.csv -o phrases.tmx --source-column German --source-lang de
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Conversion error (input not found, missing column, write failure, ...)
//! - 2: Invalid or missing command-line arguments

use csv2tmx::cli;
use csv2tmx::core::convert_csv_to_tmx;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(args.verbose);

    let result = args
        .to_conversion_options()
        .and_then(|options| convert_csv_to_tmx(&options));

    match result {
        Ok(_) => println!("TMX file created successfully."),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
