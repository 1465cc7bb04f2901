// CLI module
// Command-line interface, argument parsing and logging setup

mod args;

pub use args::CliArgs;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Parse command-line arguments using clap
///
/// If parsing fails (missing `--input`/`--output`, unknown flags) or `--help`
/// is given, clap prints the usage or help text and exits the process; usage
/// errors exit with status 2.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or debug
/// output from this crate when `verbose` is set.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "csv2tmx=debug"
    } else {
        "csv2tmx=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
