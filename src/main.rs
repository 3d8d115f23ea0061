//! Stock price CLI
//!
//! Provides commands for:
//! - `import`: Replace the store with the contents of a TSV file
//! - `view`: Print every stored price
//! - `stats`: Range statistics for one instrument

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stock_price_stats::cli::{self, Cli};

fn main() -> ExitCode {
    let args = Cli::parse();

    init_logging(args.verbose);

    match cli::run(args, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Install the process-wide subscriber once, before any command runs.
///
/// Verbose mode raises the level to debug and adds timestamps and source
/// locations. `RUST_LOG` overrides the default directives.
fn init_logging(verbose: bool) {
    let default_directives = if verbose {
        "stock_price_stats=debug,stock_price=debug"
    } else {
        "stock_price_stats=info,stock_price=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    if verbose {
        tracing_subscriber::registry()
            .with(layer.with_file(true).with_line_number(true))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(layer.without_time())
            .with(filter)
            .init();
    }
}
