mod handlers;
pub mod parse;

use std::io::{self, BufWriter};

use clap::Parser;
pub use handlers::histogram;
pub use parse::Cli;

use crate::{core::error::HistoError, logging};

/// Parse arguments, initialise logging and render the histogram to stdout.
pub fn run() -> Result<(), HistoError> {
    let cli = Cli::parse();
    if let Err(err) = logging::init_logging(cli.debug) {
        eprintln!("failed to initialise logging: {err}");
    }
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    handlers::histogram(cli, &mut out)
}
