//! CLI entry point: render the histogram and map failures to the exit status.

use std::process::ExitCode;

use tracing::error;

fn main() -> ExitCode {
    if let Err(err) = text_histo::cli::run() {
        error!(
            error = %err,
            input_unavailable = err.is_input_unavailable(),
            "histogram failed"
        );
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
