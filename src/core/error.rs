//! Centralised error types used across the crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Precise configuration faults, raised before any aggregation happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `num_bins` was zero or negative.
    #[error("number of bins must be positive, got {0}")]
    InvalidBins(i64),
    /// `num_bins` does not fit the platform's index type.
    #[error("number of bins {0} is too large for this platform")]
    BinsOutOfRange(i64),
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum HistoError {
    /// The input could not be opened or read as UTF-8 text.
    #[error("failed to read `{}`: {source}", path.display())]
    InputUnavailable {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Writing the chart to the output stream failed.
    #[error("failed to write histogram: {0}")]
    Output(#[from] io::Error),
}

impl HistoError {
    /// `true` when the input file was missing or unreadable.
    #[must_use]
    pub fn is_input_unavailable(&self) -> bool {
        matches!(self, Self::InputUnavailable { .. })
    }
}
