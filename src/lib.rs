//! Public-facing crate root – re-exports + one-shot helper.

pub mod aggregate;
pub mod cli;
pub mod core;
pub mod logging;
pub mod render;

use std::io::Write;

pub use aggregate::{Bin, BinTable, Bucket, CountTable, Entry, FrequencyTable, aggregate};
pub use crate::core::{
    classify::{Classification, classify, parse_integer},
    config::{Config, ConfigBuilder},
    data::{read_lines, read_lines_from_path, title_for_path},
    error::{ConfigError, HistoError},
};
pub use render::{RenderRow, Renderer, frame};

/// Aggregates already-loaded `lines` and writes the chart to `out`.
///
/// Empty input prints the "no data to display" notice.
pub fn render_lines<S: AsRef<str>, W: Write>(
    lines: &[S],
    cfg: &Config,
    out: W,
) -> Result<(), HistoError> {
    let table = aggregate(lines, cfg);
    Renderer::new(out).render(cfg, &table)
}
