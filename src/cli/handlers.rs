use std::{io::Write, time::Instant};

use tracing::{Span, debug, field, instrument};

use crate::{
    aggregate::aggregate,
    core::{
        config::Config,
        data::{read_lines_from_path, title_for_path},
        error::HistoError,
    },
    render::Renderer,
};

use super::parse::Cli;

/// Runs the whole pipeline for one invocation: load, aggregate, render.
///
/// Empty input prints the "no data found" notice and succeeds. The
/// configuration is validated before the input is touched.
#[instrument(
    name = "cli.histogram",
    err,
    skip_all,
    fields(path = %cli.file.display(), lines = field::Empty)
)]
pub fn histogram<W: Write>(cli: Cli, out: W) -> Result<(), HistoError> {
    let title = cli.title.unwrap_or_else(|| title_for_path(&cli.file));
    let cfg = Config::builder()
        .title(title)
        .block(cli.block)
        .width(cli.width)
        .bins(cli.bins)
        .binning(!cli.no_binning)
        .counts_column(cli.counts_col)
        .counts_in_bars(cli.counts)
        .build()?;

    let mut renderer = Renderer::new(out);

    let t_ingest = Instant::now();
    let lines = read_lines_from_path(&cli.file)?;
    let dur_ingest = t_ingest.elapsed().as_micros();
    Span::current().record("lines", lines.len());

    if lines.is_empty() {
        debug!(ingest_us = %dur_ingest, "input is empty");
        return renderer.no_data_found(&cli.file.display().to_string());
    }

    let t_aggregate = Instant::now();
    let table = aggregate(&lines, &cfg);
    let dur_aggregate = t_aggregate.elapsed().as_micros();

    let t_render = Instant::now();
    renderer.render(&cfg, &table)?;
    let dur_render = t_render.elapsed().as_micros();

    debug!(
        ingest_us = %dur_ingest,
        aggregate_us = %dur_aggregate,
        render_us = %dur_render,
        binned = table.is_binned(),
        total = table.total(),
        "histogram complete"
    );
    Ok(())
}
