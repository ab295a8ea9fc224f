//! Text frame renderer:
//! - title block underlined with `=`
//! - `Value | [Counts |] Histogram` header + `-` separator
//! - one row per entry, bars scaled linearly to `Config::width`
//!
//! The whole frame is assembled in memory and written with a single
//! `write_all`.

use std::io::Write;

use tracing::{debug, instrument};

use crate::{
    aggregate::CountTable,
    core::{
        config::Config,
        constants::{
            COUNTS_COLUMN_WIDTH, COUNTS_HEADING, HISTOGRAM_HEADING, NO_DATA_TO_DISPLAY,
            RULE_EXTRA, RULE_EXTRA_WITH_COUNTS, VALUE_HEADING,
        },
        error::HistoError,
    },
};

const RULE: &str = "=";
const DASH: &str = "-";
const COL_SEP: &str = " |";
const CROSS: &str = "+";

/// One output row before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    pub label: String,
    pub count: usize,
    pub bar_len: usize,
}

/// `floor(count * width / max_count)`, zero when `max_count` is zero.
#[inline]
#[must_use]
pub fn bar_length(count: usize, width: usize, max_count: usize) -> usize {
    if max_count == 0 {
        return 0;
    }
    let scaled = count as u128 * width as u128 / max_count as u128;
    usize::try_from(scaled).unwrap_or(width)
}

/// Ordered rows ready for display, or `None` when there is nothing to draw
/// (no entries, or every count is zero).
#[must_use]
pub fn layout(cfg: &Config, table: &CountTable) -> Option<Vec<RenderRow>> {
    let entries = table.entries();
    let max_count = entries.iter().map(|e| e.count).max()?;
    if max_count == 0 {
        return None;
    }
    Some(
        entries
            .into_iter()
            .map(|e| RenderRow {
                bar_len: bar_length(e.count, cfg.width, max_count),
                label: e.label,
                count: e.count,
            })
            .collect(),
    )
}

fn push_line(buf: &mut String, line: &str) {
    buf.push_str(line);
    buf.push('\n');
}

fn push_header(buf: &mut String, cfg: &Config, label_width: usize) {
    let extra = if cfg.counts_column {
        RULE_EXTRA_WITH_COUNTS
    } else {
        RULE_EXTRA
    };
    buf.push('\n');
    push_line(buf, &cfg.title);
    push_line(buf, &RULE.repeat(label_width + cfg.width + extra));

    let mut header = format!("{VALUE_HEADING:<label_width$}{COL_SEP}");
    if cfg.counts_column {
        header.push_str(&format!(" {COUNTS_HEADING:<COUNTS_COLUMN_WIDTH$}{COL_SEP}"));
    }
    header.push(' ');
    header.push_str(HISTOGRAM_HEADING);
    push_line(buf, &header);

    let mut sep = DASH.repeat(label_width + 1);
    sep.push_str(CROSS);
    if cfg.counts_column {
        sep.push_str(&DASH.repeat(COUNTS_COLUMN_WIDTH + 2));
        sep.push_str(CROSS);
    }
    sep.push_str(&DASH.repeat(cfg.width + 1));
    push_line(buf, &sep);
}

fn push_row(buf: &mut String, cfg: &Config, label_width: usize, row: &RenderRow) {
    let mut line = format!("{:<label_width$}{COL_SEP}", row.label);
    if cfg.counts_column {
        line.push_str(&format!(" {:<COUNTS_COLUMN_WIDTH$}{COL_SEP}", row.count));
    }
    line.push(' ');
    line.push_str(&cfg.block.repeat(row.bar_len));
    if cfg.counts_in_bars && row.bar_len > 0 {
        line.push(' ');
        line.push_str(&row.count.to_string());
    }
    push_line(buf, &line);
}

/// Build the full frame (title, header, rows) as a string.
///
/// An empty table yields the "no data" notice instead.
#[must_use]
pub fn frame(cfg: &Config, table: &CountTable) -> String {
    let Some(rows) = layout(cfg, table) else {
        let mut buf = String::new();
        push_line(&mut buf, NO_DATA_TO_DISPLAY);
        return buf;
    };
    let label_width = rows
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut buf = String::new();
    push_header(&mut buf, cfg, label_width);
    for row in &rows {
        push_row(&mut buf, cfg, label_width, row);
    }
    buf
}

/// Renders whole charts into any `Write` sink.
pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    #[inline]
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Main render entry.
    #[instrument(level = "debug", skip_all, fields(binned = table.is_binned()))]
    pub fn render(&mut self, cfg: &Config, table: &CountTable) -> Result<(), HistoError> {
        let text = frame(cfg, table);
        debug!(bytes = text.len(), "frame assembled");
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Notice printed when the input held no usable lines.
    pub fn no_data_found(&mut self, source: &str) -> Result<(), HistoError> {
        writeln!(self.out, "No data found in {source}")?;
        self.out.flush()?;
        Ok(())
    }
}
