//! A collection of constants.

/// Number of bins used for numeric data when none is requested.
pub const DEFAULT_BINS: i64 = 10;
/// Solid block glyph used to draw bars.
pub const DEFAULT_BLOCK: &str = "█";
/// Bar length, in character cells, of the entry with the highest count.
pub const DEFAULT_WIDTH: usize = 50;

/// Width of the optional counts column (value only, without separators).
pub const COUNTS_COLUMN_WIDTH: usize = 10;
/// Extra title rule width when the counts column is shown.
pub const RULE_EXTRA_WITH_COUNTS: usize = 12;
/// Extra title rule width without the counts column.
pub const RULE_EXTRA: usize = 2;

/// Column headings
pub const VALUE_HEADING: &str = "Value";
pub const COUNTS_HEADING: &str = "Counts";
pub const HISTOGRAM_HEADING: &str = "Histogram";

/// Printed instead of a chart when the count table has nothing to show.
pub const NO_DATA_TO_DISPLAY: &str = "No data to display.";

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";
/// Title used when reading from standard input.
pub const STDIN_TITLE: &str = "stdin";
