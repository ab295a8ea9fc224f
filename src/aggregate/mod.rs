pub mod binner;
pub mod frequency;
pub mod table;

pub use binner::{Bin, BinTable, Bucket};
pub use frequency::FrequencyTable;
pub use table::{CountTable, Entry};

use tracing::{debug, instrument};

use crate::core::{
    classify::{Classification, classify},
    config::Config,
};

/// Picks the aggregation path and builds the count table.
///
/// All-integer data is binned unless `cfg.binning` is off; everything else is
/// frequency-counted.
#[instrument(level = "debug", skip_all, fields(lines = lines.len()))]
pub fn aggregate<S: AsRef<str>>(lines: &[S], cfg: &Config) -> CountTable {
    if cfg.binning {
        if let Classification::Integers(values) = classify(lines) {
            if let Some(table) = BinTable::build(&values, cfg.bins) {
                debug!(
                    min = %table.min(),
                    max = %table.max(),
                    bin_size = %table.bin_size(),
                    bins = cfg.bins.get(),
                    "numeric data binned"
                );
                return table.into();
            }
        }
    }
    let table = FrequencyTable::from_values(lines);
    debug!(distinct = table.len(), "frequency table built");
    table.into()
}
