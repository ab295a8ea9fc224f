//! Run-time configuration object + fluent builder.

use std::num::NonZeroUsize;

use crate::core::{
    constants::{DEFAULT_BINS, DEFAULT_BLOCK, DEFAULT_WIDTH},
    error::ConfigError,
};

/// Immutable parameters handed to the aggregator and the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub title: String,
    /// String repeated to draw each bar.
    pub block: String,
    /// Bar length of the entry with the highest count.
    pub width: usize,
    pub bins: NonZeroUsize,
    /// Bin all-integer data; when `false` every input is frequency-counted.
    pub binning: bool,
    pub counts_column: bool,
    pub counts_in_bars: bool,
}

impl Config {
    #[inline]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: String::new(),
            block: DEFAULT_BLOCK.to_owned(),
            width: DEFAULT_WIDTH,
            bins: NonZeroUsize::MIN.saturating_add(9),
            binning: true,
            counts_column: false,
            counts_in_bars: false,
        }
    }
}

/// Fluent builder; validation is deferred to `build`.
#[derive(Debug)]
pub struct ConfigBuilder {
    title: Option<String>,
    block: Option<String>,
    width: Option<usize>,
    bins: i64,
    binning: bool,
    counts_column: bool,
    counts_in_bars: bool,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self {
            title: None,
            block: None,
            width: None,
            bins: DEFAULT_BINS,
            binning: true,
            counts_column: false,
            counts_in_bars: false,
        }
    }

    #[inline]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    pub fn block(mut self, b: impl Into<String>) -> Self {
        self.block = Some(b.into());
        self
    }
    #[inline]
    pub fn width(mut self, w: usize) -> Self {
        self.width = Some(w);
        self
    }
    /// Signed on purpose: zero and negative counts are rejected by `build`.
    #[inline]
    pub fn bins(mut self, n: i64) -> Self {
        self.bins = n;
        self
    }
    #[inline]
    pub fn binning(mut self, on: bool) -> Self {
        self.binning = on;
        self
    }
    #[inline]
    pub fn counts_column(mut self, on: bool) -> Self {
        self.counts_column = on;
        self
    }
    #[inline]
    pub fn counts_in_bars(mut self, on: bool) -> Self {
        self.counts_in_bars = on;
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        if self.bins <= 0 {
            return Err(ConfigError::InvalidBins(self.bins));
        }
        let bins = usize::try_from(self.bins)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(ConfigError::BinsOutOfRange(self.bins))?;

        Ok(Config {
            title: self.title.unwrap_or_default(),
            block: self.block.unwrap_or_else(|| DEFAULT_BLOCK.to_owned()),
            width: self.width.unwrap_or(DEFAULT_WIDTH),
            bins,
            binning: self.binning,
            counts_column: self.counts_column,
            counts_in_bars: self.counts_in_bars,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn builder_defaults_match_default_config() {
        let cfg = Config::builder().build().expect("defaults are valid");
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.bins.get(), 10);
        assert_eq!(cfg.width, 50);
        assert_eq!(cfg.block, "█");
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i64::MIN)]
    fn non_positive_bins_are_rejected(#[case] bins: i64) {
        let err = Config::builder().bins(bins).build().expect_err("must reject");
        assert_eq!(err, ConfigError::InvalidBins(bins));
    }

    #[test]
    fn options_are_carried_through() {
        let cfg: Result<Config, ConfigError> = Config::builder()
            .title("fruit")
            .block("#")
            .width(20)
            .bins(3)
            .binning(false)
            .counts_column(true)
            .counts_in_bars(true)
            .into();
        let cfg = cfg.expect("valid config");
        assert_eq!(cfg.title, "fruit");
        assert_eq!(cfg.block, "#");
        assert_eq!(cfg.width, 20);
        assert_eq!(cfg.bins.get(), 3);
        assert!(!cfg.binning);
        assert!(cfg.counts_column);
        assert!(cfg.counts_in_bars);
    }
}
