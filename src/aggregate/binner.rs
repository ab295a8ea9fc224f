//! Fixed-count, equal-width binning of integer data.
//!
//! * `bin_size = ceil((max - min + 1) / num_bins)`
//! * bin `i` covers `[min + i*bin_size, min + (i+1)*bin_size - 1]`
//! * the last bin's upper bound is forced to `max`
//!
//! When `num_bins` is large relative to the value range the trailing bins
//! can start past `max` (and the forced last bin can end up with
//! `low > high`). Such bins are kept in the table with a zero count and
//! simply never show up in the rendered chart.
//!
//! Bounds are `i128` so the arithmetic stays exact over the whole `i64`
//! domain.

use std::{fmt, num::NonZeroUsize};

/// Inclusive integer range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bin {
    pub low: i128,
    pub high: i128,
}

impl Bin {
    #[inline]
    #[must_use]
    pub fn contains(&self, v: i128) -> bool {
        self.low <= v && v <= self.high
    }

    /// `true` for the inverted ranges described in the module docs.
    #[inline]
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// One bin and the number of values that fell into it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bucket {
    pub bin: Bin,
    pub count: usize,
}

/// Ordered sequence of exactly `num_bins` buckets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinTable {
    min: i128,
    max: i128,
    bin_size: i128,
    buckets: Vec<Bucket>,
}

impl BinTable {
    /// Bins `values` into `num_bins` equal-width buckets.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn build(values: &[i64], num_bins: NonZeroUsize) -> Option<Self> {
        let min = i128::from(*values.iter().min()?);
        let max = i128::from(*values.iter().max()?);

        let target = num_bins.get();
        let k = i128::try_from(target).unwrap_or(i128::MAX);
        let span = max - min + 1;
        let bin_size = (span + k - 1) / k;

        let mut buckets = Vec::with_capacity(target);
        let mut low = min;
        for i in 0..target {
            let high = if i + 1 == target {
                max
            } else {
                low + bin_size - 1
            };
            buckets.push(Bucket {
                bin: Bin { low, high },
                count: 0,
            });
            low += bin_size;
        }

        let mut table = Self {
            min,
            max,
            bin_size,
            buckets,
        };
        for &v in values {
            let index = table.index_of(i128::from(v));
            table.buckets[index].count += 1;
        }
        Some(table)
    }

    /// Index of the unique bin containing `v` (`v` must lie in `[min, max]`).
    ///
    /// `(v - min) / bin_size` never exceeds `num_bins - 1` because
    /// `num_bins * bin_size >= max - min + 1`; values past the regular bins
    /// belong to the widened last bin.
    fn index_of(&self, v: i128) -> usize {
        let last = self.buckets.len() - 1;
        let index = usize::try_from((v - self.min) / self.bin_size).map_or(last, |i| i.min(last));
        debug_assert!(self.buckets[index].bin.contains(v));
        index
    }

    #[inline]
    #[must_use]
    pub fn min(&self) -> i128 {
        self.min
    }

    #[inline]
    #[must_use]
    pub fn max(&self) -> i128 {
        self.max
    }

    #[inline]
    #[must_use]
    pub fn bin_size(&self) -> i128 {
        self.bin_size
    }

    /// All buckets in construction order, empty ones included.
    #[inline]
    #[must_use]
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// Non-empty buckets sorted by lower bound.
    #[must_use]
    pub fn ordered(&self) -> Vec<Bucket> {
        let mut out: Vec<Bucket> = self.buckets.iter().copied().filter(|b| b.count > 0).collect();
        out.sort_by_key(|b| b.bin.low);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn bins(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("non-zero")
    }

    fn ranges(t: &BinTable) -> Vec<(i128, i128)> {
        t.buckets().iter().map(|b| (b.bin.low, b.bin.high)).collect()
    }

    fn counts(t: &BinTable) -> Vec<usize> {
        t.buckets().iter().map(|b| b.count).collect()
    }

    #[test]
    fn empty_data_has_no_table() {
        assert!(BinTable::build(&[], bins(10)).is_none());
    }

    #[test]
    fn even_split() {
        let data: Vec<i64> = (1..=10).collect();
        let t = BinTable::build(&data, bins(5)).expect("non-empty");
        assert_eq!(t.bin_size(), 2);
        assert_eq!(ranges(&t), vec![(1, 2), (3, 4), (5, 6), (7, 8), (9, 10)]);
        assert_eq!(counts(&t), vec![2; 5]);
    }

    #[test]
    fn last_bin_absorbs_rounding() {
        let data = [0, 3, 4, 6];
        let t = BinTable::build(&data, bins(3)).expect("non-empty");
        // span 7, bin_size ceil(7/3) = 3
        assert_eq!(ranges(&t), vec![(0, 2), (3, 5), (6, 6)]);
        assert_eq!(counts(&t), vec![1, 2, 1]);
    }

    #[test]
    fn more_bins_than_values_in_range() {
        // min 1, max 3, ten bins: bin_size 1, bins past max stay empty and
        // the forced last bin is inverted.
        let t = BinTable::build(&[3, 1, 2, 1], bins(10)).expect("non-empty");
        assert_eq!(t.bin_size(), 1);
        assert_eq!(t.buckets().len(), 10);
        assert_eq!(t.buckets()[0].bin, Bin { low: 1, high: 1 });
        assert_eq!(t.buckets()[8].bin, Bin { low: 9, high: 9 });
        let last = t.buckets()[9].bin;
        assert_eq!(last, Bin { low: 10, high: 3 });
        assert!(last.is_inverted());
        assert_eq!(counts(&t), vec![2, 1, 1, 0, 0, 0, 0, 0, 0, 0]);

        let shown: Vec<String> = t.ordered().iter().map(|b| b.bin.to_string()).collect();
        assert_eq!(shown, vec!["1-1", "2-2", "3-3"]);
    }

    #[test]
    fn regular_bin_may_straddle_max() {
        // span 11 over 10 bins: bin_size 2, bin (11, 12) reaches past max.
        let data: Vec<i64> = (1..=11).collect();
        let t = BinTable::build(&data, bins(10)).expect("non-empty");
        assert_eq!(t.buckets()[5].bin, Bin { low: 11, high: 12 });
        assert_eq!(t.buckets()[5].count, 1);
        assert_eq!(t.buckets()[9].bin, Bin { low: 19, high: 11 });
        assert_eq!(t.total(), 11);
    }

    #[test]
    fn all_equal_values_fill_one_bin() {
        let t = BinTable::build(&[5; 6], bins(4)).expect("non-empty");
        let shown = t.ordered();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].count, 6);
        assert_eq!(shown[0].bin, Bin { low: 5, high: 5 });
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let data = [i64::MIN, 0, i64::MAX];
        let t = BinTable::build(&data, bins(2)).expect("non-empty");
        assert_eq!(t.buckets()[1].bin.high, i128::from(i64::MAX));
        // bin_size 2^63: [MIN, -1] and [0, MAX]
        assert_eq!(counts(&t), vec![1, 2]);
    }

    #[rstest]
    #[case(vec![3, 1, 2, 1], 1)]
    #[case(vec![3, 1, 2, 1], 3)]
    #[case(vec![3, 1, 2, 1], 10)]
    #[case(vec![-50, 7, 7, 13, 99, 100, -3], 4)]
    #[case(vec![-50, 7, 7, 13, 99, 100, -3], 7)]
    #[case((0..97).map(|v| v * 3 - 40).collect(), 9)]
    #[case(vec![42], 5)]
    fn bins_partition_the_range(#[case] data: Vec<i64>, #[case] k: usize) {
        let t = BinTable::build(&data, bins(k)).expect("non-empty");
        assert_eq!(t.buckets().len(), k);
        assert_eq!(t.total(), data.len());
        assert_eq!(t.buckets()[k - 1].bin.high, t.max());

        // every point of [min, max] is covered by exactly one bin
        for v in t.min()..=t.max() {
            let hits = t.buckets().iter().filter(|b| b.bin.contains(v)).count();
            assert_eq!(hits, 1, "value {v} covered {hits} times");
        }
        // and every value was counted in the bin that contains it
        for b in t.buckets() {
            let expected = data
                .iter()
                .filter(|&&v| b.bin.contains(i128::from(v)))
                .count();
            assert_eq!(b.count, expected, "bin {}", b.bin);
        }
    }
}
