//! Exact-match frequency counting for categorical data.

use std::collections::BTreeMap;

use crate::core::classify::parse_integer;

/// Distinct value → occurrence count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<String, usize>,
}

impl FrequencyTable {
    /// Counts exact string matches; no case or whitespace folding.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = BTreeMap::new();
        for v in values {
            let v = v.as_ref();
            if let Some(n) = counts.get_mut(v) {
                *n += 1;
            } else {
                counts.insert(v.to_owned(), 1);
            }
        }
        Self { counts }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of input values.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries in display order.
    ///
    /// Numeric ascending (ties broken by the raw text) when every key is an
    /// integer, code-point ascending otherwise.
    #[must_use]
    pub fn ordered(&self) -> Vec<(&str, usize)> {
        let numeric: Option<Vec<(i64, &str, usize)>> = self
            .counts
            .iter()
            .map(|(k, &n)| parse_integer(k).map(|v| (v, k.as_str(), n)))
            .collect();

        match numeric {
            Some(mut keyed) => {
                keyed.sort_unstable_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
                keyed.into_iter().map(|(_, k, n)| (k, n)).collect()
            }
            // BTreeMap<String, _> already iterates in code-point order.
            None => self.counts.iter().map(|(k, &n)| (k.as_str(), n)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_exact_matches() {
        let t = FrequencyTable::from_values(["apple", "banana", "apple", "Apple"]);
        assert_eq!(t.get("apple"), 2);
        assert_eq!(t.get("banana"), 1);
        assert_eq!(t.get("Apple"), 1);
        assert_eq!(t.get("cherry"), 0);
        assert_eq!(t.len(), 3);
        assert_eq!(t.total(), 4);
    }

    #[test]
    fn integer_keys_sort_numerically() {
        let t = FrequencyTable::from_values(["10", "9", "1", "-3", "9"]);
        assert_eq!(t.ordered(), vec![("-3", 1), ("1", 1), ("9", 2), ("10", 1)]);
    }

    #[test]
    fn equal_integers_tie_break_on_text() {
        let t = FrequencyTable::from_values(["1", "01", "+1", "0"]);
        assert_eq!(
            t.ordered(),
            vec![("0", 1), ("+1", 1), ("01", 1), ("1", 1)]
        );
    }

    #[test]
    fn any_text_key_falls_back_to_lexicographic() {
        let t = FrequencyTable::from_values(["10", "9", "banana", "apple", "Zebra"]);
        let keys: Vec<&str> = t.ordered().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["10", "9", "Zebra", "apple", "banana"]);
    }

    #[test]
    fn single_value_repeated() {
        let t = FrequencyTable::from_values(std::iter::repeat_n("x", 7));
        assert_eq!(t.ordered(), vec![("x", 7)]);
    }
}
