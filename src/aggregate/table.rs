//! The count mapping handed to the renderer.

use crate::aggregate::{binner::BinTable, frequency::FrequencyTable};

/// Either frequency counts or bins, decided once by the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountTable {
    Categorical(FrequencyTable),
    Binned(BinTable),
}

/// One displayable entry: rendered label + count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub label: String,
    pub count: usize,
}

impl CountTable {
    #[inline]
    #[must_use]
    pub fn is_binned(&self) -> bool {
        matches!(self, Self::Binned(_))
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        match self {
            Self::Categorical(t) => t.total(),
            Self::Binned(t) => t.total(),
        }
    }

    /// Entries in display order with labels formatted; empty bins omitted.
    #[must_use]
    pub fn entries(&self) -> Vec<Entry> {
        match self {
            Self::Categorical(t) => t
                .ordered()
                .into_iter()
                .map(|(label, count)| Entry {
                    label: label.to_owned(),
                    count,
                })
                .collect(),
            Self::Binned(t) => t
                .ordered()
                .into_iter()
                .map(|b| Entry {
                    label: b.bin.to_string(),
                    count: b.count,
                })
                .collect(),
        }
    }
}

impl From<FrequencyTable> for CountTable {
    fn from(t: FrequencyTable) -> Self {
        Self::Categorical(t)
    }
}

impl From<BinTable> for CountTable {
    fn from(t: BinTable) -> Self {
        Self::Binned(t)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;

    #[test]
    fn categorical_entries_use_raw_labels() {
        let table = CountTable::from(FrequencyTable::from_values(["b", "a", "b"]));
        assert!(!table.is_binned());
        assert_eq!(table.total(), 3);
        assert_eq!(
            table.entries(),
            vec![
                Entry { label: "a".into(), count: 1 },
                Entry { label: "b".into(), count: 2 },
            ]
        );
    }

    #[test]
    fn binned_entries_use_range_labels() {
        let bins = NonZeroUsize::new(2).expect("non-zero");
        let table = CountTable::from(BinTable::build(&[1, 2, 9, 10], bins).expect("non-empty"));
        assert!(table.is_binned());
        assert_eq!(table.total(), 4);
        let labels: Vec<String> = table.entries().into_iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["1-5", "6-10"]);
    }
}
