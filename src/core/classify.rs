//! Decides once whether a data set is all-integer or categorical.

/// Outcome of classifying an input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Every line parsed; values are in source order.
    Integers(Vec<i64>),
    /// At least one line is not a strict integer.
    Text,
}

impl Classification {
    #[inline]
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integers(_))
    }
}

/// Strict base-10 integer: optional sign, digits only, no residue.
///
/// Overflow fails closed and yields `None`.
#[inline]
#[must_use]
pub fn parse_integer(text: &str) -> Option<i64> {
    lexical_core::parse::<i64>(text.as_bytes()).ok()
}

/// A single non-integer token sends the whole data set down the categorical
/// path. Empty input classifies as [`Classification::Text`].
#[must_use]
pub fn classify<S: AsRef<str>>(lines: &[S]) -> Classification {
    if lines.is_empty() {
        return Classification::Text;
    }
    lines
        .iter()
        .map(|l| parse_integer(l.as_ref()))
        .collect::<Option<Vec<_>>>()
        .map_or(Classification::Text, Classification::Integers)
}
