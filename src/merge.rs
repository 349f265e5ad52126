//! Union of per-source symbol sets into one sorted list.

use serde::Serialize;

use crate::symbol::{Symbol, SymbolSet};

/// Sorted, deduplicated union of every source's symbols.
///
/// Serializes as a plain JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MergedList(Vec<Symbol>);

impl MergedList {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Symbol] {
        &self.0
    }

    /// One symbol per line, no trailing newline.
    #[must_use]
    pub fn to_lines(&self) -> String {
        join_lines(self.0.iter())
    }
}

impl<'a> IntoIterator for &'a MergedList {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Merge symbol sets into a list sorted ascending by symbol text.
///
/// Input order and repeated inputs do not affect the result. Zero inputs, or
/// only empty ones, give an empty list.
///
/// # Example
///
/// ```rust
/// use rs_index_tickers::{merge, Symbol, SymbolPolicy, SymbolSet};
///
/// let parse = |s: &[&str]| -> SymbolSet {
///     s.iter().filter_map(|t| Symbol::parse(t, &SymbolPolicy::default())).collect()
/// };
/// let merged = merge(&[parse(&["AAPL", "MSFT", "GOOGL"]), parse(&["MSFT", "NVDA"])]);
/// assert_eq!(merged.to_lines(), "AAPL\nGOOGL\nMSFT\nNVDA");
/// ```
#[must_use]
pub fn merge(sets: &[SymbolSet]) -> MergedList {
    let union = sets
        .iter()
        .fold(SymbolSet::new(), |acc, set| acc.union(set));
    // SymbolSet iterates in ascending order
    MergedList(union.into_iter().collect())
}

pub(crate) fn join_lines<'a>(symbols: impl Iterator<Item = &'a Symbol>) -> String {
    symbols.map(Symbol::as_str).collect::<Vec<_>>().join("\n")
}
