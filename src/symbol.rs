//! Ticker symbols and the sets they are collected into.
//!
//! A [`Symbol`] can only be built through [`Symbol::parse`], so every value in
//! circulation is non-empty, uppercase ASCII and within the source's length
//! ceiling. A [`SymbolSet`] is immutable once collected.

use std::borrow::Borrow;
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Per-source acceptance rule applied to every candidate, whatever tier found it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymbolPolicy {
    /// Longest accepted symbol. `None` accepts any length.
    ///
    /// Default: `None`
    pub max_len: Option<usize>,
}

impl SymbolPolicy {
    /// Policy with a length ceiling.
    #[must_use]
    pub const fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
        }
    }

    /// Check whether `candidate` qualifies as a symbol under this policy.
    #[must_use]
    pub fn accepts(&self, candidate: &str) -> bool {
        !candidate.is_empty()
            && candidate.bytes().all(|b| b.is_ascii_uppercase())
            && self.max_len.is_none_or(|max| candidate.len() <= max)
    }
}

/// A ticker symbol: non-empty, uppercase ASCII letters only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Validate a candidate against `policy`.
    ///
    /// Surrounding whitespace is not trimmed here, so `" AAPL"` is rejected.
    /// Callers reading text out of the tree trim it first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rs_index_tickers::{Symbol, SymbolPolicy};
    ///
    /// let policy = SymbolPolicy::default();
    /// assert!(Symbol::parse("MSFT", &policy).is_some());
    /// assert!(Symbol::parse("msft", &policy).is_none());
    /// assert!(Symbol::parse("BRK.B", &policy).is_none());
    /// assert!(Symbol::parse("GOOGLE", &SymbolPolicy::with_max_len(5)).is_none());
    /// ```
    #[must_use]
    pub fn parse(candidate: &str, policy: &SymbolPolicy) -> Option<Self> {
        policy.accepts(candidate).then(|| Self(candidate.to_string()))
    }

    /// The symbol text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Unique symbols produced by one extraction run.
///
/// Backed by an ordered set, so iteration is ascending and rendering is
/// stable from run to run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolSet(BTreeSet<Symbol>);

impl SymbolSet {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `symbol` is present.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.0.contains(symbol)
    }

    /// Iterate in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, Symbol> {
        self.0.iter()
    }

    /// A new set holding the symbols of both sets.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).cloned().collect())
    }

    /// Symbols as plain strings, ascending.
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl FromIterator<Symbol> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SymbolSet {
    type Item = &'a Symbol;
    type IntoIter = btree_set::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for SymbolSet {
    type Item = Symbol;
    type IntoIter = btree_set::IntoIter<Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
