//! Compiled patterns and fixed selectors shared by the tiers.
//!
//! Patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Attribute that marks an element as carrying a ticker symbol.
pub const SYMBOL_ATTRIBUTE: &str = "data-symbol";

/// Class shared by the data tables on the index pages.
pub const DATA_TABLE_CLASS: &str = "wikitable";

/// Literal `data-symbol="..."` assignments with an uppercase-only value.
///
/// Matches raw text, so it still fires when the markup is too broken for the
/// tree walk to reach the element.
pub static SYMBOL_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data-symbol="([A-Z]+)""#).expect("SYMBOL_ASSIGNMENT regex")
});

// Fixed selectors for tree walks
pub(crate) const TABLE_SELECTOR: &str = "table";
pub(crate) const ROW_SELECTOR: &str = "tr";
pub(crate) const CELL_SELECTOR: &str = "td";
pub(crate) const ANY_ELEMENT_SELECTOR: &str = "*";
