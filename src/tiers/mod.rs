//! Candidate extraction strategies.
//!
//! Each tier reads one page and returns whatever symbols it can find. Tiers
//! trade precision for robustness:
//!
//! - [`TableTier`] reads a known column of the primary data table. Most precise,
//!   first to break when the table is renamed or reshaped.
//! - [`AttributeTier`] reads per-element `data-symbol` annotations wherever they
//!   are in the tree.
//! - [`PatternTier`] scans the raw text for `data-symbol="..."`, ignoring
//!   structure entirely.
//!
//! An [`Extractor`](crate::Extractor) tries them in that order. "Nothing found"
//! is an empty set, never an error.

use std::fmt;

use crate::document::SourceDocument;
use crate::symbol::SymbolSet;

pub mod attribute;
pub mod pattern;
pub mod table;

pub use attribute::AttributeTier;
pub use pattern::PatternTier;
pub use table::{TableSelection, TableTier};

/// Which strategy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TierKind {
    /// Structured table parser.
    Table,
    /// Attribute scan over the tree.
    Attribute,
    /// Regex over the raw text.
    Pattern,
}

impl TierKind {
    /// Lowercase name used in logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Attribute => "attribute",
            Self::Pattern => "pattern",
        }
    }
}

impl fmt::Display for TierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One strategy in an extractor's fallback chain.
pub trait Tier: Send + Sync {
    /// Which strategy this is.
    fn kind(&self) -> TierKind;

    /// Extract every qualifying symbol from `doc`. Empty when nothing qualifies.
    fn attempt(&self, doc: &SourceDocument) -> SymbolSet;
}
