//! Per-source extraction with tiered fallback.
//!
//! An [`Extractor`] owns an ordered chain of [`Tier`]s and returns the result
//! of the first one that finds anything. The source-specific parts (which
//! table, how many cells, how long a symbol may be) live in
//! [`ExtractorConfig`] rather than in the tiers.

use tracing::{debug, info, warn};

use crate::document::SourceDocument;
use crate::patterns::SYMBOL_ATTRIBUTE;
use crate::symbol::{SymbolPolicy, SymbolSet};
use crate::tiers::{AttributeTier, PatternTier, TableSelection, TableTier, Tier, TierKind};

/// Tunable extraction parameters for one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Table lookup for the table tier.
    pub table: TableSelection,

    /// Attribute read by the attribute tier.
    ///
    /// Default: `"data-symbol"`
    pub symbol_attribute: String,

    /// Acceptance rule applied by every tier.
    pub policy: SymbolPolicy,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            table: TableSelection::default(),
            symbol_attribute: SYMBOL_ATTRIBUTE.to_string(),
            policy: SymbolPolicy::default(),
        }
    }
}

impl ExtractorConfig {
    /// S&P 500 constituents page: the `constituents` table, ticker in the first cell.
    #[must_use]
    pub fn sp500() -> Self {
        Self {
            table: TableSelection {
                id: Some("constituents".to_string()),
                ..TableSelection::default()
            },
            ..Self::default()
        }
    }

    /// NASDAQ-100 page: every data table, ticker in one of the first two
    /// cells, at most five letters.
    #[must_use]
    pub fn nasdaq100() -> Self {
        Self {
            table: TableSelection {
                scan_all: true,
                cell_positions: 2,
                ..TableSelection::default()
            },
            policy: SymbolPolicy::with_max_len(5),
            ..Self::default()
        }
    }
}

/// Outcome of one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Symbols found; empty when every tier missed.
    pub symbols: SymbolSet,
    /// Tier that produced `symbols`, `None` when every tier missed.
    pub tier: Option<TierKind>,
}

/// Runs an ordered chain of tiers over one page.
pub struct Extractor {
    name: String,
    tiers: Vec<Box<dyn Tier>>,
}

impl Extractor {
    /// Standard table → attribute → pattern chain built from `config`.
    #[must_use]
    pub fn new(name: impl Into<String>, config: ExtractorConfig) -> Self {
        let ExtractorConfig {
            table,
            symbol_attribute,
            policy,
        } = config;
        let tiers: Vec<Box<dyn Tier>> = vec![
            Box::new(TableTier::new(table, policy)),
            Box::new(AttributeTier::new(symbol_attribute, policy)),
            Box::new(PatternTier::new(policy)),
        ];
        Self::with_tiers(name, tiers)
    }

    /// Custom chain, tried in the given order.
    #[must_use]
    pub fn with_tiers(name: impl Into<String>, tiers: Vec<Box<dyn Tier>>) -> Self {
        Self {
            name: name.into(),
            tiers,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tier kinds in the order they are tried.
    #[must_use]
    pub fn tier_kinds(&self) -> Vec<TierKind> {
        self.tiers.iter().map(|t| t.kind()).collect()
    }

    /// Symbols from the first tier that finds any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rs_index_tickers::{Extractor, ExtractorConfig, SourceDocument};
    ///
    /// let doc = SourceDocument::parse(r#"<div data-symbol="AAPL"></div>"#);
    /// let extractor = Extractor::new("demo", ExtractorConfig::sp500());
    /// assert_eq!(extractor.extract(&doc).to_strings(), vec!["AAPL"]);
    /// ```
    #[must_use]
    pub fn extract(&self, doc: &SourceDocument) -> SymbolSet {
        self.extract_report(doc).symbols
    }

    /// Like [`extract`](Self::extract), also reporting which tier answered.
    #[must_use]
    pub fn extract_report(&self, doc: &SourceDocument) -> Extraction {
        for tier in &self.tiers {
            let kind = tier.kind();
            debug!(source = %self.name, tier = %kind, "trying tier");
            let symbols = tier.attempt(doc);
            if !symbols.is_empty() {
                info!(source = %self.name, tier = %kind, count = symbols.len(), "tier produced symbols");
                return Extraction {
                    symbols,
                    tier: Some(kind),
                };
            }
            debug!(source = %self.name, tier = %kind, "tier found nothing, falling back");
        }

        warn!(source = %self.name, "no tier produced any symbols");
        Extraction {
            symbols: SymbolSet::new(),
            tier: None,
        }
    }
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("name", &self.name)
            .field("tiers", &self.tier_kinds())
            .finish()
    }
}

/// The index pages this crate knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Sp500,
    Nasdaq100,
}

impl Source {
    /// Every known source, in output order.
    pub const ALL: [Self; 2] = [Self::Sp500, Self::Nasdaq100];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sp500 => "S&P 500",
            Self::Nasdaq100 => "NASDAQ 100",
        }
    }

    /// Page the list is scraped from.
    #[must_use]
    pub const fn url(self) -> &'static str {
        match self {
            Self::Sp500 => "https://en.wikipedia.org/wiki/List_of_S%26P_500_companies",
            Self::Nasdaq100 => "https://en.wikipedia.org/wiki/NASDAQ-100",
        }
    }

    /// Per-source output file name.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Sp500 => "sp500.txt",
            Self::Nasdaq100 => "nasdaq100.txt",
        }
    }

    #[must_use]
    pub fn config(self) -> ExtractorConfig {
        match self {
            Self::Sp500 => ExtractorConfig::sp500(),
            Self::Nasdaq100 => ExtractorConfig::nasdaq100(),
        }
    }

    #[must_use]
    pub fn extractor(self) -> Extractor {
        Extractor::new(self.name(), self.config())
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
