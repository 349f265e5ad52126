//! # rs-index-tickers
//!
//! Self-healing extraction of ticker symbols from index membership pages
//! (S&P 500 and NASDAQ-100), merged into one sorted, deduplicated list.
//!
//! Page layouts drift, so each source is read by a chain of strategies that
//! trade precision for robustness: the data table first, then `data-symbol`
//! attributes anywhere in the tree, then a raw-text pattern. The first
//! strategy that finds anything wins; a page where all of them miss gives an
//! empty set rather than an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_index_tickers::{merge, Source, SourceDocument};
//!
//! let sp500 = SourceDocument::parse(r#"<table id="constituents">
//!     <tr><th>Symbol</th></tr>
//!     <tr><td>AAPL</td></tr><tr><td>MSFT</td></tr>
//! </table>"#);
//! let nasdaq = SourceDocument::parse(r#"<span data-symbol="NVDA"></span>"#);
//!
//! let a = Source::Sp500.extractor().extract(&sp500);
//! let b = Source::Nasdaq100.extractor().extract(&nasdaq);
//! let merged = merge(&[a, b]);
//! assert_eq!(merged.to_lines(), "AAPL\nMSFT\nNVDA");
//! ```
//!
//! ## Layers
//!
//! - **Engine** (`symbol`, `document`, `tiers`, `extractor`, `merge`): pure,
//!   synchronous, no I/O.
//! - **Collaborators** (`fetch`, `writer`, `config`, `pipeline`): network,
//!   files and configuration around the engine.

mod error;

/// Ticker symbols, acceptance policy and symbol sets.
pub mod symbol;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Charset detection and decoding of page bytes.
pub mod encoding;

/// Raw page text plus its parsed tree.
pub mod document;

/// Compiled patterns and fixed selectors.
pub mod patterns;

/// Table, attribute and pattern extraction strategies.
pub mod tiers;

/// Per-source fallback orchestration.
pub mod extractor;

/// Union of per-source sets.
pub mod merge;

/// Text and JSON list files: writing and loading back.
pub mod writer;

/// Pipeline configuration.
pub mod config;

/// End-to-end extraction over several sources.
pub mod pipeline;

/// HTTP retrieval of pages.
#[cfg(feature = "fetch")]
pub mod fetch;

// Public API - re-exports
pub use config::{Config, ConfigOverrides};
pub use document::SourceDocument;
pub use error::{Error, Result};
pub use extractor::{Extraction, Extractor, ExtractorConfig, Source};
pub use merge::{merge, MergedList};
pub use pipeline::{run_pipeline, PipelineReport, SourceReport};
pub use symbol::{Symbol, SymbolPolicy, SymbolSet};
pub use tiers::{Tier, TierKind};
pub use writer::{load_file_or_dir, load_from_dir, load_symbols, OutputWriter};

#[cfg(feature = "fetch")]
pub use fetch::Fetcher;
