//! Extract every source, merge, and (optionally) persist.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::document::SourceDocument;
use crate::error::Result;
use crate::extractor::Source;
use crate::merge::{merge, MergedList};
use crate::symbol::SymbolSet;
use crate::tiers::TierKind;
use crate::writer::OutputWriter;

/// What one source yielded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub source: Source,
    pub symbols: SymbolSet,
    /// Tier that answered; `None` when the page yielded nothing.
    pub tier: Option<TierKind>,
}

/// Per-source results plus their merged union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub sources: Vec<SourceReport>,
    pub merged: MergedList,
}

impl PipelineReport {
    /// Write every per-source list, `combined.txt` and `tickers.json`.
    ///
    /// Returns the written paths in that order.
    pub fn write(&self, writer: &OutputWriter) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.sources.len() + 2);
        for report in &self.sources {
            written.push(writer.write_source(report.source.file_name(), &report.symbols)?);
        }
        written.push(writer.write_combined(&self.merged)?);
        written.push(writer.write_json(&self.merged)?);
        Ok(written)
    }
}

/// Run each source's extractor over its page and merge the results.
///
/// A source that yields nothing is logged as a warning and contributes an
/// empty set; it never aborts the run.
#[must_use]
pub fn run_pipeline(pages: &[(Source, SourceDocument)]) -> PipelineReport {
    let sources: Vec<SourceReport> = pages
        .iter()
        .map(|(source, doc)| {
            let extraction = source.extractor().extract_report(doc);
            if extraction.symbols.is_empty() {
                warn!(source = %source, "zero tickers extracted; page layout may have changed");
            }
            SourceReport {
                source: *source,
                symbols: extraction.symbols,
                tier: extraction.tier,
            }
        })
        .collect();

    let sets: Vec<SymbolSet> = sources.iter().map(|r| r.symbols.clone()).collect();
    let merged = merge(&sets);
    if merged.is_empty() {
        warn!("combined list is empty");
    } else {
        info!(count = merged.len(), "merged ticker list");
    }

    PipelineReport { sources, merged }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_is_a_soft_failure() {
        let pages = vec![
            (Source::Sp500, SourceDocument::parse("<p>maintenance</p>")),
            (Source::Nasdaq100, SourceDocument::parse(r#"<i data-symbol="AAPL"></i>"#)),
        ];
        let report = run_pipeline(&pages);
        assert_eq!(report.sources.len(), 2);
        assert!(report.sources[0].symbols.is_empty());
        assert_eq!(report.sources[0].tier, None);
        assert_eq!(report.sources[1].tier, Some(TierKind::Attribute));
        assert_eq!(report.merged.to_lines(), "AAPL");
    }

    #[test]
    fn no_pages_gives_empty_report() {
        let report = run_pipeline(&[]);
        assert!(report.sources.is_empty());
        assert!(report.merged.is_empty());
    }
}
