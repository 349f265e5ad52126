//! Tier-1: structured-table parser.

use dom_query::Selection;

use crate::document::SourceDocument;
use crate::dom;
use crate::patterns::{CELL_SELECTOR, DATA_TABLE_CLASS, ROW_SELECTOR, TABLE_SELECTOR};
use crate::symbol::{Symbol, SymbolPolicy, SymbolSet};

use super::{Tier, TierKind};

/// Which table(s) to read and where the ticker sits in each row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSelection {
    /// `id` of the preferred table. When it is present on the page, only that
    /// table is read.
    pub id: Option<String>,

    /// Generic class used when the id is missing or unset.
    ///
    /// Default: `"wikitable"`
    pub class: String,

    /// Read every table with `class`, not just the first.
    ///
    /// Default: `false`
    pub scan_all: bool,

    /// How many leading cells of a row may hold the ticker. The first cell
    /// that passes the policy wins.
    ///
    /// Default: `1`
    pub cell_positions: usize,
}

impl Default for TableSelection {
    fn default() -> Self {
        Self {
            id: None,
            class: DATA_TABLE_CLASS.to_string(),
            scan_all: false,
            cell_positions: 1,
        }
    }
}

/// Reads tickers out of the primary data table.
#[derive(Debug, Clone)]
pub struct TableTier {
    selection: TableSelection,
    policy: SymbolPolicy,
}

impl TableTier {
    #[must_use]
    pub fn new(selection: TableSelection, policy: SymbolPolicy) -> Self {
        Self { selection, policy }
    }

    /// Candidate tables in priority order: the id match alone if present,
    /// otherwise the first (or every) class match.
    fn candidate_tables<'a>(&self, doc: &'a SourceDocument) -> Vec<Selection<'a>> {
        let tables = dom::select_in_document(doc.tree(), TABLE_SELECTOR);

        if let Some(id) = self.selection.id.as_deref() {
            if let Some(table) = tables.iter().find(|t| dom::has_id(t, id)) {
                return vec![table.clone()];
            }
        }

        let mut by_class = tables
            .into_iter()
            .filter(|t| dom::has_class(t, &self.selection.class));
        if self.selection.scan_all {
            by_class.collect()
        } else {
            by_class.next().into_iter().collect()
        }
    }

    fn symbol_from_row(&self, row: &Selection) -> Option<Symbol> {
        dom::select_all(row, CELL_SELECTOR)
            .iter()
            .take(self.selection.cell_positions)
            .find_map(|cell| Symbol::parse(&dom::trimmed_text(cell), &self.policy))
    }
}

impl Tier for TableTier {
    fn kind(&self) -> TierKind {
        TierKind::Table
    }

    fn attempt(&self, doc: &SourceDocument) -> SymbolSet {
        self.candidate_tables(doc)
            .iter()
            .flat_map(|table| {
                // first row is the header
                dom::select_all(table, ROW_SELECTOR).into_iter().skip(1)
            })
            .filter_map(|row| self.symbol_from_row(&row))
            .collect()
    }
}
