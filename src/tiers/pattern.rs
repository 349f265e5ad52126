//! Tier-3: pattern match over raw text.

use crate::document::SourceDocument;
use crate::patterns::SYMBOL_ASSIGNMENT;
use crate::symbol::{Symbol, SymbolPolicy, SymbolSet};

use super::{Tier, TierKind};

/// Last resort: `data-symbol="..."` assignments found anywhere in the text,
/// including markup the parser could not place in the tree.
#[derive(Debug, Clone, Default)]
pub struct PatternTier {
    policy: SymbolPolicy,
}

impl PatternTier {
    #[must_use]
    pub fn new(policy: SymbolPolicy) -> Self {
        Self { policy }
    }
}

impl Tier for PatternTier {
    fn kind(&self) -> TierKind {
        TierKind::Pattern
    }

    fn attempt(&self, doc: &SourceDocument) -> SymbolSet {
        SYMBOL_ASSIGNMENT
            .captures_iter(doc.raw())
            .filter_map(|caps| caps.get(1))
            .filter_map(|m| Symbol::parse(m.as_str(), &self.policy))
            .collect()
    }
}
