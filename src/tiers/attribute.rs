//! Tier-2: attribute scan.
//!
//! Survives removal or reshaping of the table as long as the per-element
//! symbol annotations are still in the markup.

use crate::document::SourceDocument;
use crate::dom;
use crate::patterns::{ANY_ELEMENT_SELECTOR, SYMBOL_ATTRIBUTE};
use crate::symbol::{Symbol, SymbolPolicy, SymbolSet};

use super::{Tier, TierKind};

/// Collects the value of a symbol attribute from every element carrying it.
#[derive(Debug, Clone)]
pub struct AttributeTier {
    attribute: String,
    policy: SymbolPolicy,
}

impl AttributeTier {
    #[must_use]
    pub fn new(attribute: impl Into<String>, policy: SymbolPolicy) -> Self {
        Self {
            attribute: attribute.into(),
            policy,
        }
    }

    /// Tier reading the standard `data-symbol` attribute.
    #[must_use]
    pub fn data_symbol(policy: SymbolPolicy) -> Self {
        Self::new(SYMBOL_ATTRIBUTE, policy)
    }
}

impl Tier for AttributeTier {
    fn kind(&self) -> TierKind {
        TierKind::Attribute
    }

    fn attempt(&self, doc: &SourceDocument) -> SymbolSet {
        dom::select_in_document(doc.tree(), ANY_ELEMENT_SELECTOR)
            .iter()
            .filter_map(|el| dom::get_attribute(el, &self.attribute))
            .filter_map(|value| Symbol::parse(value.trim(), &self.policy))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_annotations_anywhere_in_the_tree() {
        let doc = SourceDocument::parse(
            r#"<ul>
                <li data-symbol="AAPL">Apple</li>
                <li><span data-symbol="MSFT">Microsoft</span></li>
            </ul>
            <div data-symbol="AAPL"></div>"#,
        );
        let symbols = AttributeTier::data_symbol(SymbolPolicy::default()).attempt(&doc);
        assert_eq!(symbols.to_strings(), vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn rejects_invalid_values() {
        let doc = SourceDocument::parse(
            r#"<i data-symbol=""></i><i data-symbol="nvda"></i><i data-symbol="BF.B"></i><i data-symbol="TSLA"></i>"#,
        );
        let symbols = AttributeTier::data_symbol(SymbolPolicy::default()).attempt(&doc);
        assert_eq!(symbols.to_strings(), vec!["TSLA"]);
    }

    #[test]
    fn honours_custom_attribute_and_length_ceiling() {
        let doc = SourceDocument::parse(
            r#"<i data-ticker="AMZN"></i><i data-ticker="TOOLONG"></i><i data-symbol="META"></i>"#,
        );
        let symbols = AttributeTier::new("data-ticker", SymbolPolicy::with_max_len(5)).attempt(&doc);
        assert_eq!(symbols.to_strings(), vec!["AMZN"]);
    }

    #[test]
    fn page_without_annotations_is_empty() {
        let doc = SourceDocument::parse("<p>No symbols here</p>");
        assert!(AttributeTier::data_symbol(SymbolPolicy::default()).attempt(&doc).is_empty());
    }
}
