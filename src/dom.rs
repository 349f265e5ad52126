//! DOM helpers over `dom_query`.
//!
//! Thin wrappers that give the tiers a small, uniform vocabulary for reading
//! the parsed tree. Nothing here mutates the document.

// Re-export core types for external use
pub use dom_query::{Document, Selection};
pub use tendril::StrTendril;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Querying ===

/// All elements under `sel` matching a fixed CSS selector, in document order.
///
/// Selectors passed here are compile-time constants; dynamic values (ids,
/// classes, attribute names) are matched with the attribute helpers below.
#[must_use]
pub fn select_all<'a>(sel: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    sel.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// All elements of the document matching a fixed CSS selector.
#[must_use]
pub fn select_in_document<'a>(doc: &'a Document, selector: &str) -> Vec<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<StrTendril> {
    sel.attr(name)
}

/// Whether the element's `id` equals `id`.
#[must_use]
pub fn has_id(sel: &Selection, id: &str) -> bool {
    get_attribute(sel, "id").is_some_and(|value| &*value == id)
}

/// Whether `class` is one of the element's whitespace-separated classes.
#[must_use]
pub fn has_class(sel: &Selection, class: &str) -> bool {
    get_attribute(sel, "class")
        .is_some_and(|value| value.split_ascii_whitespace().any(|c| c == class))
}

// === Text Content ===

/// Text content of the element and its descendants, trimmed.
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    sel.text().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_class_matches_whole_tokens_only() {
        let doc = parse(r#"<table class="wikitable sortable"></table><table class="wikitables"></table>"#);
        let tables = select_in_document(&doc, "table");
        assert_eq!(tables.len(), 2);
        assert!(has_class(&tables[0], "wikitable"));
        assert!(has_class(&tables[0], "sortable"));
        assert!(!has_class(&tables[1], "wikitable"));
    }

    #[test]
    fn has_id_is_exact() {
        let doc = parse(r#"<table id="constituents"></table><table id="constituents-old"></table>"#);
        let tables = select_in_document(&doc, "table");
        assert!(has_id(&tables[0], "constituents"));
        assert!(!has_id(&tables[1], "constituents"));
    }

    #[test]
    fn trimmed_text_collects_nested_text() {
        let doc = parse("<table><tr><td>\n  <a href=\"#\">MMM</a>\n</td></tr></table>");
        let cells = select_in_document(&doc, "td");
        assert_eq!(trimmed_text(&cells[0]), "MMM");
    }

    #[test]
    fn select_all_is_scoped_to_the_selection() {
        let doc = parse("<div id=\"a\"><span>1</span></div><div><span>2</span></div>");
        let first = select_in_document(&doc, "div").remove(0);
        let spans = select_all(&first, "span");
        assert_eq!(spans.len(), 1);
        assert_eq!(trimmed_text(&spans[0]), "1");
    }

    #[test]
    fn attribute_helpers_read_values() {
        let doc = parse(r#"<span data-symbol="AAPL">Apple</span>"#);
        let span = select_in_document(&doc, "span").remove(0);
        assert_eq!(get_attribute(&span, "data-symbol").as_deref(), Some("AAPL"));
        assert!(get_attribute(&span, "data-name").is_none());
    }
}
