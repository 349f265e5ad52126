//! The page handed to the extraction engine.

use dom_query::Document;

use crate::dom;
use crate::encoding;

/// Raw markup of one index page together with its parsed tree.
///
/// Parsing goes through html5ever, which recovers from malformed markup
/// instead of failing, so construction is infallible. The engine only reads
/// from a `SourceDocument`.
pub struct SourceDocument {
    raw: String,
    tree: Document,
}

impl SourceDocument {
    /// Parse markup that is already text.
    #[must_use]
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let tree = dom::parse(&raw);
        Self { raw, tree }
    }

    /// Decode a response body and parse it.
    ///
    /// `content_type` is the value of the HTTP `Content-Type` header, if any.
    #[must_use]
    pub fn from_bytes(bytes: &[u8], content_type: Option<&str>) -> Self {
        Self::parse(encoding::decode(bytes, content_type))
    }

    /// Unparsed text, as used by the pattern tier.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parsed tree, as used by the table and attribute tiers.
    #[inline]
    #[must_use]
    pub fn tree(&self) -> &Document {
        &self.tree
    }
}

impl std::fmt::Debug for SourceDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceDocument")
            .field("len", &self.raw.len())
            .finish_non_exhaustive()
    }
}

impl From<&str> for SourceDocument {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for SourceDocument {
    fn from(raw: String) -> Self {
        Self::parse(raw)
    }
}
