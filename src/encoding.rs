//! Charset resolution for fetched page bytes.
//!
//! The HTTP `Content-Type` header wins; otherwise the first 1024 bytes are
//! searched for a `<meta>` charset declaration; otherwise UTF-8. A UTF-16
//! label in `<meta>` is read as UTF-8, as browsers do.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// `charset=...` parameter inside a `Content-Type` value.
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex")
});

/// `<meta charset="...">` or `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

const SNIFF_LEN: usize = 1024;

fn label_to_encoding(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

/// Resolve the encoding of a page body.
#[must_use]
pub fn detect_encoding(bytes: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some(encoding) = content_type
        .and_then(|ct| HEADER_CHARSET_RE.captures(ct))
        .and_then(|c| c.get(1))
        .and_then(|m| label_to_encoding(m.as_str()))
    {
        return encoding;
    }

    // utf-16 labels in <meta> decode as UTF-8
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_LEN)]);
    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| label_to_encoding(m.as_str()))
        .map_or(UTF_8, Encoding::output_encoding)
}

/// Decode a page body to UTF-8, replacing invalid sequences with U+FFFD.
///
/// # Example
///
/// ```rust
/// use rs_index_tickers::encoding::decode;
///
/// let body = b"<td>Soci\xE9t\xE9</td>";
/// let text = decode(body, Some("text/html; charset=ISO-8859-1"));
/// assert!(text.contains("Société"));
/// ```
#[must_use]
pub fn decode(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(bytes, content_type);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(bytes).into_owned();
    }
    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_charset_takes_precedence_over_meta() {
        let html = br#"<meta charset="utf-8"><p>x</p>"#;
        let encoding = detect_encoding(html, Some("text/html; charset=windows-1252"));
        assert_eq!(encoding.name(), "windows-1252");
    }

    #[test]
    fn meta_charset_used_without_header() {
        let html = br#"<html><head><meta charset="ISO-8859-1"></head></html>"#;
        // encoding_rs maps ISO-8859-1 to windows-1252 per WHATWG
        assert_eq!(detect_encoding(html, None).name(), "windows-1252");
    }

    #[test]
    fn http_equiv_meta_is_recognised() {
        let html = br#"<META HTTP-EQUIV="content-type" CONTENT="text/html; CHARSET=windows-1252">"#;
        assert_eq!(detect_encoding(html, None).name(), "windows-1252");
    }

    #[test]
    fn utf16_meta_label_means_utf8() {
        for label in ["utf-16", "UTF-16LE", "utf-16be"] {
            let html = format!(r#"<meta charset="{label}"><p>AAPL</p>"#);
            assert_eq!(detect_encoding(html.as_bytes(), None), UTF_8, "{label}");
        }
    }

    #[test]
    fn header_without_charset_falls_through() {
        let html = b"<p>plain</p>";
        assert_eq!(detect_encoding(html, Some("text/html")), UTF_8);
    }

    #[test]
    fn unknown_label_defaults_to_utf8() {
        let html = br#"<meta charset="not-a-charset">"#;
        assert_eq!(detect_encoding(html, None), UTF_8);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let text = decode(b"AAPL \xFF\xFE MSFT", None);
        assert!(text.contains("AAPL"));
        assert!(text.contains("MSFT"));
        assert!(text.contains('\u{FFFD}'));
    }
}
