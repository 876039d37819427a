//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate used by the selector cascade and
//! the classifier. Selectors here may come from user-supplied profile tables,
//! so every query goes through the non-panicking `try_select` path.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Attribute Operations ===

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text of the `<title>` element, or empty.
#[must_use]
pub fn title_text(doc: &Document) -> String {
    let title = doc.select("title");
    if title.is_empty() {
        return String::new();
    }
    title.first().text().to_string()
}

/// Text content of `<body>`, or empty when the document has no body text.
#[must_use]
pub fn body_text(doc: &Document) -> StrTendril {
    doc.select("body").text()
}

// === Querying ===

/// First element in the document matching `selector`.
///
/// Returns `None` for no match and for selectors that fail to compile.
#[must_use]
pub fn query_first<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    doc.try_select(selector).map(|sel| sel.first())
}

/// Whether any element in the document matches `selector`.
#[inline]
#[must_use]
pub fn exists(doc: &Document, selector: &str) -> bool {
    query_first(doc, selector).is_some()
}

/// Whether `selector` compiles as a CSS selector.
///
/// # Errors
///
/// Returns the parser's message when the selector is rejected.
pub fn check_selector(selector: &str) -> std::result::Result<(), String> {
    dom_query::Matcher::new(selector)
        .map(|_| ())
        .map_err(|err| format!("{err:?}"))
}

/// `content` of the first `<meta>` whose `property`, `name` or `itemprop`
/// equals `key` (case-insensitive).
#[must_use]
pub fn meta_content(doc: &Document, key: &str) -> Option<String> {
    for node in doc.select("meta").nodes() {
        let meta = Selection::from(*node);

        let name = get_attribute(&meta, "property")
            .or_else(|| get_attribute(&meta, "name"))
            .or_else(|| get_attribute(&meta, "itemprop"))
            .unwrap_or_default();

        if !name.eq_ignore_ascii_case(key) {
            continue;
        }

        if let Some(content) = get_attribute(&meta, "content") {
            if !content.trim().is_empty() {
                return Some(content);
            }
        }
    }
    None
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
