//! Utility functions for selector pattern matching
//!
//! Provides helper functions used by element rules for common operations
//! like attribute access and case-insensitive matching.

use crate::dom;
use dom_query::Selection;

// === String Utilities ===

/// Case-insensitive contains check
#[inline]
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    lower(haystack).contains(&lower(needle))
}

/// Convert to lowercase
#[inline]
#[must_use]
pub fn lower(s: &str) -> String {
    s.to_lowercase()
}

// === Element Attribute Helpers ===

/// Get element class attribute (empty string if missing)
#[inline]
#[must_use]
pub fn class(sel: &Selection) -> String {
    dom::class_name(sel).unwrap_or_default()
}

/// Get any attribute (empty string if missing)
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> String {
    dom::get_attribute(sel, name).unwrap_or_default()
}

/// Get tag name (empty string if missing)
#[inline]
#[must_use]
pub fn tag(sel: &Selection) -> String {
    dom::tag_name(sel).unwrap_or_default()
}

/// Trimmed, lowercased text content
#[must_use]
pub fn text_lower(sel: &Selection) -> String {
    lower(dom::text_content(sel).trim())
}

// === Element Type Checks ===

/// Check if element is one of the specified tags
///
/// # Example
///
/// ```rust
/// use jobscout::selector::utils;
/// use jobscout::dom;
///
/// let doc = dom::parse("<button>Apply</button>");
/// let button = doc.select("button");
///
/// assert!(utils::is_one_of_tags(&button, &["a", "button"]));
/// assert!(!utils::is_one_of_tags(&button, &["div", "span"]));
/// ```
#[inline]
#[must_use]
pub fn is_one_of_tags(sel: &Selection, tags: &[&str]) -> bool {
    let t = tag(sel);
    tags.contains(&t.as_str())
}
