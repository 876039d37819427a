//! Selector Infrastructure
//!
//! Two kinds of selector live here:
//!
//! - element [`Rule`]s: predicate functions over a single element, used to
//!   find things like apply buttons that a CSS selector can't express;
//! - the extraction cascade ([`ExtractionRule`], [`evaluate`]): ordered,
//!   data-driven strategies that turn a page into one field value.

use dom_query::Selection;

pub mod actions;
pub mod cascade;
pub mod utils;

pub use cascade::{evaluate, evaluate_traced, CascadeContext, ExtractionRule, Strategy};

/// A selector rule that tests if a selection matches certain criteria
pub type Rule = fn(&Selection) -> bool;

/// Query for first element matching the rule
///
/// Iterates through all descendants in document order and returns the first
/// element for which the rule returns true.
///
/// # Example
///
/// ```rust
/// use jobscout::selector::{self, utils};
/// use jobscout::dom;
///
/// let doc = dom::parse(r#"<div><p class="content">text</p></div>"#);
/// let root = doc.select("div");
///
/// fn has_content_class(sel: &dom_query::Selection) -> bool {
///     utils::class(sel).contains("content")
/// }
///
/// let result = selector::query(&root, has_content_class);
/// assert!(result.is_some());
/// ```
#[must_use]
pub fn query<'a>(root: &Selection<'a>, rule: Rule) -> Option<Selection<'a>> {
    // Iterate all descendants in document order
    for node in root.select("*").nodes() {
        let sel = Selection::from(*node);
        if rule(&sel) {
            return Some(sel);
        }
    }
    None
}

/// Query for the first element matching any of `rules`
///
/// Rules are tried in order; each gets a full document-order scan before the
/// next one is considered.
#[must_use]
pub fn query_any<'a>(root: &Selection<'a>, rules: &[Rule]) -> Option<Selection<'a>> {
    rules.iter().find_map(|rule| query(root, *rule))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn test_query_finds_first_match() {
        let doc = dom::parse(r#"
            <div>
                <p class="target">First</p>
                <p class="target">Second</p>
            </div>
        "#);
        let root = doc.select("div");

        fn is_target(sel: &Selection) -> bool {
            utils::class(sel).contains("target")
        }

        let result = query(&root, is_target).map(|s| dom::text_content(&s).to_string());
        assert_eq!(result.as_deref(), Some("First"));
    }

    #[test]
    fn test_query_returns_none_when_no_match() {
        let doc = dom::parse("<div><p>content</p></div>");
        let root = doc.select("div");

        fn never_matches(_sel: &Selection) -> bool {
            false
        }

        assert!(query(&root, never_matches).is_none());
    }

    #[test]
    fn test_query_any_respects_rule_order() {
        let doc = dom::parse(r#"
            <div>
                <span class="b">B first in document</span>
                <span class="a">A second in document</span>
            </div>
        "#);
        let root = doc.select("div");

        fn is_a(sel: &Selection) -> bool {
            utils::class(sel) == "a"
        }
        fn is_b(sel: &Selection) -> bool {
            utils::class(sel) == "b"
        }

        let found = query_any(&root, &[is_a, is_b]).map(|s| utils::class(&s));
        assert_eq!(found.as_deref(), Some("a"));
    }
}
