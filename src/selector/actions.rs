//! Apply-Action Selectors
//!
//! Element rules recognising an "apply" button or link, used by the generic
//! classifier as a last-resort job-page signal.

use dom_query::Selection;

use crate::selector::utils::{attr, class, contains_ignore_case, is_one_of_tags, lower, text_lower};
use crate::selector::Rule;

/// Longest button/link text still treated as an apply action.
const MAX_ACTION_TEXT: usize = 40;

/// Apply-action rules (in priority order)
pub static APPLY_ACTION: &[Rule] = &[apply_action_rule_1, apply_action_rule_2];

/// Rule 1: button or link whose class names an apply action
///
/// Tags: a, button
/// Patterns: class contains "apply" (e.g. "jobs-apply-button", "applyBtn")
#[must_use]
pub fn apply_action_rule_1(sel: &Selection) -> bool {
    is_one_of_tags(sel, &["a", "button"]) && contains_ignore_case(&class(sel), "apply")
}

/// Rule 2: short button, link or submit input labelled "Apply ..."
///
/// Tags: a, button, input[type=submit|button]
#[must_use]
pub fn apply_action_rule_2(sel: &Selection) -> bool {
    if is_one_of_tags(sel, &["a", "button"]) {
        let text = text_lower(sel);
        return text.starts_with("apply") && text.chars().count() <= MAX_ACTION_TEXT;
    }

    if is_one_of_tags(sel, &["input"]) {
        let kind = lower(&attr(sel, "type"));
        let value = lower(attr(sel, "value").trim());
        return matches!(kind.as_str(), "submit" | "button") && value.starts_with("apply");
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use crate::selector;

    #[test]
    fn test_rule_1_matches_apply_class() {
        let doc = dom::parse(r#"<div><button class="jobs-apply-button">Go</button></div>"#);
        let root = doc.select("div");
        assert!(selector::query(&root, apply_action_rule_1).is_some());

        let doc = dom::parse(r#"<div><span class="apply">Go</span></div>"#);
        let root = doc.select("div");
        assert!(selector::query(&root, apply_action_rule_1).is_none());
    }

    #[test]
    fn test_rule_2_matches_apply_text() {
        let doc = dom::parse(r#"<div><a href="/x">Apply for this job</a></div>"#);
        let root = doc.select("div");
        assert!(selector::query(&root, apply_action_rule_2).is_some());

        let doc = dom::parse(r#"<div><input type="submit" value="Apply"></div>"#);
        let root = doc.select("div");
        assert!(selector::query(&root, apply_action_rule_2).is_some());
    }

    #[test]
    fn test_rule_2_ignores_long_or_unrelated_text() {
        let doc = dom::parse(
            r#"<div><a>Applying to college: a complete guide for students and parents everywhere</a><button>Subscribe</button></div>"#,
        );
        let root = doc.select("div");
        assert!(selector::query(&root, apply_action_rule_2).is_none());
    }
}
