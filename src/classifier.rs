//! Page Classifier
//!
//! Decides whether a page is a single job listing. Only absolute http(s)
//! URLs qualify. A matching site profile with a guard decides alone;
//! otherwise the generic checks run in order: URL shape, keyword density,
//! then an apply button or link.

use crate::dom::{self, Document};
use crate::options::Options;
use crate::patterns::{JOB_KEYWORDS, JOB_URL, WHITESPACE_NORMALIZE};
use crate::selector::{self, actions::APPLY_ACTION};
use crate::sites::Registry;
use crate::url_utils;

/// Whether `doc` at `url` is a job listing.
#[must_use]
pub fn is_job_page(doc: &Document, url: &str, registry: &Registry, options: &Options) -> bool {
    if url_utils::parse_url(url).is_none() {
        log::debug!("not classifying {url:?}: not an absolute http(s) URL");
        return false;
    }

    if let Some(guard) = registry.resolve(url).and_then(|profile| profile.guard.as_ref()) {
        let verdict = guard.check(doc, url);
        log::debug!("classified {url} by site guard: {verdict}");
        return verdict;
    }

    if JOB_URL.is_match(url) {
        log::debug!("classified {url} by URL pattern");
        return true;
    }

    let hits = keyword_hits(doc, options);
    if hits >= options.keyword_threshold {
        log::debug!("classified {url} by {hits} keyword hits");
        return true;
    }

    if options.detect_apply_elements && has_apply_action(doc) {
        log::debug!("classified {url} by apply action");
        return true;
    }

    false
}

/// Number of distinct job keywords present in the body text.
#[must_use]
pub fn keyword_hits(doc: &Document, options: &Options) -> usize {
    let body = dom::body_text(doc);
    let scanned: String = body.chars().take(options.body_text_limit).collect();
    let text = WHITESPACE_NORMALIZE.replace_all(&scanned, " ").to_lowercase();

    if text.trim().is_empty() {
        return 0;
    }

    JOB_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .count()
}

/// Whether the body holds a button or link that starts an application.
#[must_use]
pub fn has_apply_action(doc: &Document) -> bool {
    let body = doc.select("body");
    selector::query_any(&body, APPLY_ACTION).is_some()
}
