//! Role title extraction.

use crate::dom::Document;
use crate::options::Options;
use crate::selector::{evaluate, ExtractionRule};
use crate::sites::Registry;

use super::{context, GenericRules};

/// Generic role cascade: `og:title`, generic selectors, then the first
/// segment of the page title.
///
/// `og:title` is often the listing page's own headline, so it is rejected
/// when it has "search" or "browse" as a word, or is exactly a platform
/// brand. Selector and title candidates must be longer than
/// [`Options::generic_role_min_len`].
#[must_use]
pub fn generic_rules(registry: &Registry, options: &Options) -> Vec<ExtractionRule> {
    let brands = registry.brands();
    let generic = registry.generic();
    let max_len = options.role_max_len.saturating_sub(1);
    let min_len = options.generic_role_min_len + 1;

    let mut rules = vec![ExtractionRule::meta("og:title")
        .bounds(1, max_len)
        .block_words(&generic.role_reject_words)
        .reject_exact(&brands)];

    rules.extend(
        generic
            .role_selectors
            .iter()
            .map(|s| ExtractionRule::css(s))
            .chain(std::iter::once(ExtractionRule::title_segment()))
            .map(|rule| rule.bounds(min_len, max_len).block_words(&brands)),
    );

    rules
}

/// Extract the role title, or an empty string.
///
/// # Example
///
/// ```rust
/// use jobscout::dom;
/// use jobscout::extractor::{extract_role, GenericRules};
/// use jobscout::sites::Registry;
/// use jobscout::Options;
///
/// let registry = Registry::builtin();
/// let generic = GenericRules::new(&registry, &Options::default());
///
/// let doc = dom::parse("<title>Senior Backend Engineer - Acme Corp | Jobs</title>");
/// assert_eq!(
///     extract_role(&doc, "https://acme.example/jobs/1", &registry, &generic),
///     "Senior Backend Engineer"
/// );
/// ```
#[must_use]
pub fn extract_role(doc: &Document, url: &str, registry: &Registry, generic: &GenericRules) -> String {
    let ctx = context(doc, url, registry);

    if let Some(profile) = registry.resolve(url) {
        let role = evaluate(&profile.role_rules, &ctx);
        if !role.is_empty() {
            log::debug!("role from {} profile: {role:?}", profile.name);
            return role;
        }
    }

    evaluate(&generic.role, &ctx)
}
