//! Company name extraction.

use crate::dom::Document;
use crate::options::Options;
use crate::selector::{evaluate, ExtractionRule};
use crate::sites::Registry;

use super::{context, GenericRules};

/// Generic company cascade: `og:site_name`, generic selectors, then the
/// URL's domain label.
///
/// `og:site_name` is rejected only when it is exactly a platform brand, so
/// "Monster Energy" survives while "Monster" does not. Selector and domain
/// candidates are rejected when they mention a brand as a word, and the
/// domain step is suppressed on platform hosts.
#[must_use]
pub fn generic_rules(registry: &Registry, options: &Options) -> Vec<ExtractionRule> {
    let brands = registry.brands();
    let max_len = options.company_max_len.saturating_sub(1);
    let generic = registry.generic();

    let mut rules = vec![ExtractionRule::meta("og:site_name")
        .bounds(1, max_len)
        .reject_exact(&brands)];

    rules.extend(
        generic
            .company_selectors
            .iter()
            .map(|s| ExtractionRule::css(s))
            .chain(std::iter::once(ExtractionRule::url_domain()))
            .map(|rule| rule.bounds(1, max_len).block_words(&brands)),
    );

    rules
}

/// Extract the hiring company's name, or an empty string.
///
/// # Example
///
/// ```rust
/// use jobscout::dom;
/// use jobscout::extractor::{extract_company, GenericRules};
/// use jobscout::sites::Registry;
/// use jobscout::Options;
///
/// let registry = Registry::builtin();
/// let generic = GenericRules::new(&registry, &Options::default());
///
/// let doc = dom::parse(r#"<meta property="og:site_name" content="Acme Corp">"#);
/// assert_eq!(extract_company(&doc, "https://acme.example/jobs/1", &registry, &generic), "Acme Corp");
///
/// // Never attribute a job to the platform hosting it
/// let doc = dom::parse("<p>No company markup</p>");
/// assert_eq!(extract_company(&doc, "https://boards.greenhouse.io/x/jobs/1", &registry, &generic), "");
/// ```
#[must_use]
pub fn extract_company(doc: &Document, url: &str, registry: &Registry, generic: &GenericRules) -> String {
    let ctx = context(doc, url, registry);

    if let Some(profile) = registry.resolve(url) {
        let company = evaluate(&profile.company_rules, &ctx);
        if !company.is_empty() {
            log::debug!("company from {} profile: {company:?}", profile.name);
            return company;
        }
    }

    evaluate(&generic.company, &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    fn company(html: &str, url: &str) -> String {
        let registry = Registry::builtin();
        let generic = GenericRules::new(&registry, &Options::default());
        extract_company(&dom::parse(html), url, &registry, &generic)
    }

    #[test]
    fn test_og_site_name_first() {
        let html = r#"<head><meta property="og:site_name" content="Acme Corp"></head>
            <body><div class="company-name">Other Inc</div></body>"#;
        assert_eq!(company(html, "https://acme.example/jobs/1"), "Acme Corp");
    }

    #[test]
    fn test_platform_brand_site_name_is_skipped() {
        let html = r#"<head><meta property="og:site_name" content="Glassdoor"></head>
            <body><span class="employer">Initech</span></body>"#;
        assert_eq!(company(html, "https://acme.example/jobs/1"), "Initech");
    }

    #[test]
    fn test_site_name_containing_brand_word_is_kept() {
        let html = r#"<head><meta property="og:site_name" content="Monster Energy"></head>"#;
        assert_eq!(company(html, "https://careers.monsterenergy.com/jobs/7"), "Monster Energy");

        let html = r#"<head><meta property="og:site_name" content="Lever Brothers"></head>"#;
        assert_eq!(company(html, "https://careers.unilever.example/jobs/7"), "Lever Brothers");
    }

    #[test]
    fn test_selector_mentioning_brand_is_skipped() {
        let html = r#"<body><div class="company-name">Jobs at Lever</div></body>"#;
        assert_eq!(company(html, "https://careers.initech.com/jobs/1"), "Initech");
    }

    #[test]
    fn test_generic_selector_order() {
        let html = r#"<body>
            <div class="organization">Org Unit</div>
            <div class="hero-companyName">Hooli</div>
        </body>"#;
        assert_eq!(company(html, "https://acme.example/jobs/1"), "Hooli");
    }

    #[test]
    fn test_overlong_selector_text_falls_through() {
        let long = "x".repeat(150);
        let html = format!(r#"<body><div class="company-name">{long}</div></body>"#);
        assert_eq!(company(&html, "https://careers.initech.com/jobs/1"), "Initech");
    }

    #[test]
    fn test_domain_fallback_title_cases() {
        assert_eq!(company("<body></body>", "https://jobs.umbrella.co.uk/role/1"), "Umbrella");
    }

    #[test]
    fn test_platform_domain_yields_empty() {
        assert_eq!(company("<body></body>", "https://www.indeed.com/viewjob?jk=1"), "");
        assert_eq!(company("<body></body>", "https://jobs.lever.co/acme/1"), "");
    }

    #[test]
    fn test_site_rules_take_precedence() {
        let html = r#"<head><meta property="og:site_name" content="LinkedIn"></head>
            <body><div class="job-details-jobs-unified-top-card__company-name"><a>Globex</a></div></body>"#;
        assert_eq!(company(html, "https://www.linkedin.com/jobs/search/?currentJobId=1"), "Globex");
    }

    #[test]
    fn test_site_miss_falls_back_to_generic() {
        let html = r#"<body><span class="company">Vandelay Industries</span></body>"#;
        assert_eq!(company(html, "https://www.glassdoor.com/job-listing/x"), "Vandelay Industries");
    }
}
