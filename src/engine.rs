//! Job Detection Engine
//!
//! Entry point tying the classifier and extractors together. A [`Detector`]
//! owns an immutable registry and options, so one instance can serve any
//! number of pages from any number of threads.

use crate::classifier;
use crate::dom::{self, Document};
use crate::extractor::{self, GenericRules};
use crate::options::Options;
use crate::result::JobDetails;
use crate::sites::Registry;

/// Classifies pages and extracts company/role from job listings.
#[derive(Debug, Clone)]
pub struct Detector {
    registry: Registry,
    options: Options,
    generic: GenericRules,
}

impl Detector {
    /// Detector over `registry` with `options`.
    #[must_use]
    pub fn new(registry: Registry, options: Options) -> Self {
        let generic = GenericRules::new(&registry, &options);
        Self {
            registry,
            options,
            generic,
        }
    }

    /// Built-in registry with custom options.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self::new(Registry::builtin(), options)
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Whether the page is a single job listing.
    #[must_use]
    pub fn is_job_page(&self, doc: &Document, url: &str) -> bool {
        classifier::is_job_page(doc, url, &self.registry, &self.options)
    }

    /// Company name, or `""`.
    #[must_use]
    pub fn extract_company(&self, doc: &Document, url: &str) -> String {
        extractor::extract_company(doc, url, &self.registry, &self.generic)
    }

    /// Role title, or `""`.
    #[must_use]
    pub fn extract_role(&self, doc: &Document, url: &str) -> String {
        extractor::extract_role(doc, url, &self.registry, &self.generic)
    }

    /// Parse `html` and run detection on it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jobscout::Detector;
    ///
    /// let html = r#"<html><head>
    ///     <title>Senior Backend Engineer - Acme Corp | Jobs</title>
    ///     <meta property="og:site_name" content="Acme Corp">
    /// </head><body></body></html>"#;
    ///
    /// let details = Detector::default().detect(html, "https://acme.example/careers/42");
    /// assert!(details.is_job_page);
    /// assert_eq!(details.company, "Acme Corp");
    /// assert_eq!(details.role, "Senior Backend Engineer");
    /// ```
    #[must_use]
    pub fn detect(&self, html: &str, url: &str) -> JobDetails {
        self.detect_document(&dom::parse(html), url)
    }

    /// Run detection on an already parsed document.
    ///
    /// Negative pages carry only the URL; extraction is skipped.
    #[must_use]
    pub fn detect_document(&self, doc: &Document, url: &str) -> JobDetails {
        if !self.is_job_page(doc, url) {
            log::debug!("{url}: not a job listing");
            return JobDetails::not_a_job(url);
        }

        let details = JobDetails {
            company: self.extract_company(doc, url),
            role: self.extract_role(doc, url),
            job_url: url.to_string(),
            is_job_page: true,
        };

        if details.needs_manual_input() {
            log::debug!(
                "{url}: partial extraction (company {:?}, role {:?})",
                details.company,
                details.role
            );
        }

        details
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new(Registry::builtin(), Options::default())
    }
}
