//! # jobscout
//!
//! Job-listing page detection and company/role extraction for job
//! application tracking.
//!
//! Given a page's HTML and URL, jobscout decides whether the page is a single
//! job listing and, if so, extracts the hiring company and the role title
//! using ordered cascades of site-specific selectors, generic selectors,
//! metadata tags and URL/title heuristics.
//!
//! ## Quick Start
//!
//! ```rust
//! use jobscout::detect;
//!
//! let html = r#"<html><head>
//!     <title>Senior Backend Engineer - Acme Corp | Jobs</title>
//!     <meta property="og:site_name" content="Acme Corp">
//! </head><body><button class="apply-btn">Apply now</button></body></html>"#;
//!
//! let details = detect(html, "https://acme.example/careers/backend");
//! assert!(details.is_job_page);
//! assert_eq!(details.company, "Acme Corp");
//! assert_eq!(details.role, "Senior Backend Engineer");
//! ```
//!
//! ## Features
//!
//! - **Classification**: site guards, URL shapes, keyword density, apply buttons
//! - **Extraction**: first-match-wins cascades, never attributing a job to the
//!   platform hosting it
//! - **Data-driven sites**: per-board rules in a registry loadable from JSON
//! - **Tracking**: application records, dashboard queries, a per-tab detection
//!   cache and SPA re-detection helpers
//!
//! Detection never fails. A field that cannot be found is an empty string,
//! which callers should treat as "needs manual input".

use std::sync::LazyLock;

mod engine;
mod error;
mod options;
mod patterns;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Text cleaning applied to every extracted candidate.
pub mod normalize;

/// Selector cascades and predicate rules.
pub mod selector;

/// Site profile registry and the built-in rule table.
pub mod sites;

/// Job-page classification.
pub mod classifier;

/// Company and role extraction.
pub mod extractor;

/// URL parsing, hostnames and domain labels.
pub mod url_utils;

/// Tracked job applications and their persistence.
pub mod store;

/// Per-tab cache of detection results.
pub mod cache;

/// Re-detection scheduling for single-page applications.
pub mod watch;

// Public API - re-exports
pub use engine::Detector;
pub use error::{Error, Result};
pub use options::Options;
pub use result::JobDetails;
pub use sites::Registry;

static DEFAULT_DETECTOR: LazyLock<Detector> = LazyLock::new(Detector::default);

/// Detects and extracts a job listing using the built-in registry and
/// default options.
///
/// # Example
///
/// ```rust
/// use jobscout::detect;
///
/// let details = detect("<html><body><p>Weekend recipes</p></body></html>", "https://acme.example/blog");
/// assert!(!details.is_job_page);
/// assert!(details.company.is_empty() && details.role.is_empty());
/// ```
#[must_use]
pub fn detect(html: &str, url: &str) -> JobDetails {
    DEFAULT_DETECTOR.detect(html, url)
}

/// Detects and extracts a job listing with custom options.
///
/// Builds a fresh [`Detector`]; keep one around when detecting many pages
/// with the same options.
///
/// # Example
///
/// ```rust
/// use jobscout::{detect_with_options, Options};
///
/// let html = "<body><p>Responsibilities</p><p>Qualifications</p></body>";
/// let options = Options {
///     keyword_threshold: 2,
///     ..Options::default()
/// };
/// assert!(detect_with_options(html, "https://acme.example/post", &options).is_job_page);
/// ```
#[must_use]
pub fn detect_with_options(html: &str, url: &str, options: &Options) -> JobDetails {
    Detector::with_options(options.clone()).detect(html, url)
}
