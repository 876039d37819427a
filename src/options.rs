//! Configuration options for job detection.
//!
//! The `Options` struct tunes the generic (non site-specific) heuristics.
//! Site-specific behaviour lives in the [`Registry`](crate::sites::Registry)
//! rule tables instead.

/// Configuration options for page classification and field extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use jobscout::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Require fewer keyword hits on generic pages
/// let options = Options {
///     keyword_threshold: 2,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Number of distinct job keywords the body text must contain for a page
    /// without a URL match to classify as a job listing.
    ///
    /// Default: `3`
    pub keyword_threshold: usize,

    /// Generic role candidates (selectors and page title) must be longer
    /// than this many characters.
    ///
    /// Default: `5`
    pub generic_role_min_len: usize,

    /// Generic role candidates must be shorter than this many characters.
    ///
    /// Default: `200`
    pub role_max_len: usize,

    /// Generic company candidates must be shorter than this many characters.
    ///
    /// Default: `100`
    pub company_max_len: usize,

    /// Treat a visible "apply" button or link as a job-page signal when the
    /// URL and keyword checks fail.
    ///
    /// Default: `true`
    pub detect_apply_elements: bool,

    /// Maximum number of body-text characters scanned for keywords.
    ///
    /// Default: `200000`
    pub body_text_limit: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            keyword_threshold: 3,
            generic_role_min_len: 5,
            role_max_len: 200,
            company_max_len: 100,
            detect_apply_elements: true,
            body_text_limit: 200_000,
        }
    }
}
