//! Compiled regex patterns and fixed word lists for detection.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! Patterns are organized by their purpose in the detection pipeline.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Matches the fixed set of HTML entities decoded before character filtering.
pub static HTML_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(nbsp|amp|lt|gt|quot|apos|ndash|mdash|#39|#34);").expect("HTML_ENTITY regex")
});

/// Matches zero-width, bidi-control and non-whitespace control characters.
///
/// Tab, newline, vertical tab, form feed and carriage return are left alone so
/// they collapse into a single space instead of gluing words together.
pub static INVISIBLE_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x00-\x08\x0E-\x1F\x7F\u{00AD}\u{200B}-\u{200F}\u{202A}-\u{202E}\u{2060}\u{FEFF}]")
        .expect("INVISIBLE_CHARS regex")
});

/// Matches any character outside the allowed set: word characters,
/// whitespace and `& . , ( ) -`.
pub static DISALLOWED_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\w\s&.,()\-]").expect("DISALLOWED_CHARS regex")
});

// =============================================================================
// Title Patterns
// =============================================================================

/// Separators between a job title and the site/company suffix in `<title>`.
///
/// A pipe always splits; a dash only splits when surrounded by spaces so that
/// "Full-Stack Developer" stays in one piece.
pub static TITLE_DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+[-–—]\s+|\|").expect("TITLE_DELIMITER regex")
});

// =============================================================================
// Classification Patterns
// =============================================================================

/// URL shapes that identify a job listing without looking at the page.
pub static JOB_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(linkedin\.com/jobs|indeed\.com/viewjob|glassdoor\.com/job|naukri\.com/job-listings|instahyre\.com/candidate/opportunities|angel(?:list|\.co)(?:\.com)?/jobs|wellfound\.com/jobs|/jobs/|/careers/|/job/|/career/|/apply)",
    )
    .expect("JOB_URL regex")
});

/// Phrases whose presence in body text suggests a job listing.
pub const JOB_KEYWORDS: &[&str] = &[
    "apply now",
    "submit application",
    "job description",
    "job details",
    "responsibilities",
    "qualifications",
    "requirements",
    "about the role",
    "position overview",
];

// =============================================================================
// Generic Extraction Selectors
// =============================================================================

/// Generic company-name selectors (in priority order).
pub const COMPANY_SELECTORS: &[&str] = &[
    r#"[class*="company-name"]"#,
    r#"[class*="companyName"]"#,
    r#"[data-test*="company"]"#,
    r#"[class*="employer"]"#,
    ".company",
    r#"[class*="organization"]"#,
];

/// Generic role-title selectors (in priority order).
pub const ROLE_SELECTORS: &[&str] = &[
    r#"[class*="job-title"]"#,
    r#"[class*="jobTitle"]"#,
    r#"[data-test*="job-title"]"#,
    r#"[class*="position"]"#,
    r#"h1[class*="title"]"#,
    "h1",
];

/// Words that mark an `og:title` as a listing/search page rather than a role.
pub const ROLE_REJECT_WORDS: &[&str] = &["search", "browse"];
