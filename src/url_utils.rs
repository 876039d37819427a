//! URL Utility Functions
//!
//! Parsing and host helpers used by the site registry, the classifier and the
//! company-from-domain fallback.

use url::Url;

/// Second-level labels that act as public suffixes under a country code
/// ("acme.co.uk" belongs to "acme", not "co").
const SECOND_LEVEL_SUFFIXES: &[&str] = &["co", "com", "org", "net", "ac", "gov", "edu", "ne", "or"];

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    // Must start with http:// or https://
    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) => {
            // Verify it has a host
            if url.host().is_some() {
                (true, Some(url))
            } else {
                (false, None)
            }
        }
        Err(_) => (false, None),
    }
}

/// Parse a URL string into a Url object.
///
/// # Returns
/// * `Some(Url)` if valid absolute URL, `None` otherwise
#[must_use]
pub fn parse_url(url_str: &str) -> Option<Url> {
    let (is_abs, parsed) = is_absolute_url(url_str);
    if is_abs {
        parsed
    } else {
        None
    }
}

/// Extract the lowercase hostname from a URL, without a leading `www.`.
#[must_use]
pub fn extract_hostname(url_str: &str) -> Option<String> {
    let url = parse_url(url_str)?;
    let host = url.host_str()?.trim_end_matches('.').to_ascii_lowercase();
    let host = host.strip_prefix("www.").map_or_else(|| host.clone(), str::to_string);
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// The registrable-domain label of a host: "careers.acme.com" -> "acme",
/// "jobs.acme.co.uk" -> "acme", "localhost" -> "localhost".
#[must_use]
pub fn domain_label(host: &str) -> Option<String> {
    let parts: Vec<&str> = host.split('.').filter(|p| !p.is_empty()).collect();

    let label = match parts.len() {
        0 => return None,
        1 | 2 => parts[0],
        n => {
            let tld = parts[n - 1];
            let second = parts[n - 2];
            if tld.len() == 2 && SECOND_LEVEL_SUFFIXES.contains(&second) {
                parts[n - 3]
            } else {
                second
            }
        }
    };

    // IP addresses have no meaningful label
    if label.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    Some(label.to_string())
}

/// Whether `host` is `domain` or one of its subdomains.
#[must_use]
pub fn host_matches_domain(host: &str, domain: &str) -> bool {
    let host = host.to_ascii_lowercase();
    let domain = domain.trim_start_matches('.').to_ascii_lowercase();
    host == domain || host.ends_with(&format!(".{domain}"))
}

/// Whether `needle` occurs in `host` starting at a label boundary, so
/// "indeed." matches "uk.indeed.com" but "linkedin.com" does not match
/// "notlinkedin.com".
#[must_use]
pub fn host_contains_label(host: &str, needle: &str) -> bool {
    let host = host.to_ascii_lowercase();
    let needle = needle.trim_start_matches('.').to_ascii_lowercase();
    if needle.is_empty() {
        return false;
    }
    host.match_indices(&needle)
        .any(|(start, _)| start == 0 || host[..start].ends_with('.'))
}

/// Whether the URL carries a non-empty query parameter `name`.
#[must_use]
pub fn has_query_param(url_str: &str, name: &str) -> bool {
    parse_url(url_str).is_some_and(|url| {
        url.query_pairs()
            .any(|(key, value)| key == name && !value.trim().is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://example.com/jobs").0);
        assert!(is_absolute_url("HTTP://EXAMPLE.COM").0);
        assert!(!is_absolute_url("/jobs/123").0);
        assert!(!is_absolute_url("").0);
        assert!(!is_absolute_url("chrome://extensions").0);
    }

    #[test]
    fn test_extract_hostname_strips_www() {
        assert_eq!(extract_hostname("https://www.Acme.com/jobs").as_deref(), Some("acme.com"));
        assert_eq!(extract_hostname("https://careers.acme.com").as_deref(), Some("careers.acme.com"));
        assert_eq!(extract_hostname("not a url"), None);
    }

    #[test]
    fn test_domain_label() {
        assert_eq!(domain_label("acme.com").as_deref(), Some("acme"));
        assert_eq!(domain_label("careers.acme.com").as_deref(), Some("acme"));
        assert_eq!(domain_label("jobs.acme.co.uk").as_deref(), Some("acme"));
        assert_eq!(domain_label("localhost").as_deref(), Some("localhost"));
        assert_eq!(domain_label("127.0.0.1"), None);
        assert_eq!(domain_label(""), None);
    }

    #[test]
    fn test_host_matches_domain() {
        assert!(host_matches_domain("linkedin.com", "linkedin.com"));
        assert!(host_matches_domain("uk.linkedin.com", "linkedin.com"));
        assert!(!host_matches_domain("notlinkedin.com", "linkedin.com"));
    }

    #[test]
    fn test_host_contains_label() {
        assert!(host_contains_label("linkedin.com", "linkedin.com"));
        assert!(host_contains_label("uk.indeed.com", "indeed."));
        assert!(host_contains_label("glassdoor.co.in", "Glassdoor."));
        assert!(!host_contains_label("notlinkedin.com", "linkedin.com"));
        assert!(!host_contains_label("myindeed.com", "indeed."));
        assert!(!host_contains_label("acme.com", ""));
    }

    #[test]
    fn test_has_query_param() {
        assert!(has_query_param("https://www.linkedin.com/jobs/search/?currentJobId=42", "currentJobId"));
        assert!(!has_query_param("https://www.linkedin.com/jobs/search/?currentJobId=", "currentJobId"));
        assert!(!has_query_param("https://www.linkedin.com/jobs/search/?keywords=rust", "currentJobId"));
        assert!(!has_query_param("garbage", "currentJobId"));
    }
}
