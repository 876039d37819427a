//! Selector Cascade Evaluator
//!
//! An ordered list of [`ExtractionRule`]s is evaluated first-match-wins: each
//! rule's strategy yields at most one raw candidate, the candidate is
//! normalized, and it is accepted iff it is non-empty, within the rule's
//! length bounds, not one of the rule's rejected values and free of its
//! blocked substrings and words. There is no scoring and no backtracking.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::normalize::{capitalize, char_len, normalize};
use crate::patterns::TITLE_DELIMITER;
use crate::url_utils;

const fn default_min_len() -> usize {
    1
}

const fn default_max_len() -> usize {
    200
}

/// How a rule produces its raw candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum Strategy {
    /// Text content of the first element matching `selector`.
    Css {
        /// CSS selector.
        selector: String,
    },
    /// Attribute value of the first element matching `selector`.
    Attribute {
        /// CSS selector.
        selector: String,
        /// Attribute to read, e.g. `title` or `aria-label`.
        attribute: String,
    },
    /// `content` of the `<meta>` tag whose property/name is `key`.
    Meta {
        /// e.g. `og:site_name`.
        key: String,
    },
    /// First segment of `<title>` split on `|` or a spaced dash.
    TitleSegment,
    /// Registrable domain label of the page URL, title-cased.
    UrlDomain,
}

/// One step of an extraction cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRule {
    /// Where the candidate comes from.
    #[serde(flatten)]
    pub strategy: Strategy,

    /// Minimum accepted length in characters (inclusive).
    #[serde(default = "default_min_len")]
    pub min_len: usize,

    /// Maximum accepted length in characters (inclusive).
    #[serde(default = "default_max_len")]
    pub max_len: usize,

    /// Case-insensitive values that disqualify a candidate equal to one.
    #[serde(default)]
    pub rejected: Vec<String>,

    /// Case-insensitive substrings that disqualify a candidate.
    #[serde(default)]
    pub blocked: Vec<String>,

    /// Case-insensitive whole words or phrases that disqualify a candidate.
    #[serde(default)]
    pub blocked_words: Vec<String>,
}

impl ExtractionRule {
    fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            min_len: default_min_len(),
            max_len: default_max_len(),
            rejected: Vec::new(),
            blocked: Vec::new(),
            blocked_words: Vec::new(),
        }
    }

    /// Text of the first element matching `selector`.
    #[must_use]
    pub fn css(selector: &str) -> Self {
        Self::new(Strategy::Css {
            selector: selector.to_string(),
        })
    }

    /// Attribute of the first element matching `selector`.
    #[must_use]
    pub fn attribute(selector: &str, attribute: &str) -> Self {
        Self::new(Strategy::Attribute {
            selector: selector.to_string(),
            attribute: attribute.to_string(),
        })
    }

    /// Content of a `<meta>` tag.
    #[must_use]
    pub fn meta(key: &str) -> Self {
        Self::new(Strategy::Meta { key: key.to_string() })
    }

    /// First segment of the page title.
    #[must_use]
    pub fn title_segment() -> Self {
        Self::new(Strategy::TitleSegment)
    }

    /// Title-cased domain label of the URL.
    #[must_use]
    pub fn url_domain() -> Self {
        Self::new(Strategy::UrlDomain)
    }

    /// Set inclusive length bounds.
    #[must_use]
    pub fn bounds(mut self, min_len: usize, max_len: usize) -> Self {
        self.min_len = min_len;
        self.max_len = max_len;
        self
    }

    /// Reject candidates equal to one of `values`, ignoring case.
    #[must_use]
    pub fn reject_exact<S: AsRef<str>>(mut self, values: &[S]) -> Self {
        self.rejected
            .extend(values.iter().map(|v| v.as_ref().to_string()));
        self
    }

    /// Add blocked substrings.
    #[must_use]
    pub fn block<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.blocked
            .extend(words.iter().map(|w| w.as_ref().to_string()));
        self
    }

    /// Add blocked whole words (e.g. platform brand names).
    #[must_use]
    pub fn block_words<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.blocked_words
            .extend(words.iter().map(|w| w.as_ref().to_string()));
        self
    }

    /// Normalize `raw` and apply this rule's bounds and blocklist.
    #[must_use]
    pub fn accept(&self, raw: &str) -> Option<String> {
        let candidate = normalize(raw);
        let len = char_len(&candidate);

        if candidate.is_empty() || len < self.min_len || len > self.max_len {
            log::trace!("rejected {candidate:?}: length {len} outside {}..={}", self.min_len, self.max_len);
            return None;
        }

        let lowered = candidate.to_lowercase();
        if self.rejected.iter().any(|v| normalize(v).to_lowercase() == lowered) {
            log::trace!("rejected {candidate:?}: exact match");
            return None;
        }

        if let Some(word) = self
            .blocked
            .iter()
            .find(|w| !w.is_empty() && lowered.contains(&w.to_lowercase()))
        {
            log::trace!("rejected {candidate:?}: contains blocked {word:?}");
            return None;
        }

        if let Some(word) = self
            .blocked_words
            .iter()
            .find(|w| contains_word(&lowered, &w.to_lowercase()))
        {
            log::trace!("rejected {candidate:?}: mentions {word:?}");
            return None;
        }

        Some(candidate)
    }

    /// Raw candidate produced by this rule's strategy, before normalization.
    #[must_use]
    pub fn candidate(&self, ctx: &CascadeContext<'_>) -> Option<String> {
        match &self.strategy {
            Strategy::Css { selector } => {
                dom::query_first(ctx.doc, selector).map(|sel| dom::text_content(&sel).to_string())
            }
            Strategy::Attribute { selector, attribute } => {
                dom::query_first(ctx.doc, selector).and_then(|sel| dom::get_attribute(&sel, attribute))
            }
            Strategy::Meta { key } => dom::meta_content(ctx.doc, key),
            Strategy::TitleSegment => {
                let title = dom::title_text(ctx.doc);
                TITLE_DELIMITER
                    .split(&title)
                    .next()
                    .map(str::to_string)
            }
            Strategy::UrlDomain => {
                if ctx.platform_url {
                    return None;
                }
                url_utils::extract_hostname(ctx.url)
                    .and_then(|host| url_utils::domain_label(&host))
                    .map(|label| capitalize(&label))
            }
        }
    }

    /// Check bounds and selector syntax.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidProfile`] for inverted bounds,
    /// [`Error::InvalidSelector`] for selectors that do not compile.
    pub fn validate(&self) -> Result<()> {
        if self.min_len > self.max_len {
            return Err(Error::InvalidProfile(format!(
                "rule {:?} has min_len {} > max_len {}",
                self.strategy, self.min_len, self.max_len
            )));
        }

        match &self.strategy {
            Strategy::Css { selector } | Strategy::Attribute { selector, .. } => {
                dom::check_selector(selector).map_err(|reason| Error::InvalidSelector {
                    selector: selector.clone(),
                    reason,
                })
            }
            Strategy::Meta { key } if key.trim().is_empty() => {
                Err(Error::InvalidProfile("meta rule with empty key".to_string()))
            }
            _ => Ok(()),
        }
    }
}

/// Whether `phrase` occurs in `haystack` bounded by non-alphanumerics.
///
/// Both arguments are expected lowercase.
fn contains_word(haystack: &str, phrase: &str) -> bool {
    let phrase = phrase.trim();
    if phrase.is_empty() {
        return false;
    }
    haystack.match_indices(phrase).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// The page snapshot a cascade runs against.
#[derive(Clone, Copy)]
pub struct CascadeContext<'a> {
    /// Parsed document.
    pub doc: &'a Document,
    /// Page URL at extraction time.
    pub url: &'a str,
    /// The URL belongs to a known job platform; domain-derived candidates
    /// are suppressed so a job is never attributed to the platform itself.
    pub platform_url: bool,
}

impl<'a> CascadeContext<'a> {
    /// Context for `doc` at `url`.
    #[must_use]
    pub fn new(doc: &'a Document, url: &'a str) -> Self {
        Self {
            doc,
            url,
            platform_url: false,
        }
    }
}

impl fmt::Debug for CascadeContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CascadeContext")
            .field("url", &self.url)
            .field("platform_url", &self.platform_url)
            .finish_non_exhaustive()
    }
}

/// Evaluate `rules` in order and return the first accepted candidate, or an
/// empty string when no rule yields one.
///
/// # Example
///
/// ```rust
/// use jobscout::dom;
/// use jobscout::selector::{evaluate, CascadeContext, ExtractionRule};
///
/// let doc = dom::parse(r#"<h2 class="employer">  Acme&nbsp;Corp </h2>"#);
/// let rules = [
///     ExtractionRule::css(".company-name"),
///     ExtractionRule::css(".employer").block(&["LinkedIn"]),
/// ];
///
/// let ctx = CascadeContext::new(&doc, "https://acme.example/jobs/1");
/// assert_eq!(evaluate(&rules, &ctx), "Acme Corp");
/// ```
#[must_use]
pub fn evaluate(rules: &[ExtractionRule], ctx: &CascadeContext<'_>) -> String {
    evaluate_traced(rules, ctx)
        .map(|(_, value)| value)
        .unwrap_or_default()
}

/// Like [`evaluate`], but also reports the index of the winning rule.
#[must_use]
pub fn evaluate_traced(rules: &[ExtractionRule], ctx: &CascadeContext<'_>) -> Option<(usize, String)> {
    for (index, rule) in rules.iter().enumerate() {
        let Some(raw) = rule.candidate(ctx) else {
            continue;
        };
        if let Some(value) = rule.accept(&raw) {
            log::debug!("cascade rule {index} ({:?}) produced {value:?}", rule.strategy);
            return Some((index, value));
        }
    }
    None
}
