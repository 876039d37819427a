//! Site Profile Registry
//!
//! Maps page URLs to site-specific extraction rules. Everything here is data:
//! adding or fixing a job board means editing a rule table, either the
//! built-in one in [`builtin`] or a JSON table passed to
//! [`Registry::from_json`].
//!
//! A registry is immutable once built and safe to share across threads.

pub mod builtin;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::patterns::{COMPANY_SELECTORS, ROLE_REJECT_WORDS, ROLE_SELECTORS};
use crate::selector::ExtractionRule;
use crate::url_utils;

/// How a profile recognises its URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlMatcher {
    /// Hostname contains this text starting at a label boundary
    /// (case-insensitive), e.g. `linkedin.com` or `indeed.`.
    HostContains(String),
    /// Regex matched against the full URL.
    UrlRegex(String),
}

/// A data-driven classification predicate that replaces the generic
/// classifier for one site.
///
/// The page qualifies iff every required query parameter is present and
/// non-empty, every required selector matches, and (when `any_of_selectors`
/// is non-empty) at least one of those matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageGuard {
    /// Query parameters that must be present, e.g. `currentJobId`.
    #[serde(default)]
    pub required_params: Vec<String>,

    /// Selectors that must all match. A comma list inside one entry means
    /// "any of these".
    #[serde(default)]
    pub required_selectors: Vec<String>,

    /// At least one must match.
    #[serde(default)]
    pub any_of_selectors: Vec<String>,
}

impl PageGuard {
    /// Evaluate the guard against a page.
    #[must_use]
    pub fn check(&self, doc: &Document, url: &str) -> bool {
        if let Some(missing) = self
            .required_params
            .iter()
            .find(|param| !url_utils::has_query_param(url, param))
        {
            log::debug!("guard: query parameter {missing:?} missing");
            return false;
        }

        if let Some(missing) = self
            .required_selectors
            .iter()
            .find(|selector| !dom::exists(doc, selector))
        {
            log::debug!("guard: required element {missing:?} missing");
            return false;
        }

        if !self.any_of_selectors.is_empty()
            && !self.any_of_selectors.iter().any(|selector| dom::exists(doc, selector))
        {
            log::debug!("guard: none of {:?} present", self.any_of_selectors);
            return false;
        }

        true
    }

    fn selectors(&self) -> impl Iterator<Item = &String> {
        self.required_selectors.iter().chain(&self.any_of_selectors)
    }
}

/// Extraction and classification rules for one job board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    /// Human-readable name, e.g. "linkedin".
    pub name: String,

    /// Which URLs this profile applies to.
    pub matcher: UrlMatcher,

    /// Ordered company cascade.
    #[serde(default)]
    pub company_rules: Vec<ExtractionRule>,

    /// Ordered role cascade.
    #[serde(default)]
    pub role_rules: Vec<ExtractionRule>,

    /// Replaces the generic classifier when present.
    #[serde(default)]
    pub guard: Option<PageGuard>,
}

/// Selector lists and reject words for pages without a site profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericProfile {
    /// Company selectors in priority order.
    #[serde(default = "default_company_selectors")]
    pub company_selectors: Vec<String>,

    /// Role selectors in priority order.
    #[serde(default = "default_role_selectors")]
    pub role_selectors: Vec<String>,

    /// Words that disqualify an `og:title` as a role (listing/search pages).
    #[serde(default = "default_role_reject_words")]
    pub role_reject_words: Vec<String>,
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn default_company_selectors() -> Vec<String> {
    to_strings(COMPANY_SELECTORS)
}

fn default_role_selectors() -> Vec<String> {
    to_strings(ROLE_SELECTORS)
}

fn default_role_reject_words() -> Vec<String> {
    to_strings(ROLE_REJECT_WORDS)
}

impl Default for GenericProfile {
    fn default() -> Self {
        Self {
            company_selectors: default_company_selectors(),
            role_selectors: default_role_selectors(),
            role_reject_words: default_role_reject_words(),
        }
    }
}

/// A job platform whose own name and domain must never be reported as the
/// hiring company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Registrable domain, e.g. `linkedin.com`. Subdomains match too.
    pub domain: String,
    /// Brand name, e.g. `LinkedIn`.
    pub brand: String,
}

/// The serialized form of a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryTable {
    /// Site profiles, first match wins.
    #[serde(default)]
    pub profiles: Vec<SiteProfile>,

    /// Fallback selectors for unprofiled pages.
    #[serde(default)]
    pub generic: GenericProfile,

    /// Known job platforms.
    #[serde(default)]
    pub platforms: Vec<Platform>,
}

impl RegistryTable {
    /// Check every profile, rule and selector.
    ///
    /// # Errors
    ///
    /// The first structural problem found: empty names, inverted bounds,
    /// selectors or URL regexes that do not compile.
    pub fn validate(&self) -> Result<()> {
        for profile in &self.profiles {
            if profile.name.trim().is_empty() {
                return Err(Error::InvalidProfile("profile with empty name".to_string()));
            }

            match &profile.matcher {
                UrlMatcher::HostContains(host) if host.trim().is_empty() => {
                    return Err(Error::InvalidProfile(format!(
                        "profile {:?} has an empty host matcher",
                        profile.name
                    )));
                }
                UrlMatcher::UrlRegex(pattern) => {
                    Regex::new(pattern)?;
                }
                UrlMatcher::HostContains(_) => {}
            }

            for rule in profile.company_rules.iter().chain(&profile.role_rules) {
                rule.validate()?;
            }

            if let Some(guard) = &profile.guard {
                for selector in guard.selectors() {
                    check_selector(selector)?;
                }
            }
        }

        for selector in self
            .generic
            .company_selectors
            .iter()
            .chain(&self.generic.role_selectors)
        {
            check_selector(selector)?;
        }

        if let Some(platform) = self.platforms.iter().find(|p| p.domain.trim().is_empty()) {
            return Err(Error::InvalidProfile(format!(
                "platform {:?} has an empty domain",
                platform.brand
            )));
        }

        Ok(())
    }
}

fn check_selector(selector: &str) -> Result<()> {
    dom::check_selector(selector).map_err(|reason| Error::InvalidSelector {
        selector: selector.to_string(),
        reason,
    })
}

/// Resolves URLs to site profiles and answers platform-domain questions.
#[derive(Debug, Clone)]
pub struct Registry {
    table: RegistryTable,
    /// Compiled `UrlRegex` matchers, parallel to `table.profiles`.
    patterns: Vec<Option<Regex>>,
}

impl Registry {
    /// Build a registry from a validated table.
    ///
    /// # Errors
    ///
    /// See [`RegistryTable::validate`].
    pub fn new(table: RegistryTable) -> Result<Self> {
        table.validate()?;
        Ok(Self::assemble(table))
    }

    /// Load a registry from a JSON rule table.
    ///
    /// # Errors
    ///
    /// [`Error::Json`] for malformed JSON, otherwise see
    /// [`RegistryTable::validate`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use jobscout::sites::Registry;
    ///
    /// let registry = Registry::from_json(r#"{
    ///     "profiles": [{
    ///         "name": "acme-board",
    ///         "matcher": {"host_contains": "jobs.acme.example"},
    ///         "company_rules": [{"strategy": "css", "selector": ".org"}],
    ///         "role_rules": [{"strategy": "css", "selector": "h2.role", "min_len": 4}]
    ///     }],
    ///     "platforms": [{"domain": "acme.example", "brand": "Acme Jobs"}]
    /// }"#)?;
    ///
    /// assert!(registry.resolve("https://jobs.acme.example/1").is_some());
    /// # Ok::<(), jobscout::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let table: RegistryTable = serde_json::from_str(json)?;
        Self::new(table)
    }

    /// The built-in table of known job boards.
    #[must_use]
    pub fn builtin() -> Self {
        Self::assemble(builtin::table())
    }

    fn assemble(table: RegistryTable) -> Self {
        let patterns = table
            .profiles
            .iter()
            .map(|profile| match &profile.matcher {
                UrlMatcher::UrlRegex(pattern) => match Regex::new(pattern) {
                    Ok(regex) => Some(regex),
                    Err(err) => {
                        log::warn!("profile {:?}: URL pattern ignored: {err}", profile.name);
                        None
                    }
                },
                UrlMatcher::HostContains(_) => None,
            })
            .collect();

        Self { table, patterns }
    }

    /// The first profile whose matcher accepts `url`.
    #[must_use]
    pub fn resolve(&self, url: &str) -> Option<&SiteProfile> {
        let host = url_utils::extract_hostname(url)?;

        self.table
            .profiles
            .iter()
            .zip(&self.patterns)
            .find(|(profile, pattern)| match &profile.matcher {
                UrlMatcher::HostContains(needle) => url_utils::host_contains_label(&host, needle),
                UrlMatcher::UrlRegex(_) => pattern.as_ref().is_some_and(|re| re.is_match(url)),
            })
            .map(|(profile, _)| profile)
    }

    /// The platform owning `url`'s host, if any.
    #[must_use]
    pub fn platform_for(&self, url: &str) -> Option<&Platform> {
        let host = url_utils::extract_hostname(url)?;
        self.table
            .platforms
            .iter()
            .find(|platform| url_utils::host_matches_domain(&host, &platform.domain))
    }

    /// Whether `url` is hosted on a known job platform.
    #[must_use]
    pub fn is_platform_domain(&self, url: &str) -> bool {
        self.platform_for(url).is_some()
    }

    /// Brand names of all known platforms.
    #[must_use]
    pub fn brands(&self) -> Vec<&str> {
        self.table.platforms.iter().map(|p| p.brand.as_str()).collect()
    }

    /// Fallback selectors for unprofiled pages.
    #[must_use]
    pub fn generic(&self) -> &GenericProfile {
        &self.table.generic
    }

    /// All profiles in resolution order.
    #[must_use]
    pub fn profiles(&self) -> &[SiteProfile] {
        &self.table.profiles
    }

    /// The underlying table, e.g. for writing it back out as JSON.
    #[must_use]
    pub fn table(&self) -> &RegistryTable {
        &self.table
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
