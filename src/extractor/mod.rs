//! Field Extractor
//!
//! Company and role extraction share one shape: the site profile's cascade
//! first, then a generic cascade built from the registry's generic profile
//! and the [`Options`] thresholds.
//!
//! - [`company`]: site rules, `og:site_name`, generic selectors, URL domain
//! - [`role`]: site rules, `og:title`, generic selectors, page title

pub mod company;
pub mod role;

use crate::dom::Document;
use crate::options::Options;
use crate::selector::{CascadeContext, ExtractionRule};
use crate::sites::Registry;

pub use company::extract_company;
pub use role::extract_role;

/// Generic cascades for pages without (or not satisfied by) a site profile.
///
/// Built once per registry/options pair so repeated detections don't
/// rebuild rule lists.
#[derive(Debug, Clone)]
pub struct GenericRules {
    /// Company fallback cascade.
    pub company: Vec<ExtractionRule>,
    /// Role fallback cascade.
    pub role: Vec<ExtractionRule>,
}

impl GenericRules {
    /// Build generic cascades from the registry's generic profile.
    #[must_use]
    pub fn new(registry: &Registry, options: &Options) -> Self {
        Self {
            company: company::generic_rules(registry, options),
            role: role::generic_rules(registry, options),
        }
    }
}

/// Cascade context for `url`, flagging platform-owned hosts.
fn context<'a>(doc: &'a Document, url: &'a str, registry: &Registry) -> CascadeContext<'a> {
    CascadeContext {
        platform_url: registry.is_platform_domain(url),
        ..CascadeContext::new(doc, url)
    }
}
