//! Result types for detection output.

use serde::{Deserialize, Serialize};

/// Outcome of running detection on one page snapshot.
///
/// Produced per page visit and never persisted directly; the caller turns it
/// into a draft application once the user confirms. Field names serialize in
/// camelCase (`jobUrl`, `isJobPage`) to match the messaging payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    /// Company name, normalized. Empty when nothing was found.
    pub company: String,

    /// Role title, normalized. Empty when nothing was found.
    pub role: String,

    /// The exact page URL at extraction time.
    pub job_url: String,

    /// Whether the page was classified as a single job listing.
    pub is_job_page: bool,
}

impl JobDetails {
    /// A negative classification for `url`: no fields extracted.
    #[must_use]
    pub fn not_a_job(url: &str) -> Self {
        Self {
            job_url: url.to_string(),
            ..Self::default()
        }
    }

    /// True when either field is empty and needs manual input.
    #[must_use]
    pub fn needs_manual_input(&self) -> bool {
        self.company.is_empty() || self.role.is_empty()
    }
}
