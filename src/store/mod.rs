//! Application Store
//!
//! Tracked job applications and user settings. Detection only ever produces
//! a draft ([`draft_from_details`]); records are created, edited and removed
//! through an [`ApplicationStore`].
//!
//! Two stores are provided:
//! - [`MemoryStore`]: in-process, for tests and embedding
//! - [`JsonFileStore`]: one JSON document on disk, replaced atomically on
//!   every write

mod file;
pub mod query;

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::result::JobDetails;

pub use file::JsonFileStore;
pub use query::{filter, Filter, Stats};

/// Where an application stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Applied,
    Interview,
    Rejected,
    Ghosted,
}

impl Status {
    /// Every status, in display order.
    pub const ALL: [Status; 4] = [Status::Applied, Status::Interview, Status::Rejected, Status::Ghosted];

    /// Stored identifier, e.g. `"interview"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Interview => "interview",
            Self::Rejected => "rejected",
            Self::Ghosted => "ghosted",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Interview => "Interview",
            Self::Rejected => "Rejected",
            Self::Ghosted => "Ghosted",
        }
    }

    /// Badge colour as a hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Applied => "#3b82f6",
            Self::Interview => "#10b981",
            Self::Rejected => "#ef4444",
            Self::Ghosted => "#6b7280",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::InvalidStatus(s.to_string()))
    }
}

/// A tracked job application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub company: String,
    pub role: String,
    pub job_url: String,
    pub status: Status,
    /// Serialized as `YYYY-MM-DD`.
    pub date_applied: NaiveDate,
    #[serde(default)]
    pub resume_version: String,
    #[serde(default)]
    pub notes: String,
    /// Epoch milliseconds.
    pub created_at: i64,
    /// Epoch milliseconds, bumped on every update.
    pub updated_at: i64,
}

impl Application {
    fn apply(&mut self, patch: ApplicationPatch, now: i64) {
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(job_url) = patch.job_url {
            self.job_url = job_url;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(date) = patch.date_applied {
            self.date_applied = date;
        }
        if let Some(resume_version) = patch.resume_version {
            self.resume_version = resume_version;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        self.updated_at = now;
    }
}

/// Input for [`ApplicationStore::create`].
///
/// `status` falls back to [`Settings::default_status`] and `date_applied` to
/// today (UTC).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationDraft {
    pub company: String,
    pub role: String,
    pub job_url: String,
    pub status: Option<Status>,
    pub date_applied: Option<NaiveDate>,
    pub resume_version: String,
    pub notes: String,
}

/// Partial update: `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationPatch {
    pub company: Option<String>,
    pub role: Option<String>,
    pub job_url: Option<String>,
    pub status: Option<Status>,
    pub date_applied: Option<NaiveDate>,
    pub resume_version: Option<String>,
    pub notes: Option<String>,
}

/// User preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Status given to new applications that don't specify one.
    pub default_status: Status,
}

/// Draft pre-filled from a detection result.
///
/// # Example
///
/// ```rust
/// use jobscout::store::{draft_from_details, Settings, Status};
/// use jobscout::JobDetails;
///
/// let details = JobDetails {
///     company: "Acme Corp".to_string(),
///     role: "Senior Backend Engineer".to_string(),
///     job_url: "https://acme.example/careers/42".to_string(),
///     is_job_page: true,
/// };
/// let settings = Settings { default_status: Status::Interview };
///
/// let draft = draft_from_details(&details, &settings);
/// assert_eq!(draft.company, "Acme Corp");
/// assert_eq!(draft.status, Some(Status::Interview));
/// ```
#[must_use]
pub fn draft_from_details(details: &JobDetails, settings: &Settings) -> ApplicationDraft {
    ApplicationDraft {
        company: details.company.clone(),
        role: details.role.clone(),
        job_url: details.job_url.clone(),
        status: Some(settings.default_status),
        ..ApplicationDraft::default()
    }
}

/// Persistence for applications and settings.
pub trait ApplicationStore {
    /// All applications in insertion order.
    fn list(&self) -> &[Application];

    /// Create a record from `draft` with a fresh id and timestamps.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] or [`Error::Json`] when the record cannot be persisted.
    fn create(&mut self, draft: ApplicationDraft) -> Result<Application>;

    /// Apply `patch` to the record with `id`, bumping `updated_at`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] for an unknown id, otherwise persistence errors.
    fn update(&mut self, id: &str, patch: ApplicationPatch) -> Result<Application>;

    /// Remove the record with `id`. Returns whether one was removed.
    ///
    /// # Errors
    ///
    /// Persistence errors only; a missing id is `Ok(false)`.
    fn delete(&mut self, id: &str) -> Result<bool>;

    /// The first record tracking exactly `url`.
    fn find_by_url(&self, url: &str) -> Option<&Application> {
        self.list().iter().find(|app| app.job_url == url)
    }

    fn settings(&self) -> &Settings;

    /// Replace the stored settings.
    ///
    /// # Errors
    ///
    /// Persistence errors.
    fn save_settings(&mut self, settings: Settings) -> Result<()>;
}

/// The document both stores hold: every application plus settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Records {
    pub(crate) applications: Vec<Application>,
    pub(crate) settings: Settings,
    #[serde(skip)]
    sequence: u64,
}

impl Records {
    fn next_id(&mut self, now: i64) -> String {
        loop {
            self.sequence += 1;
            let id = format!("{now}-{}", base36(self.sequence));
            if !self.applications.iter().any(|app| app.id == id) {
                return id;
            }
        }
    }

    pub(crate) fn create(&mut self, draft: ApplicationDraft) -> Application {
        let now = now_millis();
        let app = Application {
            id: self.next_id(now),
            company: draft.company,
            role: draft.role,
            job_url: draft.job_url,
            status: draft.status.unwrap_or(self.settings.default_status),
            date_applied: draft.date_applied.unwrap_or_else(|| Utc::now().date_naive()),
            resume_version: draft.resume_version,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        };
        log::debug!("created application {} for {:?}", app.id, app.job_url);
        self.applications.push(app.clone());
        app
    }

    pub(crate) fn update(&mut self, id: &str, patch: ApplicationPatch) -> Result<Application> {
        let app = self
            .applications
            .iter_mut()
            .find(|app| app.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        app.apply(patch, now_millis());
        Ok(app.clone())
    }

    pub(crate) fn delete(&mut self, id: &str) -> bool {
        let before = self.applications.len();
        self.applications.retain(|app| app.id != id);
        let removed = self.applications.len() != before;
        if removed {
            log::debug!("deleted application {id}");
        }
        removed
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

fn base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut out = Vec::new();
    loop {
        out.push(char::from(DIGITS[usize::try_from(n % 36).unwrap_or_default()]));
        n /= 36;
        if n == 0 {
            break;
        }
    }
    out.iter().rev().collect()
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Records,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ApplicationStore for MemoryStore {
    fn list(&self) -> &[Application] {
        &self.records.applications
    }

    fn create(&mut self, draft: ApplicationDraft) -> Result<Application> {
        Ok(self.records.create(draft))
    }

    fn update(&mut self, id: &str, patch: ApplicationPatch) -> Result<Application> {
        self.records.update(id, patch)
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        Ok(self.records.delete(id))
    }

    fn settings(&self) -> &Settings {
        &self.records.settings
    }

    fn save_settings(&mut self, settings: Settings) -> Result<()> {
        self.records.settings = settings;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(company: &str, url: &str) -> ApplicationDraft {
        ApplicationDraft {
            company: company.to_string(),
            role: "Engineer".to_string(),
            job_url: url.to_string(),
            ..ApplicationDraft::default()
        }
    }

    #[test]
    fn test_status_strings() {
        assert_eq!("Interview".parse::<Status>().ok(), Some(Status::Interview));
        assert_eq!(" ghosted ".parse::<Status>().ok(), Some(Status::Ghosted));
        assert!(matches!("hired".parse::<Status>(), Err(Error::InvalidStatus(_))));
        assert_eq!(Status::Rejected.to_string(), "rejected");
        assert_eq!(Status::Applied.color(), "#3b82f6");
        assert_eq!(Status::Ghosted.label(), "Ghosted");
    }

    #[test]
    fn test_base36() {
        assert_eq!(base36(0), "0");
        assert_eq!(base36(35), "z");
        assert_eq!(base36(36), "10");
    }

    #[test]
    fn test_create_fills_defaults() -> Result<()> {
        let mut store = MemoryStore::new();
        let app = store.create(draft("Acme", "https://acme.example/jobs/1"))?;

        assert_eq!(app.status, Status::Applied);
        assert_eq!(app.date_applied, Utc::now().date_naive());
        assert_eq!(app.created_at, app.updated_at);
        assert!(app.id.starts_with(&format!("{}-", app.created_at)));
        assert_eq!(store.list().len(), 1);
        Ok(())
    }

    #[test]
    fn test_create_uses_settings_default_status() -> Result<()> {
        let mut store = MemoryStore::new();
        store
            .save_settings(Settings {
                default_status: Status::Interview,
            })?;
        let app = store.create(draft("Acme", "https://acme.example/jobs/1"))?;
        assert_eq!(app.status, Status::Interview);
        Ok(())
    }

    #[test]
    fn test_ids_are_unique() -> Result<()> {
        let mut store = MemoryStore::new();
        let ids = (0..50)
            .map(|i| Ok(store.create(draft("Acme", &format!("https://acme.example/jobs/{i}")))?.id))
            .collect::<Result<Vec<String>>>()?;
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
        Ok(())
    }

    #[test]
    fn test_update_merges_patch() -> Result<()> {
        let mut store = MemoryStore::new();
        let app = store.create(draft("Acme", "https://acme.example/jobs/1"))?;

        let updated = store
            .update(
                &app.id,
                ApplicationPatch {
                    status: Some(Status::Rejected),
                    notes: Some("Polite no".to_string()),
                    ..ApplicationPatch::default()
                },
            )?;

        assert_eq!(updated.status, Status::Rejected);
        assert_eq!(updated.notes, "Polite no");
        assert_eq!(updated.company, "Acme");
        assert_eq!(updated.created_at, app.created_at);
        assert!(updated.updated_at >= app.updated_at);
        assert_eq!(store.list()[0], updated);
        Ok(())
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut store = MemoryStore::new();
        let err = store.update("nope", ApplicationPatch::default());
        assert!(matches!(err, Err(Error::NotFound(id)) if id == "nope"));
    }

    #[test]
    fn test_delete_reports_removal() -> Result<()> {
        let mut store = MemoryStore::new();
        let app = store.create(draft("Acme", "https://acme.example/jobs/1"))?;
        assert!(store.delete(&app.id)?);
        assert!(!store.delete(&app.id)?);
        assert!(store.list().is_empty());
        Ok(())
    }

    #[test]
    fn test_find_by_url_is_exact() -> Result<()> {
        let mut store = MemoryStore::new();
        store.create(draft("Acme", "https://acme.example/jobs/1"))?;
        assert!(store.find_by_url("https://acme.example/jobs/1").is_some());
        assert!(store.find_by_url("https://acme.example/jobs/1?ref=x").is_none());
        Ok(())
    }

    #[test]
    fn test_application_json_shape() -> Result<()> {
        let mut store = MemoryStore::new();
        let app = store.create(draft("Acme", "https://acme.example/jobs/1"))?;
        let json = serde_json::to_value(&app)?;
        assert_eq!(json["jobUrl"], "https://acme.example/jobs/1");
        assert_eq!(json["status"], "applied");
        assert!(json["dateApplied"].as_str().is_some_and(|d| d.len() == 10));
        Ok(())
    }
}
