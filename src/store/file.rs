//! JSON document store on disk.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::{Application, ApplicationDraft, ApplicationPatch, ApplicationStore, Records, Settings};
use crate::error::{Error, Result};

/// Store backed by a single JSON file holding every application and the
/// settings.
///
/// Each write serializes the whole document to a temporary file in the same
/// directory and renames it over the target, so readers never see a
/// half-written file.
///
/// # Example
///
/// ```rust
/// use jobscout::store::{ApplicationDraft, ApplicationStore, JsonFileStore};
///
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("applications.json");
///
/// let mut store = JsonFileStore::open(&path)?;
/// store.create(ApplicationDraft {
///     company: "Acme Corp".to_string(),
///     job_url: "https://acme.example/careers/42".to_string(),
///     ..ApplicationDraft::default()
/// })?;
///
/// let reopened = JsonFileStore::open(&path)?;
/// assert_eq!(reopened.list().len(), 1);
/// # Ok::<(), jobscout::Error>(())
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: Records,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store; the file
    /// is only created on the first write.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the file exists but cannot be read, [`Error::Json`]
    /// if it is not a valid store document.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => Records::default(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(err) if err.kind() == ErrorKind::NotFound => Records::default(),
            Err(err) => return Err(err.into()),
        };

        log::debug!(
            "opened store {} with {} applications",
            path.display(),
            records.applications.len()
        );
        Ok(Self { path, records })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let content = serde_json::to_string_pretty(&self.records)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist(&self.path).map_err(|err| Error::Io(err.error))?;
        Ok(())
    }

    /// Run `change` on a copy of the records and keep it only if it saves.
    fn commit<T>(&mut self, change: impl FnOnce(&mut Records) -> Result<T>) -> Result<T> {
        let mut next = self.records.clone();
        let value = change(&mut next)?;
        let previous = std::mem::replace(&mut self.records, next);
        if let Err(err) = self.save() {
            log::warn!("failed to write {}: {err}", self.path.display());
            self.records = previous;
            return Err(err);
        }
        Ok(value)
    }
}

impl ApplicationStore for JsonFileStore {
    fn list(&self) -> &[Application] {
        &self.records.applications
    }

    fn create(&mut self, draft: ApplicationDraft) -> Result<Application> {
        self.commit(|records| Ok(records.create(draft)))
    }

    fn update(&mut self, id: &str, patch: ApplicationPatch) -> Result<Application> {
        self.commit(|records| records.update(id, patch))
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        if !self.records.applications.iter().any(|app| app.id == id) {
            return Ok(false);
        }
        self.commit(|records| Ok(records.delete(id)))
    }

    fn settings(&self) -> &Settings {
        &self.records.settings
    }

    fn save_settings(&mut self, settings: Settings) -> Result<()> {
        self.commit(|records| {
            records.settings = settings;
            Ok(())
        })
    }
}
