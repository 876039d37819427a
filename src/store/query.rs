//! Dashboard queries over stored applications.

use serde::{Deserialize, Serialize};

use super::{Application, Status};

/// Status and free-text filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// `None` keeps every status.
    pub status: Option<Status>,
    /// Case-insensitive substring of company or role. Blank keeps everything.
    pub search: String,
}

impl Filter {
    fn matches(&self, app: &Application, needle: &str) -> bool {
        let status_ok = self.status.is_none_or(|status| app.status == status);
        let search_ok = needle.is_empty()
            || app.company.to_lowercase().contains(needle)
            || app.role.to_lowercase().contains(needle);
        status_ok && search_ok
    }
}

/// Applications matching `filter`, newest first.
///
/// # Example
///
/// ```rust
/// use jobscout::store::{filter, ApplicationDraft, ApplicationStore, Filter, MemoryStore, Status};
///
/// let mut store = MemoryStore::new();
/// store.create(ApplicationDraft { company: "Acme Corp".into(), role: "Backend Engineer".into(), ..Default::default() })?;
/// store.create(ApplicationDraft { company: "Initech".into(), role: "QA Lead".into(), ..Default::default() })?;
///
/// let hits = filter(store.list(), &Filter { status: Some(Status::Applied), search: " backend ".into() });
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].company, "Acme Corp");
/// # Ok::<(), jobscout::Error>(())
/// ```
#[must_use]
pub fn filter<'a>(apps: &'a [Application], filter: &Filter) -> Vec<&'a Application> {
    let needle = filter.search.trim().to_lowercase();
    let mut hits: Vec<&Application> = apps.iter().filter(|app| filter.matches(app, &needle)).collect();
    hits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    hits
}

/// Per-status counts for the dashboard header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total: usize,
    pub applied: usize,
    pub interview: usize,
    pub rejected: usize,
    pub ghosted: usize,
}

impl Stats {
    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::Applied => self.applied,
            Status::Interview => self.interview,
            Status::Rejected => self.rejected,
            Status::Ghosted => self.ghosted,
        }
    }
}

impl<'a> FromIterator<&'a Application> for Stats {
    fn from_iter<I: IntoIterator<Item = &'a Application>>(apps: I) -> Self {
        apps.into_iter().fold(Self::default(), |mut stats, app| {
            stats.total += 1;
            match app.status {
                Status::Applied => stats.applied += 1,
                Status::Interview => stats.interview += 1,
                Status::Rejected => stats.rejected += 1,
                Status::Ghosted => stats.ghosted += 1,
            }
            stats
        })
    }
}

impl From<&[Application]> for Stats {
    fn from(apps: &[Application]) -> Self {
        apps.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn app(id: &str, company: &str, role: &str, status: Status, created_at: i64) -> Application {
        Application {
            id: id.to_string(),
            company: company.to_string(),
            role: role.to_string(),
            job_url: format!("https://jobs.example/{id}"),
            status,
            date_applied: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default(),
            resume_version: String::new(),
            notes: String::new(),
            created_at,
            updated_at: created_at,
        }
    }

    fn sample() -> Vec<Application> {
        vec![
            app("a", "Acme Corp", "Backend Engineer", Status::Applied, 100),
            app("b", "Initech", "QA Lead", Status::Interview, 300),
            app("c", "Globex", "Backend Developer", Status::Rejected, 200),
            app("d", "Hooli", "Designer", Status::Ghosted, 400),
        ]
    }

    fn ids(hits: &[&Application]) -> Vec<String> {
        hits.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn test_default_filter_sorts_newest_first() {
        let apps = sample();
        assert_eq!(ids(&filter(&apps, &Filter::default())), vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn test_search_matches_company_or_role() {
        let apps = sample();
        let by_role = Filter {
            search: "BACKEND".to_string(),
            ..Filter::default()
        };
        assert_eq!(ids(&filter(&apps, &by_role)), vec!["c", "a"]);

        let by_company = Filter {
            search: "  hoo ".to_string(),
            ..Filter::default()
        };
        assert_eq!(ids(&filter(&apps, &by_company)), vec!["d"]);
    }

    #[test]
    fn test_status_and_search_combine() {
        let apps = sample();
        let f = Filter {
            status: Some(Status::Rejected),
            search: "backend".to_string(),
        };
        assert_eq!(ids(&filter(&apps, &f)), vec!["c"]);
    }

    #[test]
    fn test_stats() {
        let apps = sample();
        let stats = Stats::from(apps.as_slice());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.applied, 1);
        assert_eq!(stats.count(Status::Interview), 1);
        assert_eq!(Stats::from(&[] as &[Application]), Stats::default());

        let filtered: Stats = filter(&apps, &Filter { search: "backend".into(), ..Filter::default() })
            .into_iter()
            .collect();
        assert_eq!(filtered.total, 2);
        assert_eq!(filtered.rejected, 1);
    }
}
