//! Re-detection for single-page applications.
//!
//! Job boards such as LinkedIn swap the selected job without a page load, so
//! a detection taken at load time goes stale. A host re-runs detection after
//! [`RedetectPolicy::initial_delay`] and then whenever a
//! [`NavigationWatcher`] polled every [`RedetectPolicy::poll_interval`]
//! reports a URL change. Results computed for a URL the tab has since left
//! are dropped with [`is_stale`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing for re-running detection on dynamic pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedetectPolicy {
    /// Wait after load before the first detection, letting the page render.
    ///
    /// Default: 1500 ms
    pub initial_delay: Duration,

    /// How often to check the URL for client-side navigation.
    ///
    /// Default: 1000 ms
    pub poll_interval: Duration,

    /// Upper bound on re-runs per page load. `None` is unbounded.
    ///
    /// Default: `None`
    pub max_reruns: Option<u32>,
}

impl Default for RedetectPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(1500),
            poll_interval: Duration::from_millis(1000),
            max_reruns: None,
        }
    }
}

/// Tracks the last seen URL of one tab and counts re-runs.
#[derive(Debug, Clone, Default)]
pub struct NavigationWatcher {
    policy: RedetectPolicy,
    last_url: Option<String>,
    reruns: u32,
}

impl NavigationWatcher {
    #[must_use]
    pub fn new(policy: RedetectPolicy) -> Self {
        Self {
            policy,
            last_url: None,
            reruns: 0,
        }
    }

    #[must_use]
    pub fn policy(&self) -> &RedetectPolicy {
        &self.policy
    }

    /// Record `url`; true when it differs from the last observed URL. The
    /// first observation always counts as a change.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jobscout::watch::NavigationWatcher;
    ///
    /// let mut watcher = NavigationWatcher::default();
    /// assert!(watcher.observe("https://www.linkedin.com/jobs/search/?currentJobId=1"));
    /// assert!(!watcher.observe("https://www.linkedin.com/jobs/search/?currentJobId=1"));
    /// assert!(watcher.observe("https://www.linkedin.com/jobs/search/?currentJobId=2"));
    /// ```
    pub fn observe(&mut self, url: &str) -> bool {
        if self.last_url.as_deref() == Some(url) {
            return false;
        }
        log::debug!("navigation to {url}");
        self.last_url = Some(url.to_string());
        true
    }

    /// Whether the policy still allows a re-run; consumes one if so.
    pub fn try_rerun(&mut self) -> bool {
        if self.policy.max_reruns.is_some_and(|max| self.reruns >= max) {
            return false;
        }
        self.reruns += 1;
        true
    }

    /// Forget the last URL and re-run count, e.g. after a full page load.
    pub fn reset(&mut self) {
        self.last_url = None;
        self.reruns = 0;
    }

    #[must_use]
    pub fn last_url(&self) -> Option<&str> {
        self.last_url.as_deref()
    }
}

/// Whether a result computed for `requested_url` no longer applies because
/// the tab has moved on to `current_url`.
#[must_use]
pub fn is_stale(requested_url: &str, current_url: &str) -> bool {
    requested_url != current_url
}
