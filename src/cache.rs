//! Per-tab cache of the latest detection result.
//!
//! The popup asks for "the job on this tab" long after the page loaded; the
//! cache keeps the most recent [`JobDetails`] per tab so it can answer
//! without re-running detection. Capacity is bounded and the oldest entry is
//! evicted first.

use std::collections::{HashMap, VecDeque};

use crate::result::JobDetails;

/// Browser tab identifier.
pub type TabId = u64;

const DEFAULT_CAPACITY: usize = 64;

/// Bounded map from tab to its latest detection.
#[derive(Debug, Clone)]
pub struct DetectionCache {
    capacity: usize,
    entries: HashMap<TabId, JobDetails>,
    /// Insertion order, oldest at the front.
    order: VecDeque<TabId>,
}

impl DetectionCache {
    /// Cache holding at most `capacity` tabs (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    /// Store `details` for `tab`, replacing any earlier result. Returns the
    /// evicted tab, if the cache was full.
    pub fn put(&mut self, tab: TabId, details: JobDetails) -> Option<TabId> {
        if self.entries.insert(tab, details).is_some() {
            self.order.retain(|t| *t != tab);
            self.order.push_back(tab);
            return None;
        }

        self.order.push_back(tab);
        if self.order.len() <= self.capacity {
            return None;
        }

        let evicted = self.order.pop_front()?;
        self.entries.remove(&evicted);
        log::trace!("evicted detection for tab {evicted}");
        Some(evicted)
    }

    #[must_use]
    pub fn get(&self, tab: TabId) -> Option<&JobDetails> {
        self.entries.get(&tab)
    }

    /// Forget `tab`, e.g. when it closes.
    pub fn remove(&mut self, tab: TabId) -> Option<JobDetails> {
        let removed = self.entries.remove(&tab)?;
        self.order.retain(|t| *t != tab);
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for DetectionCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
