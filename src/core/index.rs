//! # Index Cache
//!
//! Local copy of the module index, kept sorted by module name.
//!
//! The only way in is [`IndexCache::replace_all`]: every reload swaps the
//! whole list. There are no incremental inserts or removes. After each swap
//! the subscribed observer (the module browser) gets the new ordered list.
//!
//! Reloads are tagged with a monotonic token from [`IndexCache::issue_token`].
//! A completion carrying an older token than the one already applied is
//! dropped by [`IndexCache::apply_reload`], so a slow reload can never
//! overwrite a newer one.

use chrono::{DateTime, Utc};
use log::debug;

use crate::store::ModuleSummary;

/// Receives the ordered index after every replace.
pub trait IndexObserver: Send {
    fn load_index(&mut self, entries: &[ModuleSummary]);
}

#[derive(Default)]
pub struct IndexCache {
    entries: Vec<ModuleSummary>,
    observer: Option<Box<dyn IndexObserver>>,
    issued_token: u64,
    applied_token: u64,
    refreshed_at: Option<DateTime<Utc>>,
}

impl IndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the observer and hands it the current contents right away.
    /// Replaces any previously registered observer.
    pub fn subscribe(&mut self, mut observer: Box<dyn IndexObserver>) {
        observer.load_index(&self.entries);
        self.observer = Some(observer);
    }

    /// Replaces the contents with `entries` sorted by name and notifies the observer.
    pub fn replace_all(&mut self, mut entries: Vec<ModuleSummary>) {
        // Stable, byte-wise ordinal comparison.
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        self.entries = entries;
        self.refreshed_at = Some(Utc::now());
        if let Some(observer) = self.observer.as_mut() {
            observer.load_index(&self.entries);
        }
    }

    pub fn current(&self) -> &[ModuleSummary] {
        &self.entries
    }

    pub fn lookup(&self, name: &str) -> Option<&ModuleSummary> {
        self.entries
            .binary_search_by(|entry| entry.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// When the contents were last replaced (None = never loaded).
    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    /// Hands out the token for a new reload request.
    pub fn issue_token(&mut self) -> u64 {
        self.issued_token += 1;
        self.issued_token
    }

    /// Token of the reload whose result is currently held (0 = none).
    pub fn applied_token(&self) -> u64 {
        self.applied_token
    }

    /// Applies a reload result unless a newer one was already applied.
    /// Returns whether the contents were replaced.
    pub fn apply_reload(&mut self, token: u64, entries: Vec<ModuleSummary>) -> bool {
        if token < self.applied_token {
            debug!(
                "Dropping stale index reload (token {} < applied {})",
                token, self.applied_token
            );
            return false;
        }
        self.applied_token = token;
        self.replace_all(entries);
        true
    }
}
