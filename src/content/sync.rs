// SPDX-License-Identifier: MPL-2.0
//! Client-side sync state binding section keys to the remote content
//! store.
//!
//! `SyncState` is the single shared cache for every consumer of a section:
//! one cached record per key, plus per-key loading/saving flags and the
//! last fetch error. It owns no I/O. The update loop issues the actual
//! fetch/save as async tasks and reports completions back through
//! [`SyncState::finish_load`] and [`SyncState::finish_save`]; a save
//! acknowledgment invalidates the cached record so the caller's follow-up
//! re-fetch (issued strictly after the acknowledgment) observes the new
//! value. A failed save leaves the cached value intact.

use super::section::{SectionContent, SectionKey};
use super::store::ContentError;
use std::collections::{HashMap, HashSet};

/// What a completed save means for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Save acknowledged. The cached record was invalidated; the caller
    /// must issue the re-fetch for this key.
    Saved,
    /// Save failed. The cached record is untouched.
    Failed(ContentError),
}

#[derive(Debug, Default)]
pub struct SyncState {
    cache: HashMap<SectionKey, SectionContent>,
    loading: HashSet<SectionKey>,
    saving: HashSet<SectionKey>,
    errors: HashMap<SectionKey, ContentError>,
}

impl SyncState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known-good record for `key`, if any.
    pub fn content(&self, key: SectionKey) -> Option<&SectionContent> {
        self.cache.get(&key)
    }

    pub fn is_loading(&self, key: SectionKey) -> bool {
        self.loading.contains(&key)
    }

    pub fn is_saving(&self, key: SectionKey) -> bool {
        self.saving.contains(&key)
    }

    /// Last fetch error for `key`, if the most recent fetch failed.
    pub fn error(&self, key: SectionKey) -> Option<&ContentError> {
        self.errors.get(&key)
    }

    /// Marks a fetch as in flight. Returns `false` when no fetch should
    /// be issued because the record is already cached or a fetch is
    /// already running.
    pub fn begin_load(&mut self, key: SectionKey) -> bool {
        if self.cache.contains_key(&key) || self.loading.contains(&key) {
            return false;
        }
        self.loading.insert(key);
        true
    }

    /// Records a fetch completion. A stale completion (e.g. the consumer
    /// navigated away) still updates the shared cache: replacements are
    /// idempotent and keyed by section.
    pub fn finish_load(&mut self, key: SectionKey, result: Result<SectionContent, ContentError>) {
        self.loading.remove(&key);
        match result {
            Ok(content) => {
                self.errors.remove(&key);
                self.cache.insert(key, content);
            }
            Err(error) => {
                self.errors.insert(key, error);
            }
        }
    }

    /// Marks a save as in flight. Returns `false` when a save for this
    /// key is already running from this client; concurrent saves from
    /// other clients are not this cache's concern (last write wins at the
    /// store).
    pub fn begin_save(&mut self, key: SectionKey) -> bool {
        if self.saving.contains(&key) {
            return false;
        }
        self.saving.insert(key);
        true
    }

    /// Records a save completion and tells the caller what to do next.
    pub fn finish_save(
        &mut self,
        key: SectionKey,
        result: Result<(), ContentError>,
    ) -> SaveOutcome {
        self.saving.remove(&key);
        match result {
            Ok(()) => {
                self.cache.remove(&key);
                self.errors.remove(&key);
                SaveOutcome::Saved
            }
            Err(error) => SaveOutcome::Failed(error),
        }
    }

    /// Drops the cached record for `key` so the next load re-fetches.
    pub fn invalidate(&mut self, key: SectionKey) {
        self.cache.remove(&key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::section::HeroContent;

    fn hero(title: &str) -> SectionContent {
        SectionContent::Hero(HeroContent {
            tagline: "tagline".to_string(),
            title: title.to_string(),
            subtitle: "subtitle".to_string(),
            description: "description".to_string(),
        })
    }

    #[test]
    fn load_lifecycle_updates_flags_and_cache() {
        let mut sync = SyncState::new();
        assert!(sync.begin_load(SectionKey::Hero));
        assert!(sync.is_loading(SectionKey::Hero));
        assert!(sync.content(SectionKey::Hero).is_none());

        sync.finish_load(SectionKey::Hero, Ok(hero("loaded")));
        assert!(!sync.is_loading(SectionKey::Hero));
        assert_eq!(sync.content(SectionKey::Hero), Some(&hero("loaded")));
        assert!(sync.error(SectionKey::Hero).is_none());
    }

    #[test]
    fn begin_load_is_suppressed_while_in_flight_or_cached() {
        let mut sync = SyncState::new();
        assert!(sync.begin_load(SectionKey::Hero));
        assert!(!sync.begin_load(SectionKey::Hero));

        sync.finish_load(SectionKey::Hero, Ok(hero("cached")));
        assert!(!sync.begin_load(SectionKey::Hero));
    }

    #[test]
    fn failed_load_keeps_last_known_good_record() {
        let mut sync = SyncState::new();
        sync.begin_load(SectionKey::Hero);
        sync.finish_load(SectionKey::Hero, Ok(hero("good")));

        sync.invalidate(SectionKey::Hero);
        assert!(sync.begin_load(SectionKey::Hero));
        sync.finish_load(
            SectionKey::Hero,
            Err(ContentError::Fetch("timeout".to_string())),
        );

        assert!(sync.error(SectionKey::Hero).is_some());
        assert!(sync.content(SectionKey::Hero).is_none());
    }

    #[test]
    fn failed_load_error_is_scoped_to_its_key() {
        let mut sync = SyncState::new();
        sync.begin_load(SectionKey::Hero);
        sync.finish_load(
            SectionKey::Hero,
            Err(ContentError::NotFound(SectionKey::Hero)),
        );

        assert!(sync.error(SectionKey::Hero).is_some());
        assert!(sync.error(SectionKey::About).is_none());
    }

    #[test]
    fn successful_save_invalidates_cache_for_refetch() {
        let mut sync = SyncState::new();
        sync.begin_load(SectionKey::Hero);
        sync.finish_load(SectionKey::Hero, Ok(hero("stale")));

        assert!(sync.begin_save(SectionKey::Hero));
        assert!(sync.is_saving(SectionKey::Hero));

        let outcome = sync.finish_save(SectionKey::Hero, Ok(()));
        assert_eq!(outcome, SaveOutcome::Saved);
        assert!(!sync.is_saving(SectionKey::Hero));
        // Cache invalidated: the next begin_load issues a re-fetch.
        assert!(sync.content(SectionKey::Hero).is_none());
        assert!(sync.begin_load(SectionKey::Hero));
    }

    #[test]
    fn failed_save_leaves_cached_value_intact() {
        let mut sync = SyncState::new();
        sync.begin_load(SectionKey::Hero);
        sync.finish_load(SectionKey::Hero, Ok(hero("pre-save")));

        sync.begin_save(SectionKey::Hero);
        let outcome = sync.finish_save(SectionKey::Hero, Err(ContentError::PermissionDenied));

        assert_eq!(outcome, SaveOutcome::Failed(ContentError::PermissionDenied));
        assert_eq!(sync.content(SectionKey::Hero), Some(&hero("pre-save")));
    }

    #[test]
    fn duplicate_in_flight_save_is_refused_locally() {
        let mut sync = SyncState::new();
        assert!(sync.begin_save(SectionKey::Hero));
        assert!(!sync.begin_save(SectionKey::Hero));

        sync.finish_save(SectionKey::Hero, Ok(()));
        assert!(sync.begin_save(SectionKey::Hero));
    }

    #[test]
    fn saves_to_different_keys_are_independent() {
        let mut sync = SyncState::new();
        assert!(sync.begin_save(SectionKey::Hero));
        assert!(sync.begin_save(SectionKey::Contact));
        assert!(sync.is_saving(SectionKey::Hero));
        assert!(sync.is_saving(SectionKey::Contact));
    }

    #[test]
    fn stale_load_completion_still_updates_shared_cache() {
        let mut sync = SyncState::new();
        sync.begin_load(SectionKey::Hero);
        // Consumer navigated away; the completion arrives anyway.
        sync.finish_load(SectionKey::Hero, Ok(hero("late")));
        assert_eq!(sync.content(SectionKey::Hero), Some(&hero("late")));
    }
}
