// SPDX-License-Identifier: MPL-2.0
//! End-to-end content flow: sync state driving a store through the full
//! load / edit / save / invalidate / re-fetch cycle.

use emerald_studio::content::{
    ContentError, ContentStore, HeroContent, MemoryStore, SaveOutcome, SectionContent, SectionKey,
    SyncState,
};

fn hero(tagline: &str, title: &str, subtitle: &str, description: &str) -> SectionContent {
    SectionContent::Hero(HeroContent {
        tagline: tagline.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        description: description.to_string(),
    })
}

/// Drives one load through the sync state against the store, the way the
/// application update loop does.
async fn load(sync: &mut SyncState, store: &MemoryStore, key: SectionKey) {
    if sync.begin_load(key) {
        let result = store.fetch(key).await;
        sync.finish_load(key, result);
    }
}

#[tokio::test]
async fn save_invalidates_cache_and_refetch_observes_new_record() {
    let store = MemoryStore::new();
    store.insert(SectionKey::Hero, hero("old", "old", "old", "old"));

    let mut sync = SyncState::new();
    load(&mut sync, &store, SectionKey::Hero).await;
    assert_eq!(
        sync.content(SectionKey::Hero),
        Some(&hero("old", "old", "old", "old"))
    );

    // Save the edited record.
    let edited = hero("A", "B", "C", "D");
    assert!(sync.begin_save(SectionKey::Hero));
    let result = store.replace(SectionKey::Hero, edited.clone()).await;
    let outcome = sync.finish_save(SectionKey::Hero, result);
    assert_eq!(outcome, SaveOutcome::Saved);

    // Cache was invalidated, so the next load actually re-fetches.
    assert!(sync.content(SectionKey::Hero).is_none());
    load(&mut sync, &store, SectionKey::Hero).await;
    assert_eq!(sync.content(SectionKey::Hero), Some(&edited));
}

#[tokio::test]
async fn denied_save_keeps_cache_and_stored_record() {
    let store = MemoryStore::new();
    store.insert(SectionKey::Hero, hero("t", "original", "s", "d"));

    let mut sync = SyncState::new();
    load(&mut sync, &store, SectionKey::Hero).await;

    store.set_deny_writes(true);
    assert!(sync.begin_save(SectionKey::Hero));
    let result = store
        .replace(SectionKey::Hero, hero("t", "overwrite", "s", "d"))
        .await;
    let outcome = sync.finish_save(SectionKey::Hero, result);

    assert_eq!(outcome, SaveOutcome::Failed(ContentError::PermissionDenied));
    // Cache still shows the last known-good record.
    assert_eq!(
        sync.content(SectionKey::Hero),
        Some(&hero("t", "original", "s", "d"))
    );
    // And the store was not modified.
    store.set_deny_writes(false);
    let fetched = store.fetch(SectionKey::Hero).await.expect("fetch");
    assert_eq!(fetched, hero("t", "original", "s", "d"));
}

#[tokio::test]
async fn missing_section_surfaces_not_found_without_caching() {
    let store = MemoryStore::new();
    let mut sync = SyncState::new();

    load(&mut sync, &store, SectionKey::About).await;

    assert!(sync.content(SectionKey::About).is_none());
    assert_eq!(
        sync.error(SectionKey::About),
        Some(&ContentError::NotFound(SectionKey::About))
    );

    // A later load is allowed to retry.
    assert!(sync.begin_load(SectionKey::About));
}

#[tokio::test]
async fn duplicate_rows_surface_as_ambiguity() {
    let store = MemoryStore::new();
    store.insert(SectionKey::Hero, hero("a", "a", "a", "a"));
    store.insert(SectionKey::Hero, hero("b", "b", "b", "b"));

    let mut sync = SyncState::new();
    load(&mut sync, &store, SectionKey::Hero).await;

    assert!(sync.content(SectionKey::Hero).is_none());
    assert_eq!(
        sync.error(SectionKey::Hero),
        Some(&ContentError::Ambiguous(SectionKey::Hero))
    );
}

#[tokio::test]
async fn sections_are_cached_independently() {
    let store = MemoryStore::new();
    store.insert(SectionKey::Hero, hero("h", "h", "h", "h"));

    let mut sync = SyncState::new();
    load(&mut sync, &store, SectionKey::Hero).await;
    load(&mut sync, &store, SectionKey::About).await;

    assert!(sync.content(SectionKey::Hero).is_some());
    assert!(sync.content(SectionKey::About).is_none());
    assert!(sync.error(SectionKey::Hero).is_none());
    assert!(sync.error(SectionKey::About).is_some());
}
