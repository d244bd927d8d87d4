// SPDX-License-Identifier: MPL-2.0
//! The content store boundary: a key-value read/update interface over
//! named site sections.
//!
//! A read returns exactly one structured record per key or an error; a
//! zero-row result is "no such section" and a multi-row result is an
//! ambiguity the store was supposed to prevent, so both fail loudly
//! instead of silently picking a row. An update replaces the stored
//! record wholesale. Authorization is enforced by the store, not the
//! client; a rejected write surfaces as [`ContentError::PermissionDenied`].

use super::section::{SectionContent, SectionKey};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// Remote read failed (transport or server error).
    Fetch(String),
    /// No record stored under the key.
    NotFound(SectionKey),
    /// More than one record matched the key.
    Ambiguous(SectionKey),
    /// The payload did not match the shape required by the key.
    Malformed(String),
    /// The caller lacks edit rights for this record.
    PermissionDenied,
    /// Remote write failed for a reason other than permissions.
    Save(String),
}

impl ContentError {
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, ContentError::PermissionDenied)
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Fetch(e) => write!(f, "failed to fetch content: {}", e),
            ContentError::NotFound(key) => write!(f, "no content stored for section '{}'", key),
            ContentError::Ambiguous(key) => {
                write!(f, "more than one record stored for section '{}'", key)
            }
            ContentError::Malformed(e) => write!(f, "malformed content payload: {}", e),
            ContentError::PermissionDenied => write!(f, "permission denied"),
            ContentError::Save(e) => write!(f, "failed to save content: {}", e),
        }
    }
}

/// Key-value interface over named sections. Read returns exactly one
/// record; update replaces it atomically.
#[allow(async_fn_in_trait)]
pub trait ContentStore {
    async fn fetch(&self, key: SectionKey) -> Result<SectionContent, ContentError>;
    async fn replace(&self, key: SectionKey, content: SectionContent) -> Result<(), ContentError>;
}

#[derive(Debug, Deserialize)]
struct ContentRow {
    content: serde_json::Value,
}

/// HTTP implementation speaking a PostgREST-style REST interface:
/// `GET  {base}/site_content?section_key=eq.{key}&select=content`
/// `PATCH {base}/site_content?section_key=eq.{key}`
#[derive(Debug, Clone)]
pub struct HttpContentStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    access_token: Option<String>,
}

impl HttpContentStore {
    pub fn new(
        base_url: &str,
        api_key: &str,
        access_token: Option<String>,
    ) -> Result<Self, ContentError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("EmeraldStudio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ContentError::Fetch(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            access_token,
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.header("apikey", &self.api_key);
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl ContentStore for HttpContentStore {
    async fn fetch(&self, key: SectionKey) -> Result<SectionContent, ContentError> {
        let url = format!(
            "{}/site_content?section_key=eq.{}&select=content",
            self.base_url, key
        );
        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(|e| ContentError::Fetch(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ContentError::PermissionDenied);
        }
        if !status.is_success() {
            return Err(ContentError::Fetch(format!("HTTP status: {}", status)));
        }

        let mut rows: Vec<ContentRow> = response
            .json()
            .await
            .map_err(|e| ContentError::Malformed(e.to_string()))?;

        if rows.len() > 1 {
            return Err(ContentError::Ambiguous(key));
        }
        match rows.pop() {
            None => Err(ContentError::NotFound(key)),
            Some(row) => SectionContent::from_value(key, row.content)
                .map_err(|e| ContentError::Malformed(e.to_string())),
        }
    }

    async fn replace(&self, key: SectionKey, content: SectionContent) -> Result<(), ContentError> {
        let url = format!("{}/site_content?section_key=eq.{}", self.base_url, key);
        let value = content
            .to_value()
            .map_err(|e| ContentError::Malformed(e.to_string()))?;
        let body = serde_json::json!({ "content": value });

        let response = self
            .authorize(self.client.patch(&url))
            .json(&body)
            .send()
            .await
            .map_err(|e| ContentError::Save(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ContentError::PermissionDenied);
        }
        if !status.is_success() {
            return Err(ContentError::Save(format!("HTTP status: {}", status)));
        }
        Ok(())
    }
}

/// In-memory store used by tests and offline demos.
///
/// Rows are kept as a list per key so tests can stage the zero-row and
/// multi-row error paths; writes can be toggled to fail with
/// [`ContentError::PermissionDenied`] to exercise the non-admin path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<HashMap<SectionKey, Vec<SectionContent>>>>,
    deny_writes: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages an additional row under `key` (does not replace).
    pub fn insert(&self, key: SectionKey, content: SectionContent) {
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        records.entry(key).or_default().push(content);
    }

    /// When set, every `replace` call fails with `PermissionDenied`.
    pub fn set_deny_writes(&self, deny: bool) {
        self.deny_writes.store(deny, Ordering::Relaxed);
    }
}

impl ContentStore for MemoryStore {
    async fn fetch(&self, key: SectionKey) -> Result<SectionContent, ContentError> {
        let records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        match records.get(&key).map(Vec::as_slice) {
            None | Some([]) => Err(ContentError::NotFound(key)),
            Some([row]) => {
                if row.key() == key {
                    Ok(row.clone())
                } else {
                    Err(ContentError::Malformed(format!(
                        "record under '{}' has shape '{}'",
                        key,
                        row.key()
                    )))
                }
            }
            Some(_) => Err(ContentError::Ambiguous(key)),
        }
    }

    async fn replace(&self, key: SectionKey, content: SectionContent) -> Result<(), ContentError> {
        if self.deny_writes.load(Ordering::Relaxed) {
            return Err(ContentError::PermissionDenied);
        }
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        records.insert(key, vec![content]);
        Ok(())
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

    #[tokio::test]
    async fn fetch_missing_section_reports_not_found() {
        let store = MemoryStore::new();
        let result = store.fetch(SectionKey::Hero).await;
        assert_eq!(result, Err(ContentError::NotFound(SectionKey::Hero)));
    }

    #[tokio::test]
    async fn fetch_with_duplicate_rows_reports_ambiguity() {
        let store = MemoryStore::new();
        store.insert(SectionKey::Hero, hero("first"));
        store.insert(SectionKey::Hero, hero("second"));

        let result = store.fetch(SectionKey::Hero).await;
        assert_eq!(result, Err(ContentError::Ambiguous(SectionKey::Hero)));
    }

    #[tokio::test]
    async fn fetch_rejects_wrong_shape_under_key() {
        let store = MemoryStore::new();
        store.insert(SectionKey::About, hero("misfiled"));

        let result = store.fetch(SectionKey::About).await;
        assert!(matches!(result, Err(ContentError::Malformed(_))));
    }

    #[tokio::test]
    async fn replace_then_fetch_returns_the_new_record() {
        let store = MemoryStore::new();
        store.insert(SectionKey::Hero, hero("old"));

        store
            .replace(SectionKey::Hero, hero("new"))
            .await
            .expect("replace should succeed");

        let fetched = store.fetch(SectionKey::Hero).await.expect("fetch");
        assert_eq!(fetched, hero("new"));
    }

    #[tokio::test]
    async fn denied_write_leaves_stored_record_untouched() {
        let store = MemoryStore::new();
        store.insert(SectionKey::Hero, hero("original"));
        store.set_deny_writes(true);

        let result = store.replace(SectionKey::Hero, hero("overwrite")).await;
        assert_eq!(result, Err(ContentError::PermissionDenied));

        let fetched = store.fetch(SectionKey::Hero).await.expect("fetch");
        assert_eq!(fetched, hero("original"));
    }

    #[test]
    fn permission_denied_is_distinguishable() {
        assert!(ContentError::PermissionDenied.is_permission_denied());
        assert!(!ContentError::Save("boom".to_string()).is_permission_denied());
    }
}
