// SPDX-License-Identifier: MPL-2.0
//! Session context: who is signed in, and whether they hold the admin role.
//!
//! The session is constructed once at startup and injected into whatever
//! needs identity, instead of living in process-global state. Both the
//! "signed in" check and the admin-role check are answered by the external
//! identity provider; this module only carries the verified result around.

use serde::Deserialize;

/// A verified identity returned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
    pub is_admin: bool,
}

/// Read-mostly session context, created at application start.
#[derive(Debug, Clone, Default)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }

    /// Whether the signed-in user holds the admin role. Signed-out
    /// sessions are never admin.
    pub fn is_admin(&self) -> bool {
        self.identity.as_ref().is_some_and(|i| i.is_admin)
    }

    pub fn sign_out(&mut self) {
        self.identity = None;
    }
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RoleRow {
    #[allow(dead_code)]
    role: String,
}

/// Client for the external identity provider.
///
/// Resolves the configured access token to an [`Identity`], including the
/// admin-role lookup. A rejected token is reported as "signed out" rather
/// than an error, since an expired token is an ordinary state.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    access_token: String,
}

impl IdentityClient {
    pub fn new(base_url: &str, api_key: &str, access_token: &str) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("EmeraldStudio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            access_token: access_token.to_string(),
        })
    }

    /// Fetches the identity behind the access token, or `None` when the
    /// provider rejects the token.
    pub async fn fetch(&self) -> Result<Option<Identity>, String> {
        let user_url = format!("{}/auth/user", self.base_url);
        let response = self
            .client
            .get(&user_url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(format!("identity lookup failed: HTTP {}", status));
        }

        let user: UserResponse = response.json().await.map_err(|e| e.to_string())?;

        let roles_url = format!(
            "{}/user_roles?user_id=eq.{}&role=eq.admin&select=role",
            self.base_url, user.id
        );
        let roles: Vec<RoleRow> = self
            .client
            .get(&roles_url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .json()
            .await
            .map_err(|e| e.to_string())?;

        Ok(Some(Identity {
            user_id: user.id,
            email: user.email.unwrap_or_default(),
            is_admin: !roles.is_empty(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_identity() -> Identity {
        Identity {
            user_id: "u-1".to_string(),
            email: "steve@example.com".to_string(),
            is_admin: true,
        }
    }

    #[test]
    fn signed_out_session_has_no_identity() {
        let session = Session::signed_out();
        assert!(!session.is_signed_in());
        assert!(!session.is_admin());
        assert!(session.identity().is_none());
    }

    #[test]
    fn signed_in_admin_session_reports_admin() {
        let session = Session::signed_in(admin_identity());
        assert!(session.is_signed_in());
        assert!(session.is_admin());
    }

    #[test]
    fn signed_in_non_admin_session_is_not_admin() {
        let session = Session::signed_in(Identity {
            is_admin: false,
            ..admin_identity()
        });
        assert!(session.is_signed_in());
        assert!(!session.is_admin());
    }

    #[test]
    fn sign_out_clears_identity() {
        let mut session = Session::signed_in(admin_identity());
        session.sign_out();
        assert!(!session.is_signed_in());
        assert!(!session.is_admin());
    }
}
