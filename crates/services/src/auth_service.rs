use std::env;
use std::sync::{Arc, Mutex};

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::Clock;
use crate::error::AuthError;
use crate::mirror_service::ScoreMirrorService;

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub base_url: String,
    pub api_key: String,
}

impl AuthConfig {
    /// Read the identity provider settings from the environment.
    ///
    /// Returns `None` (auth disabled) when `FOCAL_AUTH_API_KEY` is unset or
    /// blank. Practicing works fully without an identity; signing in only
    /// enables the remote score mirror.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("FOCAL_AUTH_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = env::var("FOCAL_AUTH_BASE_URL")
            .unwrap_or_else(|_| "https://identitytoolkit.googleapis.com/v1".into());
        Some(Self { base_url, api_key })
    }
}

/// The signed-in identity: the id used to key the remote score record plus
/// the bearer token for writes to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    user_id: String,
    email: String,
    id_token: String,
}

impl AuthUser {
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn id_token(&self) -> &str {
        &self.id_token
    }
}

/// Email/password identity client.
///
/// Holds the current user for the lifetime of the process; nothing about the
/// identity is persisted locally, matching the session-scoped sign-in of the
/// original client.
pub struct AuthService {
    client: Client,
    config: Option<AuthConfig>,
    clock: Clock,
    mirror: Arc<ScoreMirrorService>,
    current: Mutex<Option<AuthUser>>,
}

impl AuthService {
    #[must_use]
    pub fn from_env(clock: Clock, mirror: Arc<ScoreMirrorService>) -> Self {
        Self::new(AuthConfig::from_env(), clock, mirror)
    }

    #[must_use]
    pub fn new(config: Option<AuthConfig>, clock: Clock, mirror: Arc<ScoreMirrorService>) -> Self {
        Self {
            client: Client::new(),
            config,
            clock,
            mirror,
            current: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Create an account, sign it in, and seed the remote score record with
    /// zeroed counters. A failed seed write is logged and dropped; the
    /// registration itself still succeeds.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` when auth is disabled, credentials are rejected,
    /// or the request fails.
    pub async fn register(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let user = self.credential_request("accounts:signUp", email, password).await?;
        self.set_current(Some(user.clone()));

        if self.mirror.enabled() {
            if let Err(err) = self.mirror.create_user_record(&user, self.clock.now()).await {
                tracing::warn!(error = %err, user_id = user.user_id(), "failed to seed remote score record");
            }
        }

        Ok(user)
    }

    /// Sign in an existing account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` when auth is disabled, credentials are rejected,
    /// or the request fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let user = self
            .credential_request("accounts:signInWithPassword", email, password)
            .await?;
        self.set_current(Some(user.clone()));
        Ok(user)
    }

    /// Drop the current identity. Local state and storage are untouched.
    pub fn logout(&self) {
        self.set_current(None);
    }

    #[must_use]
    pub fn current_user(&self) -> Option<AuthUser> {
        self.current.lock().ok().and_then(|guard| guard.clone())
    }

    #[must_use]
    pub fn current_user_id(&self) -> Option<String> {
        self.current_user().map(|user| user.user_id)
    }

    fn set_current(&self, user: Option<AuthUser>) {
        if let Ok(mut guard) = self.current.lock() {
            *guard = user;
        }
    }

    async fn credential_request(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, AuthError> {
        let config = self.config.as_ref().ok_or(AuthError::Disabled)?;

        let url = format!(
            "{}/{endpoint}?key={}",
            config.base_url.trim_end_matches('/'),
            config.api_key
        );
        let payload = CredentialRequest {
            email,
            password,
            return_secure_token: true,
        };

        let response = self.client.post(url).json(&payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            // The provider explains rejections in the body; surface that
            // message when present so the account screen can show it.
            if let Ok(body) = response.json::<ProviderErrorBody>().await {
                return Err(AuthError::Rejected(body.error.message));
            }
            return Err(AuthError::HttpStatus(status));
        }

        let body: CredentialResponse = response.json().await?;
        Ok(AuthUser {
            user_id: body.local_id,
            email: body.email,
            id_token: body.id_token,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CredentialRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CredentialResponse {
    local_id: String,
    email: String,
    id_token: String,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disabled_service() -> AuthService {
        AuthService::new(None, Clock::system(), Arc::new(ScoreMirrorService::new(None)))
    }

    #[tokio::test]
    async fn disabled_auth_rejects_credential_calls() {
        let auth = disabled_service();
        assert!(!auth.enabled());
        assert!(matches!(
            auth.login("someone@example.com", "secret").await,
            Err(AuthError::Disabled)
        ));
        assert!(matches!(
            auth.register("someone@example.com", "secret").await,
            Err(AuthError::Disabled)
        ));
    }

    #[test]
    fn logout_clears_current_user() {
        let auth = disabled_service();
        assert!(auth.current_user().is_none());
        auth.logout();
        assert!(auth.current_user().is_none());
        assert!(auth.current_user_id().is_none());
    }
}
