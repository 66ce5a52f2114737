use std::env;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;

use focal_core::ScoreBoard;

use crate::auth_service::AuthUser;
use crate::error::MirrorError;

#[derive(Clone, Debug)]
pub struct MirrorConfig {
    pub base_url: String,
}

impl MirrorConfig {
    /// Read the mirror endpoint from `FOCAL_SYNC_BASE_URL`.
    ///
    /// Returns `None` (mirroring disabled) when the variable is unset or
    /// blank; scores then stay local-only.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("FOCAL_SYNC_BASE_URL").ok()?;
        if base_url.trim().is_empty() {
            return None;
        }
        Some(Self { base_url })
    }
}

/// Best-effort write-through of the score counters to a per-user remote
/// document. Local storage stays authoritative: this client is never read
/// back, failures are reported to the caller to log and drop, and nothing
/// retries or reconciles.
#[derive(Clone)]
pub struct ScoreMirrorService {
    client: Client,
    config: Option<MirrorConfig>,
}

impl ScoreMirrorService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(MirrorConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<MirrorConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Create the user's remote record at registration time, with zeroed
    /// counters.
    ///
    /// # Errors
    ///
    /// Returns `MirrorError` when mirroring is disabled or the request fails.
    pub async fn create_user_record(
        &self,
        user: &AuthUser,
        created_at: DateTime<Utc>,
    ) -> Result<(), MirrorError> {
        let config = self.config.as_ref().ok_or(MirrorError::Disabled)?;

        let payload = UserDocument {
            email: user.email(),
            created_at,
            scores: ScoresBody::from_board(&ScoreBoard::new()),
        };

        let response = self
            .client
            .put(user_url(&config.base_url, user.user_id()))
            .bearer_auth(user.id_token())
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MirrorError::HttpStatus(response.status()));
        }
        Ok(())
    }

    /// Write the current counters into the user's remote record.
    ///
    /// # Errors
    ///
    /// Returns `MirrorError` when mirroring is disabled or the request fails.
    pub async fn push_scores(
        &self,
        user: &AuthUser,
        board: &ScoreBoard,
    ) -> Result<(), MirrorError> {
        let config = self.config.as_ref().ok_or(MirrorError::Disabled)?;

        let payload = ScoresPatch {
            scores: ScoresBody::from_board(board),
        };

        let response = self
            .client
            .patch(user_url(&config.base_url, user.user_id()))
            .bearer_auth(user.id_token())
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MirrorError::HttpStatus(response.status()));
        }
        Ok(())
    }
}

fn user_url(base_url: &str, user_id: &str) -> String {
    format!("{}/users/{user_id}", base_url.trim_end_matches('/'))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UserDocument<'a> {
    email: &'a str,
    created_at: DateTime<Utc>,
    scores: ScoresBody,
}

#[derive(Debug, Serialize)]
struct ScoresPatch {
    scores: ScoresBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoresBody {
    current_streak: u32,
    best_streak: u32,
    total_correct: u32,
    total_attempts: u32,
}

impl ScoresBody {
    fn from_board(board: &ScoreBoard) -> Self {
        Self {
            current_streak: board.current_streak(),
            best_streak: board.best_streak(),
            total_correct: board.total_correct(),
            total_attempts: board.total_attempts(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_mirror_is_disabled() {
        let mirror = ScoreMirrorService::new(None);
        assert!(!mirror.enabled());
    }

    #[test]
    fn user_url_joins_without_double_slashes() {
        assert_eq!(
            user_url("https://sync.example.com/v1/", "abc123"),
            "https://sync.example.com/v1/users/abc123"
        );
    }

    #[test]
    fn scores_body_serializes_wire_names() {
        let board = ScoreBoard::new().record(true).record(false);
        let json = serde_json::to_string(&ScoresBody::from_board(&board)).unwrap();
        assert!(json.contains(r#""currentStreak":0"#));
        assert!(json.contains(r#""totalAttempts":2"#));
    }
}
