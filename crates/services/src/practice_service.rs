use std::sync::Arc;

use focal_core::{FilterSelection, Flashcard, ScoreBoard, catalog};
use storage::repository::{FilterRepository, ScoreRepository};

use crate::auth_service::AuthService;
use crate::mirror_service::ScoreMirrorService;

/// Everything the practice screen needs at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeState {
    pub scores: ScoreBoard,
    pub filter: FilterSelection,
    pub deck: Vec<Flashcard>,
}

/// Orchestrates the practice flow around the pure core: loads persisted
/// state at startup, persists each answer, and mirrors counters for a
/// signed-in user.
///
/// Persistence and mirror failures never surface to the caller: they are
/// logged and the in-memory state stays authoritative for the rest of the
/// session. The worst outcome of a failed write is a next launch that
/// starts from defaults.
#[derive(Clone)]
pub struct PracticeService {
    scores: Arc<dyn ScoreRepository>,
    filters: Arc<dyn FilterRepository>,
    auth: Arc<AuthService>,
    mirror: Arc<ScoreMirrorService>,
}

impl PracticeService {
    #[must_use]
    pub fn new(
        scores: Arc<dyn ScoreRepository>,
        filters: Arc<dyn FilterRepository>,
        auth: Arc<AuthService>,
        mirror: Arc<ScoreMirrorService>,
    ) -> Self {
        Self {
            scores,
            filters,
            auth,
            mirror,
        }
    }

    /// Load persisted scores and filter, falling open to defaults.
    ///
    /// Absent or unreadable values become a zeroed board and the
    /// all-inclusive filter; a saved selection is narrowed to values still
    /// present in the catalog. The returned deck already has the
    /// never-empty fallback applied.
    pub async fn load_state(&self) -> PracticeState {
        let scores = match self.scores.load_scores().await {
            Ok(Some(board)) => board,
            Ok(None) => ScoreBoard::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load scores, starting from zero");
                ScoreBoard::new()
            }
        };

        let filter = match self.filters.load_filter().await {
            Ok(Some(mut selection)) => {
                selection.retain_known(catalog());
                selection
            }
            Ok(None) => FilterSelection::all(catalog()),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load filter, selecting everything");
                FilterSelection::all(catalog())
            }
        };

        let deck = filter.apply(catalog().cards());

        PracticeState {
            scores,
            filter,
            deck,
        }
    }

    /// Persist a freshly recorded board, then mirror it when a user is
    /// signed in. Both writes are best-effort.
    pub async fn persist_scores(&self, board: &ScoreBoard) {
        if let Err(err) = self.scores.save_scores(board).await {
            tracing::warn!(error = %err, "failed to save scores, keeping in-memory tally");
        }

        if let Some(user) = self.auth.current_user() {
            if self.mirror.enabled() {
                if let Err(err) = self.mirror.push_scores(&user, board).await {
                    tracing::warn!(
                        error = %err,
                        user_id = user.user_id(),
                        "failed to mirror scores, local copy stays authoritative"
                    );
                }
            }
        }
    }

    /// Persist the selection and return the deck it produces.
    ///
    /// The save is best-effort: the in-memory selection remains valid for
    /// the current session even when the write fails.
    pub async fn apply_filter(&self, selection: &FilterSelection) -> Vec<Flashcard> {
        if let Err(err) = self.filters.save_filter(selection).await {
            tracing::warn!(error = %err, "failed to save filter selection");
        }
        selection.apply(catalog().cards())
    }
}
