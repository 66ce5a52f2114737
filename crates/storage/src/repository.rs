use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use focal_core::{CardType, FilterSelection, ScoreBoard, ScoreError};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

//
// ─── PERSISTED RECORDS ─────────────────────────────────────────────────────────
//

/// Persisted shape of the score counters.
///
/// Field names are camelCase on the wire, matching the record layout the
/// remote per-user document uses for the same counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub current_streak: u32,
    pub best_streak: u32,
    pub total_correct: u32,
    pub total_attempts: u32,
}

impl ScoreRecord {
    #[must_use]
    pub fn from_board(board: &ScoreBoard) -> Self {
        Self {
            current_streak: board.current_streak(),
            best_streak: board.best_streak(),
            total_correct: board.total_correct(),
            total_attempts: board.total_attempts(),
        }
    }

    /// Convert the record back into a domain `ScoreBoard`.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError` if the persisted counters violate the board's
    /// invariants.
    pub fn into_board(self) -> Result<ScoreBoard, ScoreError> {
        ScoreBoard::from_persisted(
            self.current_streak,
            self.best_streak,
            self.total_correct,
            self.total_attempts,
        )
    }
}

/// Persisted shape of the filter selection.
///
/// Types are stored as strings; values that no longer parse are dropped on
/// the way back in rather than failing the whole selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterRecord {
    pub categories: Vec<String>,
    pub types: Vec<String>,
}

impl FilterRecord {
    #[must_use]
    pub fn from_selection(selection: &FilterSelection) -> Self {
        Self {
            categories: selection.categories().iter().cloned().collect(),
            types: selection
                .types()
                .iter()
                .map(|t| t.as_str().to_owned())
                .collect(),
        }
    }

    #[must_use]
    pub fn into_selection(self) -> FilterSelection {
        FilterSelection::from_parts(
            self.categories,
            self.types
                .iter()
                .filter_map(|t| t.parse::<CardType>().ok()),
        )
    }
}

//
// ─── REPOSITORY CONTRACTS ──────────────────────────────────────────────────────
//

/// Repository contract for the durable score counters.
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Fetch the persisted board, `None` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connection failures or when the stored
    /// value cannot be decoded into a valid board.
    async fn load_scores(&self) -> Result<Option<ScoreBoard>, StorageError>;

    /// Persist the board, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the board cannot be stored.
    async fn save_scores(&self, board: &ScoreBoard) -> Result<(), StorageError>;
}

/// Repository contract for the persisted filter selection.
#[async_trait]
pub trait FilterRepository: Send + Sync {
    /// Fetch the persisted selection, `None` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connection failures or undecodable values.
    async fn load_filter(&self) -> Result<Option<FilterSelection>, StorageError>;

    /// Persist the selection, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the selection cannot be stored.
    async fn save_filter(&self, selection: &FilterSelection) -> Result<(), StorageError>;
}

//
// ─── IN-MEMORY IMPLEMENTATION ──────────────────────────────────────────────────
//

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    scores: Arc<Mutex<Option<ScoreRecord>>>,
    filter: Arc<Mutex<Option<FilterRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScoreRepository for InMemoryRepository {
    async fn load_scores(&self) -> Result<Option<ScoreBoard>, StorageError> {
        let guard = self
            .scores
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard
            .map(|record| {
                record
                    .into_board()
                    .map_err(|e| StorageError::Serialization(e.to_string()))
            })
            .transpose()
    }

    async fn save_scores(&self, board: &ScoreBoard) -> Result<(), StorageError> {
        let mut guard = self
            .scores
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(ScoreRecord::from_board(board));
        Ok(())
    }
}

#[async_trait]
impl FilterRepository for InMemoryRepository {
    async fn load_filter(&self) -> Result<Option<FilterSelection>, StorageError> {
        let guard = self
            .filter
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone().map(FilterRecord::into_selection))
    }

    async fn save_filter(&self, selection: &FilterSelection) -> Result<(), StorageError> {
        let mut guard = self
            .filter
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(FilterRecord::from_selection(selection));
        Ok(())
    }
}

//
// ─── STORAGE AGGREGATE ─────────────────────────────────────────────────────────
//

/// Aggregates the repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub scores: Arc<dyn ScoreRepository>,
    pub filters: Arc<dyn FilterRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let scores: Arc<dyn ScoreRepository> = Arc::new(repo.clone());
        let filters: Arc<dyn FilterRepository> = Arc::new(repo);
        Self { scores, filters }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use focal_core::catalog;

    #[tokio::test]
    async fn scores_round_trip() {
        let repo = InMemoryRepository::new();
        assert!(repo.load_scores().await.unwrap().is_none());

        let board = ScoreBoard::new().record(true).record(true).record(false);
        repo.save_scores(&board).await.unwrap();

        let loaded = repo.load_scores().await.unwrap().unwrap();
        assert_eq!(loaded, board);
    }

    #[tokio::test]
    async fn filter_round_trip() {
        let repo = InMemoryRepository::new();
        assert!(repo.load_filter().await.unwrap().is_none());

        let mut selection = FilterSelection::all(catalog());
        selection.toggle_category("Months");
        repo.save_filter(&selection).await.unwrap();

        let loaded = repo.load_filter().await.unwrap().unwrap();
        assert_eq!(loaded, selection);
    }

    #[test]
    fn score_record_uses_camel_case_wire_names() {
        let board = ScoreBoard::new().record(true);
        let json = serde_json::to_string(&ScoreRecord::from_board(&board)).unwrap();
        assert!(json.contains("currentStreak"));
        assert!(json.contains("bestStreak"));
        assert!(json.contains("totalCorrect"));
        assert!(json.contains("totalAttempts"));
    }

    #[test]
    fn filter_record_drops_unknown_type_strings() {
        let record = FilterRecord {
            categories: vec!["Greetings".to_owned()],
            types: vec!["word".to_owned(), "poem".to_owned()],
        };

        let selection = record.into_selection();
        assert!(selection.contains_type(focal_core::CardType::Word));
        assert_eq!(selection.types().len(), 1);
    }

    #[test]
    fn invalid_score_record_fails_board_conversion() {
        let record = ScoreRecord {
            current_streak: 9,
            best_streak: 1,
            total_correct: 0,
            total_attempts: 0,
        };
        assert!(record.into_board().is_err());
    }
}
