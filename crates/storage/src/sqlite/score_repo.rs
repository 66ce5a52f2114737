use async_trait::async_trait;

use focal_core::ScoreBoard;

use crate::repository::{ScoreRecord, ScoreRepository, StorageError};

use super::{SqliteRepository, keys};

#[async_trait]
impl ScoreRepository for SqliteRepository {
    async fn load_scores(&self) -> Result<Option<ScoreBoard>, StorageError> {
        let Some(raw) = self.kv_get(keys::SCORES).await? else {
            return Ok(None);
        };

        let record: ScoreRecord = serde_json::from_str(&raw)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        record
            .into_board()
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn save_scores(&self, board: &ScoreBoard) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&ScoreRecord::from_board(board))
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.kv_put(keys::SCORES, &raw).await
    }
}
