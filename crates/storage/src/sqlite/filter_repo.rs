use async_trait::async_trait;

use focal_core::FilterSelection;

use crate::repository::{FilterRecord, FilterRepository, StorageError};

use super::{SqliteRepository, keys};

#[async_trait]
impl FilterRepository for SqliteRepository {
    async fn load_filter(&self) -> Result<Option<FilterSelection>, StorageError> {
        let categories = self.kv_get(keys::SELECTED_CATEGORIES).await?;
        let types = self.kv_get(keys::SELECTED_TYPES).await?;

        if categories.is_none() && types.is_none() {
            return Ok(None);
        }

        let record = FilterRecord {
            categories: decode_string_list(categories.as_deref())?,
            types: decode_string_list(types.as_deref())?,
        };

        Ok(Some(record.into_selection()))
    }

    async fn save_filter(&self, selection: &FilterSelection) -> Result<(), StorageError> {
        let record = FilterRecord::from_selection(selection);

        let categories = serde_json::to_string(&record.categories)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let types = serde_json::to_string(&record.types)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        self.kv_put(keys::SELECTED_CATEGORIES, &categories).await?;
        self.kv_put(keys::SELECTED_TYPES, &types).await
    }
}

fn decode_string_list(raw: Option<&str>) -> Result<Vec<String>, StorageError> {
    match raw {
        None => Ok(Vec::new()),
        Some(raw) => {
            serde_json::from_str(raw).map_err(|err| StorageError::Serialization(err.to_string()))
        }
    }
}
