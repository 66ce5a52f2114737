use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::auth_service::AuthService;
use crate::error::AppServicesError;
use crate::mirror_service::ScoreMirrorService;
use crate::practice_service::PracticeService;

/// Assembles the app-facing services over a storage backend.
#[derive(Clone)]
pub struct AppServices {
    practice: Arc<PracticeService>,
    auth: Arc<AuthService>,
    mirror: Arc<ScoreMirrorService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage, with the identity and
    /// mirror clients configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::with_storage(&storage, clock))
    }

    /// Build services over an already constructed storage backend.
    #[must_use]
    pub fn with_storage(storage: &Storage, clock: Clock) -> Self {
        let mirror = Arc::new(ScoreMirrorService::from_env());
        let auth = Arc::new(AuthService::from_env(clock, Arc::clone(&mirror)));
        let practice = Arc::new(PracticeService::new(
            Arc::clone(&storage.scores),
            Arc::clone(&storage.filters),
            Arc::clone(&auth),
            Arc::clone(&mirror),
        ));

        Self {
            practice,
            auth,
            mirror,
        }
    }

    #[must_use]
    pub fn practice(&self) -> Arc<PracticeService> {
        Arc::clone(&self.practice)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn mirror(&self) -> Arc<ScoreMirrorService> {
        Arc::clone(&self.mirror)
    }
}
