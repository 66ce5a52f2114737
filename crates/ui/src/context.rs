use std::sync::Arc;

use services::{AuthService, PracticeService};

/// What the composition root must provide for the views to run.
pub trait UiApp: Send + Sync {
    fn practice(&self) -> Arc<PracticeService>;
    fn auth(&self) -> Arc<AuthService>;
}

#[derive(Clone)]
pub struct AppContext {
    practice: Arc<PracticeService>,
    auth: Arc<AuthService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            practice: app.practice(),
            auth: app.auth(),
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
}

/// Build an `AppContext` from a UI-facing app implementation.
///
/// The context is provided by the application composition root
/// (`crates/app`) via the launch builder.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
