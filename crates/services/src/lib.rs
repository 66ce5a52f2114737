#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth_service;
pub mod error;
pub mod mirror_service;
pub mod practice_service;

pub use focal_core::Clock;

pub use app_services::AppServices;
pub use auth_service::{AuthConfig, AuthService, AuthUser};
pub use error::{AppServicesError, AuthError, MirrorError};
pub use mirror_service::{MirrorConfig, ScoreMirrorService};
pub use practice_service::{PracticeService, PracticeState};
