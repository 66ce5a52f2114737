#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod session;
pub mod time;

pub use catalog::{Catalog, catalog};
pub use model::{CardError, CardType, CardTypeParseError, Flashcard, FilterSelection, ScoreBoard, ScoreError};
pub use session::StudySession;
pub use time::Clock;
