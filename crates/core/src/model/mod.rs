pub mod card;
pub mod filter;
pub mod score;

pub use card::{CardError, CardType, CardTypeParseError, Flashcard};
pub use filter::FilterSelection;
pub use score::{ScoreBoard, ScoreError};
