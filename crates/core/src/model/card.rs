use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── CARD TYPES ────────────────────────────────────────────────────────────────
//

/// Content kind of a flashcard: a single vocabulary word or a full sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Word,
    Sentence,
}

impl CardType {
    pub const ALL: [CardType; 2] = [CardType::Word, CardType::Sentence];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CardType::Word => "word",
            CardType::Sentence => "sentence",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown card type: {0}")]
pub struct CardTypeParseError(String);

impl FromStr for CardType {
    type Err = CardTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "word" => Ok(CardType::Word),
            "sentence" => Ok(CardType::Sentence),
            other => Err(CardTypeParseError(other.to_owned())),
        }
    }
}

//
// ─── FLASHCARD ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("card front text is empty")]
    EmptyFront,

    #[error("card back text is empty")]
    EmptyBack,

    #[error("card category is empty")]
    EmptyCategory,
}

/// A single Irish/English term pair.
///
/// Cards are immutable once constructed; the catalog is loaded once and
/// treated as a constant table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    front: String,
    back: String,
    category: String,
    card_type: CardType,
}

impl Flashcard {
    /// Build a card, rejecting blank text on either face or a blank category.
    ///
    /// # Errors
    ///
    /// Returns `CardError` if any text field is empty after trimming.
    pub fn new(
        front: impl Into<String>,
        back: impl Into<String>,
        category: impl Into<String>,
        card_type: CardType,
    ) -> Result<Self, CardError> {
        let front = front.into();
        let back = back.into();
        let category = category.into();

        if front.trim().is_empty() {
            return Err(CardError::EmptyFront);
        }
        if back.trim().is_empty() {
            return Err(CardError::EmptyBack);
        }
        if category.trim().is_empty() {
            return Err(CardError::EmptyCategory);
        }

        Ok(Self {
            front,
            back,
            category,
            card_type,
        })
    }

    /// The prompt-language (Irish) face.
    #[must_use]
    pub fn front(&self) -> &str {
        &self.front
    }

    /// The answer-language (English) face.
    #[must_use]
    pub fn back(&self) -> &str {
        &self.back
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.card_type
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_fails_if_front_blank() {
        let err = Flashcard::new("   ", "Hello", "Greetings", CardType::Word).unwrap_err();
        assert_eq!(err, CardError::EmptyFront);
    }

    #[test]
    fn card_fails_if_back_blank() {
        let err = Flashcard::new("Dia duit", " ", "Greetings", CardType::Word).unwrap_err();
        assert_eq!(err, CardError::EmptyBack);
    }

    #[test]
    fn card_fails_if_category_blank() {
        let err = Flashcard::new("Dia duit", "Hello", "", CardType::Word).unwrap_err();
        assert_eq!(err, CardError::EmptyCategory);
    }

    #[test]
    fn valid_card_exposes_fields() {
        let card = Flashcard::new("Slán", "Goodbye", "Greetings", CardType::Word).unwrap();
        assert_eq!(card.front(), "Slán");
        assert_eq!(card.back(), "Goodbye");
        assert_eq!(card.category(), "Greetings");
        assert_eq!(card.card_type(), CardType::Word);
    }

    #[test]
    fn card_type_round_trips_through_str() {
        for card_type in CardType::ALL {
            assert_eq!(card_type.as_str().parse::<CardType>().unwrap(), card_type);
        }
        assert!("phrase".parse::<CardType>().is_err());
    }
}
