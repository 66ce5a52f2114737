use crate::model::card::Flashcard;
use crate::model::score::ScoreBoard;

/// The active practice deck: which card is showing, which face is up, and
/// how answers feed the score tally.
///
/// All transitions are synchronous transformations driven one at a time by
/// the presentation layer; nothing here touches storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudySession {
    deck: Vec<Flashcard>,
    current: usize,
    flipped: bool,
}

impl StudySession {
    /// Start at the first card, front face up.
    #[must_use]
    pub fn new(deck: Vec<Flashcard>) -> Self {
        Self {
            deck,
            current: 0,
            flipped: false,
        }
    }

    /// Swap in a freshly filtered deck, restarting at the first card.
    ///
    /// Call this whenever the filter selection changes the deck's identity.
    pub fn replace_deck(&mut self, deck: Vec<Flashcard>) {
        self.deck = deck;
        self.current = 0;
        self.flipped = false;
    }

    /// Toggle which face is up. Two flips restore the original state.
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Record an answer: returns the next score board, returns to the front
    /// face, and advances to the next card (wrapping at the end of the deck).
    ///
    /// Answering does not require a flip first; a user may answer from
    /// memory without ever revealing the back, and the tally still applies.
    /// With an empty deck the index is left at 0.
    #[must_use]
    pub fn answer(&mut self, scores: &ScoreBoard, was_correct: bool) -> ScoreBoard {
        let next = scores.record(was_correct);
        self.flipped = false;
        if !self.deck.is_empty() {
            self.current = (self.current + 1) % self.deck.len();
        }
        next
    }

    /// The card currently presented, or `None` for an empty deck.
    #[must_use]
    pub fn current_card(&self) -> Option<&Flashcard> {
        self.deck.get(self.current)
    }

    #[must_use]
    pub fn deck(&self) -> &[Flashcard] {
        &self.deck
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Zero-based position of the current card.
    #[must_use]
    pub fn position(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
