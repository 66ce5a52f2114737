use focal_core::{CardType, Flashcard, ScoreBoard};

/// Render-ready card: both faces plus badge labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeCardVm {
    pub front: String,
    pub back: String,
    pub category: String,
    pub type_label: &'static str,
    pub type_class: &'static str,
}

#[must_use]
pub fn map_practice_card(card: &Flashcard) -> PracticeCardVm {
    PracticeCardVm {
        front: card.front().to_owned(),
        back: card.back().to_owned(),
        category: card.category().to_owned(),
        type_label: card.card_type().as_str(),
        type_class: match card.card_type() {
            CardType::Word => "type-badge type-badge--word",
            CardType::Sentence => "type-badge type-badge--sentence",
        },
    }
}

/// Render-ready score panel labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScorePanelVm {
    pub current_streak: String,
    pub best_streak: String,
    pub accuracy: String,
    pub attempts: String,
}

#[must_use]
pub fn map_score_panel(board: &ScoreBoard) -> ScorePanelVm {
    ScorePanelVm {
        current_streak: board.current_streak().to_string(),
        best_streak: board.best_streak().to_string(),
        accuracy: format!("{}%", board.accuracy_percent()),
        attempts: format!("{} / {}", board.total_correct(), board.total_attempts()),
    }
}

/// "Card 3 of 72" style position indicator.
#[must_use]
pub fn progress_label(position: usize, deck_len: usize) -> String {
    if deck_len == 0 {
        return "No cards".to_owned();
    }
    format!("Card {} of {deck_len}", position + 1)
}
