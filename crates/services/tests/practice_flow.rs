use std::sync::Arc;

use async_trait::async_trait;

use focal_core::{CardType, Clock, FilterSelection, ScoreBoard, StudySession, catalog};
use services::{AuthService, PracticeService, ScoreMirrorService};
use storage::repository::{
    FilterRepository, InMemoryRepository, ScoreRepository, StorageError,
};

fn practice_over(
    scores: Arc<dyn ScoreRepository>,
    filters: Arc<dyn FilterRepository>,
) -> PracticeService {
    let mirror = Arc::new(ScoreMirrorService::new(None));
    let auth = Arc::new(AuthService::new(None, Clock::system(), Arc::clone(&mirror)));
    PracticeService::new(scores, filters, auth, mirror)
}

fn in_memory_practice() -> (PracticeService, InMemoryRepository) {
    let repo = InMemoryRepository::new();
    let practice = practice_over(Arc::new(repo.clone()), Arc::new(repo.clone()));
    (practice, repo)
}

/// Repository double whose every call fails, for exercising the
/// log-and-continue failure policy.
#[derive(Clone, Default)]
struct FailingRepository;

#[async_trait]
impl ScoreRepository for FailingRepository {
    async fn load_scores(&self) -> Result<Option<ScoreBoard>, StorageError> {
        Err(StorageError::Connection("storage offline".into()))
    }

    async fn save_scores(&self, _board: &ScoreBoard) -> Result<(), StorageError> {
        Err(StorageError::Connection("storage offline".into()))
    }
}

#[async_trait]
impl FilterRepository for FailingRepository {
    async fn load_filter(&self) -> Result<Option<FilterSelection>, StorageError> {
        Err(StorageError::Connection("storage offline".into()))
    }

    async fn save_filter(&self, _selection: &FilterSelection) -> Result<(), StorageError> {
        Err(StorageError::Connection("storage offline".into()))
    }
}

#[tokio::test]
async fn fresh_install_loads_defaults() {
    let (practice, _repo) = in_memory_practice();

    let state = practice.load_state().await;
    assert_eq!(state.scores, ScoreBoard::new());
    assert_eq!(state.filter, FilterSelection::all(catalog()));
    assert_eq!(state.deck.len(), catalog().len());
}

#[tokio::test]
async fn answers_persist_across_reload() {
    let (practice, _repo) = in_memory_practice();

    let state = practice.load_state().await;
    let mut session = StudySession::new(state.deck);
    let mut scores = state.scores;

    for &correct in &[true, true, false, true] {
        scores = session.answer(&scores, correct);
        practice.persist_scores(&scores).await;
    }

    let reloaded = practice.load_state().await;
    assert_eq!(reloaded.scores.current_streak(), 1);
    assert_eq!(reloaded.scores.best_streak(), 2);
    assert_eq!(reloaded.scores.total_correct(), 3);
    assert_eq!(reloaded.scores.total_attempts(), 4);
}

#[tokio::test]
async fn filter_apply_persists_and_narrows_deck() {
    let (practice, _repo) = in_memory_practice();

    let mut selection = FilterSelection::all(catalog());
    for category in catalog().categories() {
        if category != "Greetings" {
            selection.toggle_category(&category);
        }
    }
    selection.toggle_type(CardType::Sentence);

    let deck = practice.apply_filter(&selection).await;
    assert!(!deck.is_empty());
    assert!(deck.iter().all(|card| card.category() == "Greetings"));
    assert!(deck.iter().all(|card| card.card_type() == CardType::Word));

    // The selection comes back on the next launch.
    let reloaded = practice.load_state().await;
    assert_eq!(reloaded.filter, selection);
    assert_eq!(reloaded.deck, deck);
}

#[tokio::test]
async fn excluding_everything_falls_back_to_full_deck() {
    let (practice, _repo) = in_memory_practice();

    let mut selection = FilterSelection::all(catalog());
    selection.clear_categories();

    let deck = practice.apply_filter(&selection).await;
    assert_eq!(deck.len(), catalog().len());
}

#[tokio::test]
async fn storage_failures_never_interrupt_practice() {
    let repo = FailingRepository;
    let practice = practice_over(Arc::new(repo.clone()), Arc::new(repo));

    // Loads fall open to defaults.
    let state = practice.load_state().await;
    assert_eq!(state.scores, ScoreBoard::new());
    assert_eq!(state.filter, FilterSelection::all(catalog()));
    assert_eq!(state.deck.len(), catalog().len());

    // Saves are swallowed; the in-memory tally keeps advancing.
    let mut session = StudySession::new(state.deck);
    let scores = session.answer(&state.scores, true);
    practice.persist_scores(&scores).await;
    let scores = session.answer(&scores, true);
    practice.persist_scores(&scores).await;

    assert_eq!(scores.total_attempts(), 2);
    assert_eq!(scores.current_streak(), 2);

    let deck = practice.apply_filter(&state.filter).await;
    assert_eq!(deck.len(), catalog().len());
}
