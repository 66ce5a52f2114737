use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::model::card::{CardType, Flashcard};

/// The user's category/type inclusion sets.
///
/// Both sets are subsets of the values present in the catalog. A selection
/// that would exclude every card is not an error: `apply` falls open to the
/// full input rather than ever producing an empty deck.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    categories: BTreeSet<String>,
    types: BTreeSet<CardType>,
}

impl FilterSelection {
    /// Every category and every type in the catalog, the first-use default.
    #[must_use]
    pub fn all(catalog: &Catalog) -> Self {
        Self {
            categories: catalog.categories().into_iter().collect(),
            types: catalog.card_types().into_iter().collect(),
        }
    }

    /// Assemble a selection from previously persisted values.
    ///
    /// Values unknown to the catalog are not filtered out here; call
    /// `retain_known` after rehydration to restore the subset invariant.
    #[must_use]
    pub fn from_parts(
        categories: impl IntoIterator<Item = String>,
        types: impl IntoIterator<Item = CardType>,
    ) -> Self {
        Self {
            categories: categories.into_iter().collect(),
            types: types.into_iter().collect(),
        }
    }

    /// Drop selected values that no longer exist in the catalog.
    pub fn retain_known(&mut self, catalog: &Catalog) {
        let known_categories: BTreeSet<String> = catalog.categories().into_iter().collect();
        let known_types: BTreeSet<CardType> = catalog.card_types().into_iter().collect();
        self.categories.retain(|c| known_categories.contains(c));
        self.types.retain(|t| known_types.contains(t));
    }

    #[must_use]
    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    #[must_use]
    pub fn types(&self) -> &BTreeSet<CardType> {
        &self.types
    }

    #[must_use]
    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    #[must_use]
    pub fn contains_type(&self, card_type: CardType) -> bool {
        self.types.contains(&card_type)
    }

    /// Add the category if absent, remove it if present.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.categories.remove(category) {
            self.categories.insert(category.to_owned());
        }
    }

    /// Add the type if absent, remove it if present.
    pub fn toggle_type(&mut self, card_type: CardType) {
        if !self.types.remove(&card_type) {
            self.types.insert(card_type);
        }
    }

    pub fn select_all_categories(&mut self, catalog: &Catalog) {
        self.categories = catalog.categories().into_iter().collect();
    }

    pub fn clear_categories(&mut self) {
        self.categories.clear();
    }

    pub fn select_all_types(&mut self, catalog: &Catalog) {
        self.types = catalog.card_types().into_iter().collect();
    }

    pub fn clear_types(&mut self) {
        self.types.clear();
    }

    /// Cards whose category AND type are both selected, in input order.
    ///
    /// If nothing matches (including when either set is empty), the full
    /// input is returned unchanged so the deck is never empty for a
    /// non-empty catalog.
    #[must_use]
    pub fn apply(&self, cards: &[Flashcard]) -> Vec<Flashcard> {
        let filtered: Vec<Flashcard> = cards
            .iter()
            .filter(|card| {
                self.categories.contains(card.category()) && self.types.contains(&card.card_type())
            })
            .cloned()
            .collect();

        if filtered.is_empty() {
            return cards.to_vec();
        }
        filtered
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    fn sample_cards() -> Vec<Flashcard> {
        vec![
            Flashcard::new("Dia duit", "Hello", "Greetings", CardType::Word).unwrap(),
            Flashcard::new("Slán", "Goodbye", "Greetings", CardType::Word).unwrap(),
            Flashcard::new("Cabhair!", "Help!", "Emergency Phrases", CardType::Sentence).unwrap(),
        ]
    }

    #[test]
    fn all_selection_keeps_every_card() {
        let cards = sample_cards();
        let selection = FilterSelection::all(catalog());
        assert_eq!(selection.apply(catalog().cards()).len(), catalog().len());
        assert_eq!(selection.apply(&cards), cards);
    }

    #[test]
    fn apply_matches_on_category_and_type() {
        let cards = sample_cards();
        let selection = FilterSelection::from_parts(
            ["Greetings".to_owned()],
            [CardType::Word],
        );

        let deck = selection.apply(&cards);
        assert_eq!(deck, cards[..2].to_vec());
    }

    #[test]
    fn empty_selection_falls_back_to_full_input() {
        let cards = sample_cards();

        let no_categories = FilterSelection::from_parts([], CardType::ALL);
        assert_eq!(no_categories.apply(&cards), cards);

        let no_types = FilterSelection::from_parts(["Greetings".to_owned()], []);
        assert_eq!(no_types.apply(&cards), cards);

        let nothing = FilterSelection::default();
        assert_eq!(nothing.apply(&cards), cards);
    }

    #[test]
    fn disjoint_selection_falls_back_to_full_input() {
        let cards = sample_cards();
        // Greetings cards are words, so this combination matches nothing.
        let selection = FilterSelection::from_parts(
            ["Greetings".to_owned()],
            [CardType::Sentence],
        );
        assert_eq!(selection.apply(&cards), cards);
    }

    #[test]
    fn toggle_category_twice_restores_selection() {
        let mut selection = FilterSelection::all(catalog());
        let original = selection.clone();

        selection.toggle_category("Days");
        assert!(!selection.contains_category("Days"));
        selection.toggle_category("Days");
        assert_eq!(selection, original);
    }

    #[test]
    fn toggle_type_twice_restores_selection() {
        let mut selection = FilterSelection::all(catalog());
        let original = selection.clone();

        selection.toggle_type(CardType::Sentence);
        assert!(!selection.contains_type(CardType::Sentence));
        selection.toggle_type(CardType::Sentence);
        assert_eq!(selection, original);
    }

    #[test]
    fn bulk_helpers_select_and_clear() {
        let mut selection = FilterSelection::default();

        selection.select_all_categories(catalog());
        selection.select_all_types(catalog());
        assert_eq!(selection, FilterSelection::all(catalog()));

        selection.clear_categories();
        selection.clear_types();
        assert_eq!(selection, FilterSelection::default());
    }

    #[test]
    fn retain_known_drops_stale_values() {
        let mut selection = FilterSelection::from_parts(
            ["Greetings".to_owned(), "Retired Category".to_owned()],
            CardType::ALL,
        );

        selection.retain_known(catalog());
        assert!(selection.contains_category("Greetings"));
        assert!(!selection.contains_category("Retired Category"));
        assert_eq!(selection.types().len(), CardType::ALL.len());
    }
}
