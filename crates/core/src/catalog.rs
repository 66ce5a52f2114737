use std::sync::OnceLock;

use crate::model::card::{CardType, Flashcard};

/// The authored Irish/English term list, in authoring order.
///
/// Entries are (front, back, category, type). The list is fixed at build
/// time; nothing mutates it at runtime.
const AUTHORED: &[(&str, &str, &str, CardType)] = &[
    // Greetings and common phrases
    ("Dia duit", "Hello", "Greetings", CardType::Word),
    ("Slán", "Goodbye", "Greetings", CardType::Word),
    ("Go raibh maith agat", "Thank you", "Common phrases", CardType::Word),
    ("Le do thoil", "Please", "Common phrases", CardType::Word),
    ("Tá fáilte romhat", "You're welcome", "Common phrases", CardType::Word),
    ("Gabh mo leithscéal", "Excuse me", "Common phrases", CardType::Word),
    ("Tá brón orm", "I'm sorry", "Common phrases", CardType::Word),
    ("Cén t-ainm atá ort?", "What is your name?", "Common phrases", CardType::Word),
    ("Is mise...", "I am...", "Common phrases", CardType::Word),
    // Basic expressions
    ("Is maith liom", "I like", "Basic Expressions", CardType::Word),
    ("Is breá liom", "I love", "Basic Expressions", CardType::Word),
    ("Ní maith liom", "I don't like", "Basic Expressions", CardType::Word),
    ("Is fuath liom", "I hate", "Basic Expressions", CardType::Word),
    ("Tá mé", "I am", "Basic Expressions", CardType::Word),
    ("Níl mé", "I am not", "Basic Expressions", CardType::Word),
    ("Tá sé", "He/It is", "Basic Expressions", CardType::Word),
    ("Tá sí", "She/It is", "Basic Expressions", CardType::Word),
    // Shapes
    ("Cearnóg", "Square", "Shapes", CardType::Word),
    ("Ciorcal", "Circle", "Shapes", CardType::Word),
    ("Triantán", "Triangle", "Shapes", CardType::Word),
    ("Dronuilleog", "Rectangle", "Shapes", CardType::Word),
    // Days of the week
    ("Dé Luain", "Monday", "Days", CardType::Word),
    ("Dé Máirt", "Tuesday", "Days", CardType::Word),
    ("Dé Céadaoin", "Wednesday", "Days", CardType::Word),
    ("Déardaoin", "Thursday", "Days", CardType::Word),
    ("Dé hAoine", "Friday", "Days", CardType::Word),
    ("Dé Sathairn", "Saturday", "Days", CardType::Word),
    ("Dé Domhnaigh", "Sunday", "Days", CardType::Word),
    // Months
    ("Eanáir", "January", "Months", CardType::Word),
    ("Feabhra", "February", "Months", CardType::Word),
    ("Márta", "March", "Months", CardType::Word),
    ("Aibreán", "April", "Months", CardType::Word),
    ("Bealtaine", "May", "Months", CardType::Word),
    ("Meitheamh", "June", "Months", CardType::Word),
    ("Iúil", "July", "Months", CardType::Word),
    ("Lúnasa", "August", "Months", CardType::Word),
    ("Meán Fómhair", "September", "Months", CardType::Word),
    ("Deireadh Fómhair", "October", "Months", CardType::Word),
    ("Samhain", "November", "Months", CardType::Word),
    ("Nollaig", "December", "Months", CardType::Word),
    // Seasons
    ("Earrach", "Spring", "Seasons", CardType::Word),
    ("Samhradh", "Summer", "Seasons", CardType::Word),
    ("Fómhar", "Autumn", "Seasons", CardType::Word),
    ("Geimhreadh", "Winter", "Seasons", CardType::Word),
    // Holidays
    ("Nollaig", "Christmas", "Holidays", CardType::Word),
    ("Lá Fhéile Pádraig", "St. Patrick's Day", "Holidays", CardType::Word),
    // Useful sentences
    ("Cá bhfuil an leithreas?", "Where is the toilet?", "Useful Sentences", CardType::Sentence),
    ("Níl mé ag tuiscint", "I don't understand", "Useful Sentences", CardType::Sentence),
    ("Tá mé ag foghlaim Gaeilge", "I am learning Irish", "Useful Sentences", CardType::Sentence),
    ("Cén t-am é?", "What time is it?", "Useful Sentences", CardType::Sentence),
    (
        "Cá bhfuil an stáisiún traenach?",
        "Where is the train station?",
        "Useful Sentences",
        CardType::Sentence,
    ),
    (
        "Ba mhaith liom caife, le do thoil",
        "I would like a coffee, please",
        "Useful Sentences",
        CardType::Sentence,
    ),
    ("An féidir leat cabhrú liom?", "Can you help me?", "Useful Sentences", CardType::Sentence),
    (
        "Tá mé go maith, go raibh maith agat",
        "I am fine, thank you",
        "Useful Sentences",
        CardType::Sentence,
    ),
    // Restaurant sentences
    (
        "Ba mhaith liom bord a chur in áirithe",
        "I would like to reserve a table",
        "Restaurant Phrases",
        CardType::Sentence,
    ),
    ("An biachlar, le do thoil", "The menu, please", "Restaurant Phrases", CardType::Sentence),
    ("Tá ocras orm", "I am hungry", "Restaurant Phrases", CardType::Sentence),
    ("Tá tart orm", "I am thirsty", "Restaurant Phrases", CardType::Sentence),
    ("An bille, le do thoil", "The bill, please", "Restaurant Phrases", CardType::Sentence),
    (
        "Bhí an béile go hálainn",
        "The meal was delicious",
        "Restaurant Phrases",
        CardType::Sentence,
    ),
    // Travel sentences
    ("Cá bhfuil an t-óstán?", "Where is the hotel?", "Travel Phrases", CardType::Sentence),
    ("Cá bhfuil an aerfort?", "Where is the airport?", "Travel Phrases", CardType::Sentence),
    (
        "Cén treo go dtí an lár?",
        "Which way to the center?",
        "Travel Phrases",
        CardType::Sentence,
    ),
    ("Tá mé caillte", "I am lost", "Travel Phrases", CardType::Sentence),
    (
        "Cén bus a théann go dtí...?",
        "Which bus goes to...?",
        "Travel Phrases",
        CardType::Sentence,
    ),
    (
        "Cé mhéad a chosnaíonn ticéad?",
        "How much does a ticket cost?",
        "Travel Phrases",
        CardType::Sentence,
    ),
    // Emergency sentences
    ("Cabhair!", "Help!", "Emergency Phrases", CardType::Sentence),
    ("Tá gá le dochtúir", "A doctor is needed", "Emergency Phrases", CardType::Sentence),
    ("Glaoigh ar otharcharr", "Call an ambulance", "Emergency Phrases", CardType::Sentence),
    ("Tá mé tinn", "I am sick", "Emergency Phrases", CardType::Sentence),
    (
        "Cá bhfuil an cógaslann is gaire?",
        "Where is the nearest pharmacy?",
        "Emergency Phrases",
        CardType::Sentence,
    ),
];

/// The fixed, compiled-in card table plus derived index helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    cards: Vec<Flashcard>,
}

impl Catalog {
    fn build() -> Self {
        let cards = AUTHORED
            .iter()
            .map(|&(front, back, category, card_type)| {
                Flashcard::new(front, back, category, card_type)
                    .expect("authored catalog entries are well-formed")
            })
            .collect();
        Self { cards }
    }

    /// Every card, in authoring order.
    #[must_use]
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Distinct categories, in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for card in &self.cards {
            if !seen.iter().any(|c: &String| c == card.category()) {
                seen.push(card.category().to_owned());
            }
        }
        seen
    }

    /// Distinct card types, in first-seen order.
    #[must_use]
    pub fn card_types(&self) -> Vec<CardType> {
        let mut seen = Vec::new();
        for card in &self.cards {
            if !seen.contains(&card.card_type()) {
                seen.push(card.card_type());
            }
        }
        seen
    }
}

/// The process-wide catalog. Built on first access, immutable afterwards.
#[must_use]
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(Catalog::build)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
