use dioxus::prelude::*;
use dioxus_router::use_navigator;

use focal_core::StudySession;
use services::PracticeState;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{map_practice_card, map_score_panel, progress_label};

#[component]
pub fn PracticeView() -> Element {
    let ctx = use_context::<AppContext>();
    let practice = ctx.practice();

    let resource = use_resource(move || {
        let practice = practice.clone();
        async move { Ok::<_, ViewError>(practice.load_state().await) }
    });

    let state = view_state_from_resource(&resource);
    rsx! {
        div { class: "page practice-page",
            header { class: "view-header",
                h2 { class: "view-title", "Practice" }
                p { class: "view-subtitle", "Tap the card or hit Flip to reveal the English side." }
            }
            div { class: "view-divider" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(initial) => rsx! {
                    PracticeBoard { initial }
                },
            }
        }
    }
}

#[component]
fn PracticeBoard(initial: PracticeState) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let practice = ctx.practice();

    let deck = initial.deck.clone();
    let starting_scores = initial.scores;
    let mut session = use_signal(move || StudySession::new(deck));
    let mut scores = use_signal(move || starting_scores);

    let snapshot = session();
    let panel = map_score_panel(&scores());

    let Some(card) = snapshot.current_card().cloned() else {
        // Degenerate deck state; with a non-empty catalog the filter
        // fallback keeps this unreachable, but render it rather than fault.
        return rsx! {
            div { class: "practice-empty",
                p { class: "practice-empty-text", "No flashcards available." }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Filter {});
                    },
                    "Adjust Filters"
                }
            }
        };
    };

    let vm = map_practice_card(&card);
    let position = progress_label(snapshot.position(), snapshot.deck_len());
    let flipped_class = if snapshot.is_flipped() {
        "flashcard flashcard--flipped"
    } else {
        "flashcard"
    };

    let practice_correct = practice.clone();
    let practice_incorrect = practice;

    rsx! {
        div { class: "score-panel",
            div { class: "score-stat",
                span { class: "score-value score-value--streak", "{panel.current_streak}" }
                span { class: "score-label", "Streak" }
            }
            div { class: "score-stat",
                span { class: "score-value score-value--best", "{panel.best_streak}" }
                span { class: "score-label", "Best" }
            }
            div { class: "score-stat",
                span { class: "score-value", "{panel.accuracy}" }
                span { class: "score-label", "Accuracy" }
            }
            div { class: "score-stat",
                span { class: "score-value", "{panel.attempts}" }
                span { class: "score-label", "Correct" }
            }
        }

        div { class: "badge-row",
            span { class: "category-badge", "{vm.category}" }
            span { class: "{vm.type_class}", "{vm.type_label}" }
        }

        div {
            class: "{flipped_class}",
            onclick: move |_| session.write().flip(),
            div { class: "flashcard-face flashcard-face--front",
                p { class: "flashcard-text", "{vm.front}" }
                p { class: "flashcard-hint", "Irish" }
            }
            div { class: "flashcard-face flashcard-face--back",
                p { class: "flashcard-text", "{vm.back}" }
                p { class: "flashcard-hint", "English" }
            }
        }

        p { class: "practice-progress", "{position}" }

        button {
            class: "btn btn-secondary flip-button",
            r#type: "button",
            onclick: move |_| session.write().flip(),
            "Flip Card"
        }

        div { class: "answer-row",
            button {
                class: "btn answer-button answer-button--incorrect",
                r#type: "button",
                onclick: move |_| {
                    let next = session.write().answer(&scores(), false);
                    scores.set(next);
                    let practice = practice_incorrect.clone();
                    spawn(async move {
                        practice.persist_scores(&next).await;
                    });
                },
                "Incorrect"
            }
            button {
                class: "btn answer-button answer-button--correct",
                r#type: "button",
                onclick: move |_| {
                    let next = session.write().answer(&scores(), true);
                    scores.set(next);
                    let practice = practice_correct.clone();
                    spawn(async move {
                        practice.persist_scores(&next).await;
                    });
                },
                "Correct"
            }
        }

        button {
            class: "btn btn-primary filter-link",
            r#type: "button",
            onclick: move |_| {
                let _ = navigator.push(Route::Filter {});
            },
            "Filter Cards"
        }
    }
}
