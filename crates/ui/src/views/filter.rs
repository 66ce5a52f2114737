use dioxus::prelude::*;
use dioxus_router::use_navigator;

use focal_core::{FilterSelection, catalog};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[component]
pub fn FilterView() -> Element {
    let ctx = use_context::<AppContext>();
    let practice = ctx.practice();

    let resource = use_resource(move || {
        let practice = practice.clone();
        async move { Ok::<_, ViewError>(practice.load_state().await.filter) }
    });

    let state = view_state_from_resource(&resource);
    rsx! {
        div { class: "page filter-page",
            header { class: "view-header",
                h2 { class: "view-title", "Filter" }
                p { class: "view-subtitle",
                    "Choose which categories and card types to practice. An empty pick falls back to the full deck."
                }
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
                    FilterBoard { initial }
                },
            }
        }
    }
}

#[component]
fn FilterBoard(initial: FilterSelection) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let practice = ctx.practice();

    let mut selection = use_signal(move || initial);
    let mut applying = use_signal(|| false);

    let current = selection();

    let type_chips = catalog().card_types().into_iter().map(|card_type| {
        let class = if current.contains_type(card_type) {
            "type-chip type-chip--selected"
        } else {
            "type-chip"
        };
        rsx! {
            button {
                key: "{card_type}",
                class: "{class}",
                r#type: "button",
                onclick: move |_| selection.write().toggle_type(card_type),
                "{card_type}"
            }
        }
    });

    let category_rows = catalog().categories().into_iter().map(|category| {
        let selected = current.contains_category(&category);
        let class = if selected {
            "category-row category-row--selected"
        } else {
            "category-row"
        };
        let toggle_target = category.clone();
        rsx! {
            button {
                key: "{category}",
                class: "{class}",
                r#type: "button",
                onclick: move |_| selection.write().toggle_category(&toggle_target),
                span { class: "category-name", "{category}" }
                span { class: "category-check", if selected { "✓" } else { "" } }
            }
        }
    });

    rsx! {
        section { class: "filter-section",
            h3 { class: "filter-section-title", "Content Type" }
            div { class: "type-chip-row",
                {type_chips}
            }
        }

        section { class: "filter-section",
            div { class: "filter-section-header",
                h3 { class: "filter-section-title", "Categories" }
                div { class: "filter-bulk-actions",
                    button {
                        class: "btn btn-link",
                        r#type: "button",
                        onclick: move |_| selection.write().select_all_categories(catalog()),
                        "Select All"
                    }
                    button {
                        class: "btn btn-link",
                        r#type: "button",
                        onclick: move |_| selection.write().clear_categories(),
                        "Clear All"
                    }
                }
            }
            div { class: "category-list",
                {category_rows}
            }
        }

        div { class: "filter-actions",
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| {
                    let mut chosen = selection.write();
                    chosen.select_all_categories(catalog());
                    chosen.select_all_types(catalog());
                },
                "Reset"
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: applying(),
                onclick: move |_| {
                    let practice = practice.clone();
                    let chosen = selection();
                    applying.set(true);
                    spawn(async move {
                        let _deck = practice.apply_filter(&chosen).await;
                        let _ = navigator.push(Route::Practice {});
                    });
                },
                if applying() { "Applying..." } else { "Apply Filters" }
            }
        }
    }
}
