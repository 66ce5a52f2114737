use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{AccountView, FilterView, PracticeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", PracticeView)] Practice {},
        #[route("/filter", FilterView)] Filter {},
        #[route("/account", AccountView)] Account {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Focal" }
            p { class: "sidebar-tagline", "Irish flashcards" }
            ul {
                li { Link { to: Route::Practice {}, "Practice" } }
                li { Link { to: Route::Filter {}, "Filter" } }
                li { Link { to: Route::Account {}, "Account" } }
            }
        }
    }
}
