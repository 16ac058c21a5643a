use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use ui::prefs::{provide_preferences, use_preferences};
use ui::time_range::provide_time_range;
use ui::views::{Dashboard, Settings};
use ui::{i18n, t};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Dashboard {},
    #[route("/settings")]
    Settings {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    // Ambient providers for the whole app subtree. The stored language is
    // applied before the first routed view renders.
    let prefs = provide_preferences();
    if let Err(err) = i18n::set_language(&prefs.current().language) {
        warn!("stored language not applied, keeping current selection: {err}");
    }
    provide_time_range();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Shared chrome: brand, localized navigation and the routed page.
#[component]
fn Shell() -> Element {
    // Re-render the nav labels when the language preference changes.
    let _prefs = use_preferences().current();

    rsx! {
        header { class: "navbar",
            div { class: "navbar__brand",
                span { class: "navbar__brand-mark", "Netwatch" }
                span { class: "navbar__brand-subtitle", {t!("tagline")} }
            }
            nav { class: "navbar__links",
                Link { class: "navbar__link", to: Route::Dashboard {}, {t!("nav-dashboard")} }
                Link { class: "navbar__link", to: Route::Settings {}, {t!("nav-settings")} }
            }
        }
        Outlet::<Route> {}
    }
}
