use dioxus::prelude::*;

use crate::prefs::{use_preferences, Layout};
use crate::{i18n, t};

/// Preference editor. Every change goes through the ambient store as a
/// total replacement of the preference value.
#[component]
pub fn Settings() -> Element {
    let mut prefs_ctx = use_preferences();
    let prefs = prefs_ctx.current();
    let langs = i18n::available_languages();

    let on_language = move |evt: dioxus::events::FormEvent| {
        let tag = evt.value();
        if i18n::set_language(&tag).is_ok() {
            let mut next = prefs_ctx.current();
            next.language = tag;
            prefs_ctx.set(next);
        }
    };

    let on_layout = move |evt: dioxus::events::FormEvent| {
        let mut next = prefs_ctx.current();
        next.layout = match evt.value().as_str() {
            "traditional" => Layout::Traditional,
            _ => Layout::Boxed,
        };
        prefs_ctx.set(next);
    };

    rsx! {
        section { class: "page page-settings layout-{prefs.layout}",
            h1 { {t!("settings-title")} }

            div { class: "settings-field",
                label { r#for: "language-select", {t!("settings-language-label")} }
                select {
                    id: "language-select",
                    value: "{prefs.language}",
                    oninput: on_language,
                    { langs.iter().map(|code| {
                        let c = code.clone();
                        rsx! {
                            option { key: "{c}", value: "{c}", "{c}" }
                        }
                    })}
                }
            }

            div { class: "settings-field",
                label { r#for: "layout-select", {t!("settings-layout-label")} }
                select {
                    id: "layout-select",
                    value: "{prefs.layout}",
                    oninput: on_layout,
                    option { value: "boxed", {t!("settings-layout-boxed")} }
                    option { value: "traditional", {t!("settings-layout-traditional")} }
                }
            }
        }
    }
}
