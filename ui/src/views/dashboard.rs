use dioxus::prelude::*;
use time::Duration;

use crate::dashboard::TopDomains;
use crate::prefs::use_preferences;
use crate::t;
use crate::time_range::{use_time_range, TimeRange, TimeRangeState};

#[component]
pub fn Dashboard() -> Element {
    let prefs = use_preferences().current();
    let range_ctx = use_time_range();
    let selected = range_ctx.selected();

    rsx! {
        section { class: "page page-dashboard layout-{prefs.layout}",
            h1 { {t!("dashboard-title")} }

            div { class: "range-picker",
                {range_button(range_ctx, selected.is_none(), None, t!("range-all"))}
                {range_button(
                    range_ctx,
                    is_window(selected, 24),
                    Some(Duration::hours(24)),
                    t!("range-day"),
                )}
                {range_button(
                    range_ctx,
                    is_window(selected, 7 * 24),
                    Some(Duration::hours(7 * 24)),
                    t!("range-week"),
                )}
            }

            TopDomains {}
        }
    }
}

fn range_button(
    mut range_ctx: TimeRangeState,
    active: bool,
    window: Option<Duration>,
    label: String,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: format!(
                "range-picker__option {}",
                if active { "range-picker__option--active" } else { "" }
            ),
            onclick: move |_| range_ctx.select(window.map(TimeRange::ending_now)),
            "{label}"
        }
    }
}

fn is_window(selected: Option<TimeRange>, hours: i64) -> bool {
    selected
        .map(|range| range.until - range.from == hours * 3600)
        .unwrap_or(false)
}
