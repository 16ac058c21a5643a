//! Generic table shell: owns loading-state sequencing and renders the
//! title, headers, rows or the empty/error states supplied by a report.

use api::TopDomainsPayload;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::dashboard::{FetchState, ReportDataset, ReportQuery, RequestSequence};
use crate::t;

#[component]
pub fn TopTable(
    title: String,
    headers: Vec<String>,
    empty_message: String,
    query: ReportQuery,
    transform: Callback<TopDomainsPayload, ReportDataset>,
    is_empty: Callback<ReportDataset, bool>,
    rows: Callback<ReportDataset, Element>,
) -> Element {
    let mut state = use_signal(|| FetchState::<ReportDataset>::Idle);
    // Token source for in-flight fetches; resolutions carrying a
    // superseded token are dropped instead of overwriting newer state.
    let mut requests = use_signal(RequestSequence::default);

    use_effect(use_reactive!(|query| {
        let token = requests.write().issue();
        state.set(FetchState::Loading);

        spawn(async move {
            let outcome = query.run().await;
            if !requests.peek().is_current(token) {
                debug!("dropping stale report response (token {token})");
                return;
            }
            match outcome {
                Ok(payload) => state.set(FetchState::Success(transform.call(payload))),
                Err(err) => state.set(FetchState::Error(err.to_string())),
            }
        });
    }));

    let body = match state() {
        FetchState::Idle | FetchState::Loading => rsx! {
            p { class: "top-table__status", {t!("report-loading")} }
        },
        FetchState::Error(reason) => rsx! {
            p { class: "top-table__status top-table__status--error",
                {t!("report-error", reason = reason)}
            }
        },
        FetchState::Success(dataset) => {
            if is_empty.call(dataset.clone()) {
                rsx! { p { class: "top-table__status", "{empty_message}" } }
            } else {
                rsx! {
                    table { class: "top-table__table",
                        thead {
                            tr {
                                for header in headers.iter() {
                                    th { "{header}" }
                                }
                            }
                        }
                        tbody { {rows.call(dataset)} }
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "top-table card",
            div { class: "card__header",
                h2 { "{title}" }
            }
            {body}
        }
    }
}
