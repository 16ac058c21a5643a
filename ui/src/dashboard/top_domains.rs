//! Top permitted domains report: payload transform, row generation and
//! the component wiring the ambient time range to the table shell.

use api::{TopDomainEntry, TopDomainsPayload};
use dioxus::prelude::*;

use crate::core::format;
use crate::dashboard::{select_fetch_operation, ReportDataset, ReportItem, TopTable};
use crate::time_range::use_time_range;
use crate::{prefs::use_preferences, t};

/// Map the raw API shape onto the display model. Field renames only:
/// order and numeric values carry over exactly, the input is untouched.
pub fn transform_payload(raw: &TopDomainsPayload) -> ReportDataset {
    ReportDataset {
        total_count: raw.total_queries,
        items: raw
            .top_domains
            .iter()
            .map(|entry: &TopDomainEntry| ReportItem {
                label: entry.domain.clone(),
                count: entry.count,
            })
            .collect(),
    }
}

/// Everything one rendered row needs, precomputed so it stays testable
/// without a vdom.
#[derive(Debug, Clone, PartialEq)]
pub struct RowModel {
    pub label: String,
    pub count_display: String,
    /// Raw share of the total, in percent. Drives the bar width.
    pub percent: f64,
    pub tooltip: String,
}

/// Build one row model per dataset item, in order.
///
/// A zero-total dataset divides by zero here (NaN percent), mirroring the
/// upstream behavior; the empty-state path means it never renders in
/// practice.
pub fn build_rows(dataset: &ReportDataset) -> Vec<RowModel> {
    let total_display = format::format_count(dataset.total_count);

    dataset
        .items
        .iter()
        .map(|item| {
            let percent = (item.count as f64 / dataset.total_count as f64) * 100.0;
            RowModel {
                label: item.label.clone(),
                count_display: format::format_count(item.count),
                percent,
                tooltip: t!(
                    "report-share",
                    percent = format::format_percent(percent),
                    total = total_display.clone()
                ),
            }
        })
        .collect()
}

/// Render the dataset as table rows with a proportion bar per item.
pub fn generate_rows(dataset: &ReportDataset) -> Element {
    let rows = build_rows(dataset);

    rsx! {
        for row in rows.into_iter() {
            tr { key: "{row.label}",
                td { "{row.label}" }
                td { class: "top-table__count", "{row.count_display}" }
                td { class: "top-table__bar-cell",
                    div { class: "progress", title: "{row.tooltip}",
                        div { class: "progress__bar", style: "width: {row.percent}%" }
                    }
                }
            }
        }
    }
}

/// Top permitted domains over the ambient time range.
#[component]
pub fn TopDomains() -> Element {
    // Reading the range subscribes this component; a new selection
    // re-renders it with a freshly selected fetch operation.
    let range = use_time_range().selected();
    let query = select_fetch_operation(range);

    // Subscribe to preferences so localized labels refresh on a language
    // change.
    let _prefs = use_preferences().current();

    rsx! {
        TopTable {
            title: t!("top-domains-title"),
            headers: vec![
                t!("top-domains-header-domain"),
                t!("top-domains-header-hits"),
                t!("top-domains-header-frequency"),
            ],
            empty_message: t!("top-domains-empty"),
            query,
            transform: Callback::new(|payload: TopDomainsPayload| transform_payload(&payload)),
            is_empty: Callback::new(|dataset: ReportDataset| dataset.is_empty()),
            rows: Callback::new(|dataset: ReportDataset| generate_rows(&dataset)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n;

    fn payload() -> TopDomainsPayload {
        TopDomainsPayload {
            total_queries: 10,
            top_domains: vec![
                TopDomainEntry {
                    domain: "a.com".to_string(),
                    count: 7,
                },
                TopDomainEntry {
                    domain: "b.com".to_string(),
                    count: 3,
                },
            ],
        }
    }

    #[test]
    fn transform_renames_fields_and_keeps_order() {
        let raw = payload();
        let dataset = transform_payload(&raw);

        assert_eq!(
            dataset,
            ReportDataset {
                total_count: 10,
                items: vec![
                    ReportItem {
                        label: "a.com".to_string(),
                        count: 7,
                    },
                    ReportItem {
                        label: "b.com".to_string(),
                        count: 3,
                    },
                ],
            }
        );
        // Input is untouched.
        assert_eq!(raw, payload());
    }

    #[test]
    fn row_percentages_cover_the_total() {
        i18n::init();
        let dataset = transform_payload(&payload());
        let rows = build_rows(&dataset);

        assert_eq!(rows[0].percent, 70.0);
        assert_eq!(rows[1].percent, 30.0);
        let sum: f64 = rows.iter().map(|row| row.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn rows_carry_grouped_counts_and_tooltips() {
        i18n::init();
        let dataset = ReportDataset {
            total_count: 2_000_000,
            items: vec![ReportItem {
                label: "a.com".to_string(),
                count: 1_500_000,
            }],
        };
        let rows = build_rows(&dataset);

        assert_eq!(rows[0].count_display, "1,500,000");
        // Fluent wraps arguments in isolation marks, so match on content.
        assert!(rows[0].tooltip.contains("75.0"));
        assert!(rows[0].tooltip.contains("2,000,000"));
    }

    #[test]
    fn empty_dataset_produces_no_rows() {
        let dataset = ReportDataset::empty();
        assert!(build_rows(&dataset).is_empty());
        assert!(dataset.is_empty());
    }
}
