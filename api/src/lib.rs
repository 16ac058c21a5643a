//! Typed API surface consumed by the Netwatch dashboard.
//!
//! The dashboard only ever talks to the backend through the functions in
//! this crate. On the client they compile to typed fetch stubs; with the
//! `server` feature enabled the bodies below run on the server and answer
//! from a small demo query log so the app works end to end.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// One entry of the "top domains" report, exactly as the API encodes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopDomainEntry {
    pub domain: String,
    pub count: u64,
}

/// Raw wire shape of a top-domains report.
///
/// `top_domains` is pre-sorted by the server (descending hit count) and
/// that order is significant downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopDomainsPayload {
    pub total_queries: u64,
    pub top_domains: Vec<TopDomainEntry>,
}

/// Top permitted domains over the default reporting window.
#[server]
pub async fn get_top_domains() -> Result<TopDomainsPayload, ServerFnError> {
    Ok(backend::top_domains_report(None))
}

/// Top permitted domains restricted to `[from, until]` (unix seconds).
#[server]
pub async fn get_top_domains_in_range(
    from: i64,
    until: i64,
) -> Result<TopDomainsPayload, ServerFnError> {
    Ok(backend::top_domains_report(Some((from, until))))
}

#[cfg(feature = "server")]
mod backend {
    use super::{TopDomainEntry, TopDomainsPayload};

    const SAMPLE: &[(&str, u64)] = &[
        ("gateway.lan", 4120),
        ("cdn.example.net", 2333),
        ("updates.example.org", 1408),
        ("mail.example.com", 955),
        ("time.cloudflare.com", 402),
    ];

    /// Demo report. A narrower window scales counts down so range
    /// selection is visible in the UI; a real deployment would query the
    /// long-term database here.
    pub(super) fn top_domains_report(range: Option<(i64, i64)>) -> TopDomainsPayload {
        let scale = match range {
            Some((from, until)) if until > from => {
                let week = 7.0 * 86_400.0;
                ((until - from) as f64 / week).clamp(0.05, 1.0)
            }
            _ => 1.0,
        };

        let top_domains: Vec<TopDomainEntry> = SAMPLE
            .iter()
            .map(|(domain, count)| TopDomainEntry {
                domain: (*domain).to_string(),
                count: ((*count as f64) * scale).round() as u64,
            })
            .collect();
        let total_queries = top_domains.iter().map(|entry| entry.count).sum::<u64>() * 2;

        TopDomainsPayload {
            total_queries,
            top_domains,
        }
    }
}
