//! Fetch-operation selection and the typed fetch state machine.

use api::TopDomainsPayload;
use dioxus::prelude::ServerFnError;

use crate::time_range::TimeRange;

/// The fetch operation a report will invoke, derived from the ambient
/// time range on every render. Nothing is cached across range changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportQuery {
    /// No range selected: query the default reporting window.
    Default,
    /// Range-scoped query against the long-term database.
    Range(TimeRange),
}

/// Pick the fetch operation for the currently observed range.
pub fn select_fetch_operation(range: Option<TimeRange>) -> ReportQuery {
    match range {
        Some(range) => ReportQuery::Range(range),
        None => ReportQuery::Default,
    }
}

impl ReportQuery {
    /// Run the selected fetch operation. Failures pass through opaquely
    /// and end up in the table shell's error state.
    pub async fn run(self) -> Result<TopDomainsPayload, ServerFnError> {
        match self {
            ReportQuery::Default => api::get_top_domains().await,
            ReportQuery::Range(range) => api::get_top_domains_in_range(range.from, range.until).await,
        }
    }
}

/// Explicit fetch lifecycle owned by the table shell.
///
/// `Idle → Loading → Success | Error`; a range change restarts at
/// `Loading`. Stale-response protection lives with the shell, which tags
/// every request with a token from [`RequestSequence`] and drops
/// resolutions whose token is no longer current.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

/// Hands out monotonically increasing request tokens. Only the most
/// recently issued token is current; a resolution carrying an older one
/// belongs to a superseded request and must not overwrite state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence(u64);

impl RequestSequence {
    /// Issue the token for a newly started request, superseding all
    /// earlier ones.
    pub fn issue(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0 == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_range_selects_the_default_fetch() {
        assert_eq!(select_fetch_operation(None), ReportQuery::Default);
    }

    #[test]
    fn a_selected_range_switches_to_the_scoped_fetch() {
        let range = TimeRange {
            from: 1_700_000_000,
            until: 1_700_086_400,
        };
        assert_eq!(
            select_fetch_operation(Some(range)),
            ReportQuery::Range(range)
        );
    }

    #[test]
    fn only_the_latest_issued_token_is_current() {
        let mut requests = RequestSequence::default();
        let first = requests.issue();
        assert!(requests.is_current(first));

        let second = requests.issue();
        assert!(!requests.is_current(first));
        assert!(requests.is_current(second));
    }

    #[test]
    fn late_response_for_superseded_request_is_dropped() {
        // Two fetches in flight; the later-started one resolves first.
        let mut requests = RequestSequence::default();
        let older = requests.issue();
        let newer = requests.issue();

        let mut state = FetchState::Loading;
        if requests.is_current(newer) {
            state = FetchState::Success("newer");
        }
        // The earlier request resolves late; its token is no longer
        // current, so it must not overwrite the newer result.
        if requests.is_current(older) {
            state = FetchState::Success("older");
        }

        assert_eq!(state, FetchState::Success("newer"));
    }

    #[test]
    fn selection_tracks_the_range_across_changes() {
        // absent -> present between two renders flips the operation, with
        // no other state carried over.
        let range = TimeRange { from: 10, until: 20 };
        let before = select_fetch_operation(None);
        let after = select_fetch_operation(Some(range));
        assert_ne!(before, after);
        assert_eq!(select_fetch_operation(None), before);
    }
}
