//! Ambient "selected time range" shared across report components.
//!
//! `None` means "use the default reporting window". The picker on the
//! dashboard view is the single writer; report components only read.

use dioxus::prelude::*;
use time::{Duration, OffsetDateTime};

/// Inclusive query window in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub from: i64,
    pub until: i64,
}

impl TimeRange {
    /// Window of the given length ending at the current instant.
    pub fn ending_now(window: Duration) -> Self {
        let until = OffsetDateTime::now_utc().unix_timestamp();
        Self {
            from: until - window.whole_seconds(),
            until,
        }
    }
}

/// Ambient handle to the selected range.
#[derive(Clone, Copy)]
pub struct TimeRangeState {
    range: Signal<Option<TimeRange>>,
}

impl TimeRangeState {
    /// Currently selected range, if any (subscribes the caller).
    pub fn selected(&self) -> Option<TimeRange> {
        (self.range)()
    }

    /// Replace the selection; all subscribed consumers re-render.
    pub fn select(&mut self, next: Option<TimeRange>) {
        self.range.set(next);
    }
}

/// Install the time-range provider on the current component's subtree.
/// Starts with no selection (default window).
pub fn provide_time_range() -> TimeRangeState {
    use_context_provider(|| TimeRangeState {
        range: Signal::new(None),
    })
}

/// Grab the ambient time-range handle provided by an ancestor.
pub fn use_time_range() -> TimeRangeState {
    use_context()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ending_now_spans_the_requested_window() {
        let range = TimeRange::ending_now(Duration::hours(24));
        assert_eq!(range.until - range.from, 24 * 3600);
        assert!(range.from < range.until);
    }
}
