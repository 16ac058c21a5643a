//! Report data pipeline: bind a data source to the ambient time range,
//! fetch, transform and hand rows to the generic table shell.

mod fetch;
pub use fetch::{select_fetch_operation, FetchState, ReportQuery, RequestSequence};

mod top_table;
pub use top_table::TopTable;

mod top_domains;
pub use top_domains::{build_rows, generate_rows, transform_payload, RowModel, TopDomains};

/// One display-ready report entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportItem {
    pub label: String,
    pub count: u64,
}

/// The transformed, display-ready form of a raw report payload.
///
/// `items` keeps the source order; the server pre-sorts and that order
/// determines row order. Each successful fetch produces a fresh value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDataset {
    pub total_count: u64,
    pub items: Vec<ReportItem>,
}

impl ReportDataset {
    /// Initial value used before any fetch has resolved.
    pub fn empty() -> Self {
        Self {
            total_count: 0,
            items: Vec::new(),
        }
    }

    /// Emptiness predicate the table shell uses to pick the empty state.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ReportDataset {
    fn default() -> Self {
        Self::empty()
    }
}
