//! Shared UI crate for Netwatch. Cross-platform dashboard logic and views
//! live here; platform shells only add routing and launch glue.

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod prefs;
pub mod time_range;
pub mod views;
