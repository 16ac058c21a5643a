//! User display preferences: canonical defaults, durable persistence and
//! the ambient (context-provided) handle consumers read and update.
//!
//! The persisted form is a JSON object under one fixed key, e.g.
//! `{"language":"en-US","layout":"boxed"}`. The in-memory value is always
//! fully populated: either the parsed snapshot or the hardcoded defaults.

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::storage::{KeyValueStore, LocalStore, StorageError};

/// Fixed key the serialized [`Preferences`] value lives under.
pub const PREFERENCES_STORAGE_KEY: &str = "netwatch.preferences";

/// Page layout variants offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Boxed,
    Traditional,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Boxed => write!(f, "boxed"),
            Layout::Traditional => write!(f, "traditional"),
        }
    }
}

/// User-controlled display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub language: String,
    pub layout: Layout,
}

/// Hardcoded default preference set. Pure and stable across calls.
pub fn default_preferences() -> Preferences {
    Preferences {
        language: "en-US".to_string(),
        layout: Layout::Boxed,
    }
}

/// Read the persisted snapshot from `store`.
///
/// No value under the key yields exactly [`default_preferences`]. A stored
/// value is returned verbatim as parsed, with no merge against defaults.
/// An unparseable value is a [`StorageError::Corrupt`]; the caller decides
/// the fallback (the ambient provider falls back to defaults and logs).
pub fn load_initial_preferences(store: &impl KeyValueStore) -> Result<Preferences, StorageError> {
    match store.get(PREFERENCES_STORAGE_KEY) {
        None => Ok(default_preferences()),
        Some(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            key: PREFERENCES_STORAGE_KEY.to_string(),
            source,
        }),
    }
}

/// Serialize `prefs` and write it under the fixed key, overwriting any
/// previous snapshot.
pub fn persist_preferences(
    store: &impl KeyValueStore,
    prefs: &Preferences,
) -> Result<(), StorageError> {
    let encoded = serde_json::to_string(prefs).map_err(|err| StorageError::Write {
        key: PREFERENCES_STORAGE_KEY.to_string(),
        reason: err.to_string(),
    })?;
    store.set(PREFERENCES_STORAGE_KEY, &encoded)
}

/// Ambient handle to the preference store.
///
/// Provided once at the app root; any descendant that reads [`current`]
/// re-renders when the value is replaced. The provider is the only writer
/// path, via [`set`].
///
/// [`current`]: PreferencesState::current
/// [`set`]: PreferencesState::set
#[derive(Clone, Copy)]
pub struct PreferencesState {
    prefs: Signal<Preferences>,
}

impl PreferencesState {
    /// Snapshot of the current preferences (subscribes the caller).
    pub fn current(&self) -> Preferences {
        (self.prefs)()
    }

    /// Replace the preferences wholesale and write them through to
    /// storage. The in-memory update always applies; a failed write is
    /// logged and not rolled back.
    pub fn set(&mut self, next: Preferences) {
        self.prefs.set(next.clone());
        if let Err(err) = persist_preferences(&LocalStore, &next) {
            warn!("preference update not persisted: {err}");
        }
    }
}

/// Install the preference store on the current component's subtree.
///
/// Corrupt storage falls back to defaults with a warning rather than
/// failing initialization; the first consumer render always sees a fully
/// populated value.
pub fn provide_preferences() -> PreferencesState {
    use_context_provider(|| {
        let prefs = load_initial_preferences(&LocalStore).unwrap_or_else(|err| {
            warn!("stored preferences unreadable, using defaults: {err}");
            default_preferences()
        });
        PreferencesState {
            prefs: Signal::new(prefs),
        }
    })
}

/// Grab the ambient preference handle provided by an ancestor.
pub fn use_preferences() -> PreferencesState {
    use_context()
}
