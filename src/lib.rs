//! Spares Hub: a classifieds core for classic-vehicle spare parts.
//!
//! Buyers narrow the listing collection through a fixed funnel
//! (era → make → model → category → results) while a free-text query keeps
//! applying across steps. Sellers post listings through a validated draft.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal front end (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Funnel reducer                                   │
//! │  - Event handling, actions                          │
//! │  - Session runtime                                  │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Query Layer   │   │ Storage Layer │
//! │ (ui/)         │   │ (query/)      │   │ (storage/)    │
//! │ - View models │   │ - Filter/sort │   │ - JSON file   │
//! │ - Presenter   │   │ - Tiles       │   │ - Seed data   │
//! │ - Rendering   │   │               │   │ - Store trait │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Sell flow & Infrastructure                 │
//! │  - Listing, catalog, errors (domain/)               │
//! │  - Draft, posting gate, photo encoding (sell/)      │
//! │  - Data directory (infrastructure/)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber with rotating log file        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use spareshub::app::{Choice, Event, FunnelAction, Session};
//! use spareshub::domain::Era;
//! use spareshub::storage::MemoryListingStore;
//! use spareshub::Theme;
//!
//! let mut session = Session::new(MemoryListingStore::new(), Theme::default());
//! for event in [
//!     Event::Funnel(FunnelAction::Advance(Choice::Era(Era::Postwar))),
//!     Event::Funnel(FunnelAction::Advance(Choice::Make("Jaguar".to_string()))),
//!     Event::Funnel(FunnelAction::SetQuery("speedo".to_string())),
//! ] {
//!     session.dispatch(&event);
//! }
//!
//! let result = session.state().query();
//! assert_eq!(result.len(), 2);
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod query;
pub mod sell;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Session};
pub use domain::{Listing, Result, SparesError};
pub use ui::Theme;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use storage::JsonListingStore;

/// File holding the listing collection inside the data directory.
pub const LISTINGS_FILE_NAME: &str = "listings.json";

/// Runtime configuration.
///
/// Built from a TOML file, a string map, or command-line flags. Every field is
/// optional.
///
/// # Example
///
/// ```toml
/// data_dir = "~/.local/share/spareshub"
/// theme = "paper"
/// theme_file = "/path/to/theme.toml"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory for the listings file and the log. See
    /// [`infrastructure::get_data_dir`] for the fallback.
    pub data_dir: Option<String>,

    /// Built-in theme name: `midnight` or `paper`. Ignored if `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Log level: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Unknown keys are ignored and blank values count as unset.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use spareshub::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "paper".to_string());
    /// map.insert("trace_level".to_string(), " ".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("paper"));
    /// assert_eq!(config.trace_level, None);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            data_dir: get("data_dir"),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SparesError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SparesError::Config(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| SparesError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Returns `self` with every field set in `overrides` replaced.
    #[must_use]
    pub fn merged_with(self, overrides: Self) -> Self {
        Self {
            data_dir: overrides.data_dir.or(self.data_dir),
            theme_name: overrides.theme_name.or(self.theme_name),
            theme_file: overrides.theme_file.or(self.theme_file),
            trace_level: overrides.trace_level.or(self.trace_level),
        }
    }

    /// Resolves the theme: file first, then name, then the default.
    ///
    /// Load failures fall back to the default theme and are logged.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Opens the listing store in the configured data directory and starts a session.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created.
pub fn initialize(config: &Config) -> Result<Session<JsonListingStore>> {
    tracing::debug!("initializing spareshub");

    let data_dir = infrastructure::get_data_dir(config);
    let store = JsonListingStore::new(data_dir.join(LISTINGS_FILE_NAME))?;

    Ok(Session::new(store, config.resolve_theme()))
}
