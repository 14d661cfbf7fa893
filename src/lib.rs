//! Tripboard: a Zellij plugin showing a trip itinerary as a filterable,
//! sortable list of travel points.
//!
//! - Time-window filters (everything, past, present, future) with per-window counts
//! - Orderings by day, duration, and price
//! - Per-row favorite toggle and an inline editor for selected offers
//! - JSON trip file persisted by a Zellij background worker

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling and actions                       │
//! │  - List presenter / point item controllers          │
//! │  - Frame view model                                 │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Surface     │   │ - Trip JSON   │   │ - Load/save   │
//! │ - Views       │   │ - Backend API │   │ - IPC bridge  │
//! │ - Rendering   │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Model, Domain & Infrastructure                     │
//! │  - Points model (model/)                            │
//! │  - Points, filters, orderings, errors (domain/)     │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry spans to JSON-lines files          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/tripboard.wasm" {
//!         trip_file "~/trips/lisbon.json"
//!         theme "catppuccin-latte"
//!         filter "future"
//!         sort "price"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Lifecycle
//!
//! 1. `load` parses the configuration, builds the [`AppState`], and asks for
//!    permissions.
//! 2. Once granted, the plugin posts `LoadTrip` to the worker.
//! 3. `TripLoaded` builds the points model and initializes the list presenter.
//! 4. Keys are mapped to [`Event`]s; changed points go back to the worker as
//!    `SavePoint`.
//!
//! # Example
//!
//! ```rust
//! use tripboard::{handle_event, initialize, Config, Event};
//! use tripboard::storage::TripData;
//! use tripboard::worker::WorkerResponse;
//!
//! let mut state = initialize(&Config::default());
//! let loaded = Event::WorkerResponse(WorkerResponse::TripLoaded { trip: TripData::default() });
//! let (should_render, _actions) = handle_event(&mut state, &loaded)?;
//! assert!(should_render);
//! # Ok::<(), tripboard::TripboardError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod model;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{FilterType, Result, SortType, TripboardError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration from the Zellij layout.
///
/// ```kdl
/// plugin location="file:/path/to/tripboard.wasm" {
///     trip_file "~/trips/lisbon.json"
///     theme "catppuccin-mocha"
///     theme_file "/path/to/theme.toml"
///     filter "everything"
///     sort "day"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Trip JSON file. `~` maps to the sandbox `/host` mount. Default:
    /// `trip.json` in the plugin data directory.
    pub trip_file: Option<String>,

    /// Built-in theme: `catppuccin-mocha` (default) or `catppuccin-latte`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Custom TOML theme; see [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `trace`, `debug`, `info`, `warn`, or `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Initial time window. Unknown names mean everything.
    pub filter: FilterType,

    /// Initial ordering. Unknown names mean day.
    pub sort: SortType,
}

impl Config {
    /// Reads the configuration map Zellij passes to `load`.
    ///
    /// Blank values count as missing.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use tripboard::{Config, FilterType, SortType};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("trip_file".to_string(), "~/trips/alps.json".to_string());
    /// map.insert("filter".to_string(), "future".to_string());
    /// map.insert("sort".to_string(), "sideways".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.trip_file.as_deref(), Some("~/trips/alps.json"));
    /// assert_eq!(config.filter, FilterType::Future);
    /// assert_eq!(config.sort, SortType::Day);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
        };

        Self {
            trip_file: get("trip_file").map(String::from),
            theme_name: get("theme").map(String::from),
            theme_file: get("theme_file").map(String::from),
            trace_level: get("trace_level").map(String::from),
            filter: get("filter").map_or_else(FilterType::default, FilterType::from_name),
            sort: get("sort").map_or_else(SortType::default, SortType::from_name),
        }
    }

    /// Theme from `theme_file`, then `theme_name`, then the default.
    ///
    /// Failures are logged and fall back to the default theme.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
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

/// Builds the initial application state for `config`.
///
/// The board stays empty until the worker answers with the trip.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let trip_path = infrastructure::resolve_trip_path(config.trip_file.as_deref());
    tracing::debug!(trip_path = ?trip_path, "initializing tripboard");

    AppState::new(trip_path, config.load_theme()).with_initial(config.filter, config.sort)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn blank_values_are_missing() {
        let mut map = BTreeMap::new();
        map.insert("trip_file".to_string(), "  ".to_string());
        map.insert("theme".to_string(), String::new());

        let config = Config::from_zellij(&map);

        assert_eq!(config.trip_file, None);
        assert_eq!(config.theme_name, None);
    }

    #[test]
    fn theme_file_wins_over_name() {
        let mocha = include_str!("../themes/catppuccin-mocha.toml").replace("catppuccin-mocha", "custom");
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(mocha.as_bytes()).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };

        assert_eq!(config.load_theme().name, "custom");
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("solarized".to_string()),
            ..Config::default()
        };
        assert_eq!(config.load_theme().name, "catppuccin-mocha");
    }

    #[test]
    fn initialize_applies_initial_filter_and_sort() {
        let config = Config {
            trip_file: Some("/data/trip.json".to_string()),
            filter: FilterType::Past,
            sort: SortType::Price,
            ..Config::default()
        };

        let state = initialize(&config);

        assert_eq!(state.trip_path, std::path::PathBuf::from("/data/trip.json"));
        assert_eq!(state.initial_filter, FilterType::Past);
        assert_eq!(state.initial_sort, SortType::Price);
    }
}
