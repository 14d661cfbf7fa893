//! Sandbox path handling.
//!
//! Inside the Zellij plugin sandbox the host filesystem is mounted under
//! `/host`, so user-facing paths such as `~/trips/lisbon.json` have to be
//! rewritten before they can be opened.

use std::path::PathBuf;

/// File name of the trip used when none is configured.
pub const DEFAULT_TRIP_FILE: &str = "trip.json";

/// Data directory of the plugin, `/host/.local/share/zellij/tripboard`.
///
/// ```
/// use tripboard::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/tripboard"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("tripboard")
}

/// Rewrites `~` and `~/...` to the sandbox `/host` mount.
///
/// ```
/// use tripboard::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/trips/lisbon.json"), "/host/trips/lisbon.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/data/trip.json"), "/data/trip.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Shows a sandbox path the way the user typed it.
///
/// ```
/// use tripboard::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/trips/lisbon.json"), "~/trips/lisbon.json");
/// assert_eq!(strip_host_prefix("/data/trip.json"), "/data/trip.json");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    path.strip_prefix("/host")
        .map_or_else(|| path.to_string(), |rest| format!("~{rest}"))
}

/// Trip file to open: the configured path with `~` expanded, or
/// [`DEFAULT_TRIP_FILE`] in the data directory.
#[must_use]
pub fn resolve_trip_path(configured: Option<&str>) -> PathBuf {
    configured
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map_or_else(
            || get_data_dir().join(DEFAULT_TRIP_FILE),
            |path| PathBuf::from(expand_tilde(path)),
        )
}
