//! Sandbox filesystem helpers.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, resolve_trip_path, strip_host_prefix, DEFAULT_TRIP_FILE};
