//! Subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "Tripboard";

/// Level used when neither the configuration nor `RUST_LOG` sets one.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber for the plugin instance.
///
/// Spans go to `tripboard-spans.jsonl` in the data directory, filtered by
/// `config.trace_level`. If the directory cannot be created tracing stays
/// off. Only the first call in a process has an effect.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);
    install("tripboard-spans.jsonl", level);
}

/// Installs the global subscriber for the storage worker instance.
///
/// The worker runs in its own WASM instance without access to the plugin
/// configuration; it writes to `tripboard-worker-spans.jsonl` and honours
/// `RUST_LOG`, defaulting to [`DEFAULT_TRACE_LEVEL`].
pub fn init_worker_tracing() {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_TRACE_LEVEL.to_string());
    install("tripboard-worker-spans.jsonl", &level);
}

fn install(file_name: &str, level: &str) {
    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(data_dir.join(file_name), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
