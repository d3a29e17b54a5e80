//! Subscriber setup.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "countrypicker";

/// Trace file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "countrypicker-otlp.json";

/// Installs the global subscriber: an [`EnvFilter`] at `config.trace_level`
/// (default `info`) feeding an OpenTelemetry layer that exports to
/// `<data dir>/countrypicker-otlp.json`.
///
/// Returns `false` without installing anything when the data directory
/// cannot be created, or when a global subscriber is already set. Tracing is
/// optional: the plugin works the same either way.
///
/// ```rust,no_run
/// use countrypicker::{observability, Config};
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// observability::init_tracing(&config);
/// tracing::debug!("tracing is active");
/// ```
pub fn init_tracing(config: &Config) -> bool {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return false;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider =
        exporter::file_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init()
        .is_ok()
}
