//! Tracing initialization and subscriber setup.
//!
//! Builds the pipeline from `tracing` macros to the trace file:
//!
//! ```text
//! tracing span → EnvFilter → OpenTelemetryLayer → FileSpanExporter → gesture-ring-otlp.json
//! ```
//!
//! Nothing is printed to the terminal, which the renderer owns.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::{Path, PathBuf};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and instrumentation scope name.
pub const SERVICE_NAME: &str = "gesture-ring";

/// Trace file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "gesture-ring-otlp.json";

/// Installs the global subscriber, exporting spans to the data directory.
///
/// The filter comes from `config.trace_level`, defaulting to `info`. Returns
/// the trace file path, or `None` when the data directory cannot be created
/// or a subscriber is already installed; tracing is optional and never fails
/// the caller.
///
/// # Example
///
/// ```no_run
/// use gesture_ring::observability::init_tracing;
/// use gesture_ring::Config;
///
/// let config = Config { trace_level: Some("debug".to_string()), ..Config::default() };
/// if let Some(path) = init_tracing(&config) {
///     tracing::debug!(path = %path.display(), "tracing active");
/// }
/// ```
pub fn init_tracing(config: &Config) -> Option<PathBuf> {
    let data_dir = crate::infrastructure::data_dir()?;
    init_tracing_in(&data_dir, config.trace_level.as_deref().unwrap_or("info"))
}

/// Like [`init_tracing`], with an explicit directory and filter directive.
///
/// # Parameters
///
/// * `dir` - Directory for the trace file; created if missing
/// * `level` - `EnvFilter` directive, e.g. `info` or `gesture_ring=trace`
///
/// # Returns
///
/// The trace file path, or `None` if the directory cannot be created or a
/// global subscriber is already installed.
pub fn init_tracing_in(dir: &Path, level: &str) -> Option<PathBuf> {
    std::fs::create_dir_all(dir).ok()?;

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let trace_file = dir.join(TRACE_FILE_NAME);
    let provider = exporter::file_tracer_provider(trace_file.clone(), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init()
        .ok()?;
    Some(trace_file)
}
