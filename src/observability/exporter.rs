//! `SpanExporter` that appends OTLP JSON batches to a rotating file.
//!
//! Spans never leave the machine: each exported batch becomes one line of the
//! trace file, which rotates by size. The provider uses the simple (blocking)
//! span processor, so a span is on disk once it closes and nothing needs
//! flushing at exit.

use super::file_writer::{RotatingFile, RotationPolicy};
use super::span_formatter::OtlpFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// File-based span exporter.
///
/// Writes each batch as a complete OTLP document with the resource attributes
/// and instrumentation scope.
struct FileSpanExporter {
    /// Rotating trace file.
    file: RotatingFile,
    /// OTLP JSON formatter.
    formatter: OtlpFormatter,
    /// Set by `shutdown`; later exports fail.
    is_shutdown: AtomicBool,
}

impl SpanExporter for FileSpanExporter {
    /// Writes the batch as one JSON line. Fails after shutdown.
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from("exporter is shut down"))));
        }

        let line = self.formatter.format_batch(&batch).to_string();
        let result = self
            .file
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()));
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    /// The resource is fixed at construction.
    fn set_resource(&mut self, _res: &Resource) {}
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("file", &self.file)
            .field("formatter", &self.formatter)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Builds a provider that exports every finished span to `file_path`
/// synchronously.
///
/// # Parameters
///
/// * `file_path` - Trace file; created on the first export
/// * `resource` - Resource attributes (`service.name`) attached to every batch
/// * `scope` - Instrumentation scope name written into each batch
///
/// # Returns
///
/// A provider with the default rotation policy (5 MB, three backups).
pub fn file_tracer_provider(file_path: PathBuf, resource: Resource, scope: &'static str) -> TracerProvider {
    let exporter = FileSpanExporter {
        file: RotatingFile::new(file_path, RotationPolicy::default()),
        formatter: OtlpFormatter::new(resource.clone(), scope),
        is_shutdown: AtomicBool::new(false),
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
