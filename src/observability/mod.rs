//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter → rotating JSON file
//! ```
//!
//! Spans land in `<data dir>/gesture-ring-otlp.json` as one OTLP JSON document
//! per line. The file rotates at 5 MB and keeps three numbered backups. The
//! filter directive comes from the `trace_level` setting (default `info`).
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - `exporter`: File span exporter and tracer provider
//! - `span_formatter`: OTLP JSON span serialization
//! - [`file_writer`]: Size-rotated line writer

mod exporter;
pub mod file_writer;
pub mod init;
mod span_formatter;

pub use init::{init_tracing, init_tracing_in, SERVICE_NAME, TRACE_FILE_NAME};
