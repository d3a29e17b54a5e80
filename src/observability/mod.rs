//! Tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter
//!                                                                   │
//!                                     countrypicker-otlp.json ◀─────┘ (rotated, 10 MB × 3)
//! ```
//!
//! The plugin and its worker each call [`init_tracing`] once; both append
//! to the same file. Worker spans link to plugin spans through the
//! [`TraceContext`](crate::worker::TraceContext) carried by worker messages.

mod exporter;
mod init;
mod otlp;
mod rotating;

pub use init::{init_tracing, TRACE_FILE_NAME};
pub use rotating::RotatingFile;
