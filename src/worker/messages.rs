//! Plugin ↔ worker message protocol.
//!
//! Messages are JSON-serialized and carried by Zellij plugin messages. Each
//! request carries an optional [`TraceContext`] so spans recorded by the
//! worker attach to the plugin span that sent the request.

use crate::domain::{Country, FlagDiscovered};
use serde::{Deserialize, Serialize};

/// Trace and span IDs of the sending span, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID (32 hex chars).
    pub trace_id: String,

    /// Span ID of the sending span (16 hex chars).
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the context of the current span.
    ///
    /// Returns `None` when no OpenTelemetry span is active, e.g. when tracing
    /// was not initialized.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let context = tracing::Span::current().context();
        let span_ref = context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates `WorkerMessage` constructors that attach the current trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_countries(LoadCountries { flags_base_path: String }),
    preload_flags(PreloadFlags { flags: Vec<FlagDiscovered> }),
}

/// Requests sent from the plugin to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Build the country list from the static catalog.
    LoadCountries {
        /// Directory holding `<code>.svg` flag images.
        flags_base_path: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Preload a batch of flag images into the worker's off-screen cache.
    PreloadFlags {
        /// Flags in the order they were enqueued.
        flags: Vec<FlagDiscovered>,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// The trace context attached to this message.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadCountries { trace_context, .. } | Self::PreloadFlags { trace_context, .. } => {
                trace_context.as_ref()
            }
        }
    }

    /// Short variant name for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::LoadCountries { .. } => "load_countries",
            Self::PreloadFlags { .. } => "preload_flags",
        }
    }
}

/// Responses sent from the worker back to the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The country list, in catalog order.
    CountriesLoaded { countries: Vec<Country> },

    /// A preload batch finished. Failures are counted, never retried.
    FlagsPreloaded { loaded: usize, failed: usize },

    /// The request could not be handled.
    Error { message: String },
}
