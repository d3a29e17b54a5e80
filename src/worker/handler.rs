//! Worker thread: country catalog and off-screen flag preloading.
//!
//! Runs on a thread spawned by Zellij and talks to the plugin through
//! JSON-serialized [`WorkerMessage`]s and [`WorkerResponse`]s only. Preloaded
//! flag images stay in the worker's memory for its whole lifetime.

use crate::domain::{catalog, FlagDiscovered, Result};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker state: preloaded flag images keyed by country code.
#[derive(Serialize, Deserialize, Default)]
pub struct CountryWorker {
    #[serde(skip)]
    flag_store: HashMap<String, Vec<u8>>,
}

impl std::fmt::Debug for CountryWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountryWorker")
            .field("stored_flags", &self.flag_store.len())
            .finish()
    }
}

impl CountryWorker {
    /// Returns `true` if the flag for `code` has been loaded.
    #[must_use]
    pub fn has_flag(&self, code: &str) -> bool {
        self.flag_store.contains_key(code)
    }

    /// Number of flag images held in memory.
    #[must_use]
    pub fn stored_flags(&self) -> usize {
        self.flag_store.len()
    }

    fn handle_load_countries(flags_base_path: &str) -> WorkerResponse {
        let countries = catalog::countries(flags_base_path);
        tracing::debug!(country_count = countries.len(), flags_base_path, "country catalog built");
        WorkerResponse::CountriesLoaded { countries }
    }

    /// Reads every flag of the batch into the store.
    ///
    /// Flags already stored count as loaded without touching the disk again.
    /// Unreadable files are logged and counted; they are not retried.
    fn handle_preload_flags(&mut self, flags: Vec<FlagDiscovered>) -> WorkerResponse {
        let mut loaded = 0;
        let mut failed = 0;

        for flag in flags {
            if self.flag_store.contains_key(&flag.code) {
                loaded += 1;
                continue;
            }

            match fs::read(&flag.img_src) {
                Ok(bytes) => {
                    tracing::trace!(code = %flag.code, bytes = bytes.len(), "flag preloaded");
                    self.flag_store.insert(flag.code, bytes);
                    loaded += 1;
                }
                Err(e) => {
                    tracing::debug!(code = %flag.code, img_src = %flag.img_src, error = %e, "flag preload failed");
                    failed += 1;
                }
            }
        }

        tracing::debug!(loaded, failed, stored = self.flag_store.len(), "flag batch preloaded");
        WorkerResponse::FlagsPreloaded { loaded, failed }
    }

    /// Links spans created here to the plugin span that sent `message`.
    ///
    /// The returned guard must be held while the message is handled.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let remote = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());
        Some(opentelemetry::Context::current().with_remote_span_context(remote).attach())
    }

    /// Handles one request and produces its response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = message.kind());
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadCountries { flags_base_path, .. } => {
                Self::handle_load_countries(&flags_base_path)
            }
            WorkerMessage::PreloadFlags { flags, .. } => self.handle_preload_flags(flags),
        }
    }
}

static WORKER_TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

fn init_worker_tracing() {
    if WORKER_TRACING_INITIALIZED.swap(true, Ordering::Relaxed) {
        return;
    }
    crate::observability::init_tracing(&crate::Config::default());
}

fn decode_message(payload: &str) -> Result<WorkerMessage> {
    Ok(serde_json::from_str(payload)?)
}

fn post_response(name: String, response: &WorkerResponse) {
    match serde_json::to_string(response) {
        Ok(payload) => post_message_to_plugin(PluginMessage {
            name,
            payload,
            worker_name: None,
        }),
        Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
    }
}

impl ZellijWorker<'_> for CountryWorker {
    /// Deserializes `payload`, handles it and posts the response back under
    /// the same message name.
    ///
    /// Payloads that are not a valid [`WorkerMessage`] are answered with
    /// [`WorkerResponse::Error`].
    fn on_message(&mut self, message: String, payload: String) {
        init_worker_tracing();

        let response = match decode_message(&payload) {
            Ok(worker_message) => self.handle_message(worker_message),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                WorkerResponse::Error {
                    message: e.to_string(),
                }
            }
        };

        post_response(message, &response);
    }
}
