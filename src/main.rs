//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the countrypicker library and the Zellij
//! plugin system: translates Zellij events into library [`Event`]s and
//! executes the returned [`Action`]s.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling, timers
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC (JSON)   │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  CountryWorker   │   │  ← Catalog load, flag preloading
//! │  │ (worker thread)  │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Down`: Move down
//! - `Ctrl+p` / `Up`: Move up
//!
//! List mode:
//! - `j` / `k`: Move down / up
//! - `Space` / `Enter`: Toggle selection
//! - `/`: Focus the filter
//! - `Esc`: Clear the filter
//! - `q`: Hide the plugin
//!
//! Filter mode:
//! - Characters / `Backspace`: Edit the filter
//! - `Enter` / `Esc`: Back to the list

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::time::Instant;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use countrypicker::worker::{CountryWorker, WorkerMessage, WorkerResponse};
use countrypicker::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);
register_worker!(CountryWorker, countrypicker_worker, COUNTRYPICKER_WORKER);

/// Plugin state wrapper.
struct State {
    app: countrypicker::AppState,

    /// Worker name used for both routing and response matching.
    worker_name: String,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: countrypicker::initialize(&Config::default()),
            worker_name: "countrypicker".to_string(),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes tracing, requests permissions and
    /// schedules the catalog load.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        countrypicker::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            filter_delay_ms = config.filter_delay.as_millis() as u64,
            load_delay_ms = config.load_delay.as_millis() as u64,
            flags_path = %config.flags_path,
            "parsed configuration"
        );
        self.app = countrypicker::initialize(&config);

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
            PermissionType::FullHdAccess,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        self.dispatch(&Event::Started);
    }

    /// Translates and handles a Zellij event. Returns `true` to re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::Timer,
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Event::PermissionsResult {
                    granted: matches!(status, PermissionStatus::Granted),
                }
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    /// Draws the frame, then feeds the flags discovered while drawing into
    /// the cache and requests the idle wakeup if one is needed.
    fn render(&mut self, rows: usize, cols: usize) {
        countrypicker::ui::render(&mut self.app, rows, cols);

        if let Some(action) = self.app.collect_flag_signals() {
            self.execute_action(&action);
        }
    }
}

impl State {
    /// Runs `event` through the library and executes the resulting actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event, Instant::now()) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        match (self.app.input_mode, &key.bare_key) {
            (_, BareKey::Down) => Some(Event::KeyDown),
            (_, BareKey::Up) => Some(Event::KeyUp),

            (InputMode::Filter, BareKey::Enter | BareKey::Esc) => Some(Event::FocusList),
            (InputMode::Filter, BareKey::Backspace) => Some(Event::Backspace),
            (InputMode::Filter, BareKey::Char(c)) => Some(Event::Char(*c)),

            (InputMode::List, BareKey::Char('j')) => Some(Event::KeyDown),
            (InputMode::List, BareKey::Char('k')) => Some(Event::KeyUp),
            (InputMode::List, BareKey::Char(' ') | BareKey::Enter) => Some(Event::ToggleSelection),
            (InputMode::List, BareKey::Char('/')) => Some(Event::FocusFilter),
            (InputMode::List, BareKey::Esc) => Some(Event::ClearFilter),
            (InputMode::List, BareKey::Char('q')) => Some(Event::CloseFocus),

            _ => None,
        }
    }

    /// Maps worker responses to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::debug!(error = %e, payload_len = payload.len(), "failed to deserialize worker response");
                None
            }
        }
    }

    /// Serializes `message` and posts it to the worker thread.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(kind = message.kind(), payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Translates a library action into Zellij API calls.
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin");
                hide_self();
            }
            Action::PostToWorker(message) => self.post_worker_message(message),
            Action::SetTimeout(delay) => set_timeout(delay.as_secs_f64()),
        }
    }
}
