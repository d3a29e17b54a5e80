//! Event handling and state transitions.
//!
//! [`handle_event`] is the single entry point the plugin shim calls for
//! every translated runtime event. It mutates [`AppState`] and returns
//! whether to re-render plus the [`Action`]s to execute.
//!
//! # Example
//!
//! ```rust
//! use countrypicker::{handle_event, AppState, Config, Event, Theme};
//! use std::time::Instant;
//!
//! let mut state = AppState::new(&Config::default(), Theme::default());
//! let (_render, actions) = handle_event(&mut state, &Event::Started, Instant::now())?;
//! assert_eq!(actions.len(), 1); // timer for the catalog load
//! # Ok::<(), countrypicker::PickerError>(())
//! ```

use crate::app::modes::InputMode;
use crate::app::{Action, AppState};
use crate::domain::error::{PickerError, Result};
use crate::worker::WorkerResponse;
use std::time::Instant;

/// Events produced by user input, timers and the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The plugin finished loading; schedules the catalog load.
    Started,

    /// Moves the list cursor down (wraps).
    KeyDown,
    /// Moves the list cursor up (wraps).
    KeyUp,
    /// Toggles selection of the cursor country.
    ToggleSelection,
    /// Hides the plugin.
    CloseFocus,

    /// Focuses the filter input.
    FocusFilter,
    /// Returns focus to the list, keeping the filter text.
    FocusList,
    /// Appends a character to the filter input.
    Char(char),
    /// Removes the last character of the filter input.
    Backspace,
    /// Empties the filter input.
    ClearFilter,

    /// A runtime timer fired.
    Timer,

    /// The permission prompt was answered.
    PermissionsResult { granted: bool },

    /// A response from the background worker.
    WorkerResponse(WorkerResponse),
}

/// Processes one event at time `now`.
///
/// Returns `(should_render, actions)`.
///
/// # Errors
///
/// Returns [`PickerError::Worker`] when the worker reports a failure. The
/// state is left unchanged and the shim logs the error.
pub fn handle_event(state: &mut AppState, event: &Event, now: Instant) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Started => {
            let delay = state.start(now);
            Ok((true, vec![Action::SetTimeout(delay)]))
        }
        Event::KeyDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::ToggleSelection => Ok((state.toggle_cursor_selection().is_some(), vec![])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::FocusFilter => {
            state.input_mode = InputMode::Filter;
            Ok((true, vec![]))
        }
        Event::FocusList => {
            state.input_mode = InputMode::List;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Filter {
                return Ok((false, vec![]));
            }
            let delay = state.push_filter_char(*c, now);
            tracing::trace!(query = %state.filter_input, "filter input updated");
            Ok((true, vec![Action::SetTimeout(delay)]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Filter {
                return Ok((false, vec![]));
            }
            Ok(state
                .pop_filter_char(now)
                .map_or_else(|| (false, vec![]), |delay| (true, vec![Action::SetTimeout(delay)])))
        }
        Event::ClearFilter => Ok(state
            .clear_filter(now)
            .map_or_else(|| (false, vec![]), |delay| (true, vec![Action::SetTimeout(delay)]))),
        Event::Timer => Ok(state.poll_timers(now)),
        Event::PermissionsResult { granted } => {
            if !granted {
                tracing::warn!("permissions denied - flag preloading will fail");
            }
            Ok((false, vec![]))
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::CountriesLoaded { countries } => {
                tracing::debug!(count = countries.len(), "countries loaded");
                Ok((state.set_countries(countries.clone()), vec![]))
            }
            WorkerResponse::FlagsPreloaded { loaded, failed } => {
                tracing::debug!(loaded, failed, "flag batch preloaded");
                Ok((false, vec![]))
            }
            WorkerResponse::Error { message } => Err(PickerError::Worker(message.clone())),
        },
    }
}
