//! Side effects requested by the event handler.
//!
//! The handler never calls the plugin runtime directly. It returns
//! [`Action`]s and the runtime shim executes them in order.
//!
//! # Example
//!
//! ```rust
//! use countrypicker::app::Action;
//! use std::time::Duration;
//!
//! let actions = vec![Action::SetTimeout(Duration::from_millis(100))];
//! # assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;
use std::time::Duration;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a message to the background worker.
    PostToWorker(WorkerMessage),

    /// Requests a timer event after the given delay.
    ///
    /// A zero delay is the idle wakeup: it fires once the runtime has handled
    /// the events already queued, after the current render.
    SetTimeout(Duration),
}
