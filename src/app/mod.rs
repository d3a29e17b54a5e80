//! Application layer: state, events and actions.
//!
//! ```text
//! Key / Timer / Worker → Event → handle_event → AppState mutations → Actions
//!                                                    │
//!                                    render → compute_viewmodel → flag signals
//! ```
//!
//! # Modules
//!
//! - [`filter`]: Filter controller, debounced literal matching
//! - [`selection`]: Selection set and its mirror header
//! - [`flag_cache`]: Deduplicating flag preload queue
//! - [`presenter`]: Row presentation and one-shot flag signals
//! - [`state`]: Central state and view model computation
//! - [`handler`]: Event processing
//! - [`actions`]: Side effects for the runtime shim
//! - [`modes`]: Input focus

pub mod actions;
pub mod filter;
pub mod flag_cache;
pub mod handler;
pub mod modes;
pub mod presenter;
pub mod selection;
pub mod state;

pub use actions::Action;
pub use filter::{FilterController, FilterState};
pub use flag_cache::FlagCache;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use presenter::{CountryPresenter, PresentedCountry};
pub use selection::{SelectionMirror, SelectionSet};
pub use state::{AppState, IdleJob};
