//! countrypicker: a Zellij plugin for filtering and selecting countries.
//!
//! - Literal, case-insensitive filtering of the ISO country list, debounced
//!   while typing
//! - Multi-selection mirrored into a second column with a count header
//! - Flag images discovered lazily as rows are drawn, preloaded in batches
//!   by a Zellij worker thread once rendering goes idle

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Filter controller, selection, flag cache         │
//! │  - Event handling, view model computation           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Scheduling    │   │ Worker Layer  │
//! │ (ui/)         │   │ (schedule/)   │   │ (worker/)     │
//! │ - Rendering   │   │ - Debounce    │   │ - Catalog     │
//! │ - Theming     │   │ - Idle queue  │   │ - Flag preload│
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Country model, ISO table, errors (domain/)       │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/countrypicker.wasm" {
//!         filter_delay_ms "100"
//!         load_delay_ms "200"
//!         flags_path "~/.local/share/zellij/countrypicker/flags/4x3"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Event Flow
//!
//! 1. **Load**: the shim handles [`Event::Started`], which arms the catalog
//!    load timer.
//! 2. **Catalog**: on the timer the worker is asked for the country list and
//!    answers with `CountriesLoaded`.
//! 3. **Filter**: each edit of the filter input restarts the quiet period;
//!    only the last value of a burst is applied.
//! 4. **Render**: drawing a row presents its country, which signals its flag
//!    the first time. After the frame the signals go into the flag cache and
//!    an idle wakeup is requested.
//! 5. **Idle**: the pending flags are sent to the worker as one preload batch.
//!
//! # Example
//!
//! ```rust
//! use countrypicker::{handle_event, initialize, Config, Event};
//! use std::time::Instant;
//!
//! let mut state = initialize(&Config::default());
//! let now = Instant::now();
//! for event in [Event::Started, Event::FocusFilter, Event::Char('f')] {
//!     let (_should_render, _actions) = handle_event(&mut state, &event, now)?;
//!     // Execute actions...
//! }
//! # Ok::<(), countrypicker::PickerError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod schedule;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{Country, PickerError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::time::Duration;

/// Default quiet period before a filter edit is applied.
pub const DEFAULT_FILTER_DELAY: Duration = Duration::from_millis(100);

/// Default delay of the simulated asynchronous catalog load.
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(200);

const FILTER_DELAY_MIN_MS: u64 = 10;
const FILTER_DELAY_MAX_MS: u64 = 2000;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone)]
pub struct Config {
    /// Quiet period after the last keystroke before the filter is applied.
    pub filter_delay: Duration,

    /// Delay before the country catalog is requested.
    pub load_delay: Duration,

    /// Directory of `<code>.svg` flag images, already tilde-expanded.
    pub flags_path: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filter_delay: DEFAULT_FILTER_DELAY,
            load_delay: DEFAULT_LOAD_DELAY,
            flags_path: infrastructure::default_flags_dir().to_string_lossy().into_owned(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unparseable values fall back to their defaults. `filter_delay_ms` is
    /// clamped to 10..=2000.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use countrypicker::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("filter_delay_ms".to_string(), "250".to_string());
    /// map.insert("flags_path".to_string(), "~/flags".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.filter_delay, Duration::from_millis(250));
    /// assert_eq!(config.flags_path, "/host/flags");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let filter_delay = config
            .get("filter_delay_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map_or(defaults.filter_delay, |ms| {
                Duration::from_millis(ms.clamp(FILTER_DELAY_MIN_MS, FILTER_DELAY_MAX_MS))
            });

        let load_delay = config
            .get("load_delay_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map_or(defaults.load_delay, Duration::from_millis);

        let flags_path = config
            .get("flags_path")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map_or(defaults.flags_path, infrastructure::expand_tilde);

        Self {
            filter_delay,
            load_delay,
            flags_path,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").map(|s| infrastructure::expand_tilde(s)),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Resolves the theme: `theme_file`, then `theme_name`, then the default.
///
/// Failures are logged and fall back to the default theme.
#[must_use]
pub fn resolve_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        match Theme::from_file(theme_file) {
            Ok(theme) => return theme,
            Err(e) => {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            }
        }
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}

/// Creates the application state for `config`.
///
/// The country list starts empty; it arrives from the worker after
/// [`Event::Started`] has been handled and the load delay has passed.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        filter_delay_ms = config.filter_delay.as_millis() as u64,
        flags_path = %config.flags_path,
        "initializing countrypicker plugin"
    );
    AppState::new(config, resolve_theme(config))
}
