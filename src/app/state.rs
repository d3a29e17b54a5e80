//! Application state and view model computation.
//!
//! [`AppState`] ties the filter controller, the selection, the flag cache and
//! the presenter together, and owns the two deferred jobs: the one-shot
//! catalog load and the idle-period flag flush.
//!
//! # Flag signal flow
//!
//! ```text
//! compute_viewmodel ──present()──▶ mpsc channel ──collect_flag_signals()──▶ FlagCache
//!                                                        │
//!                                         IdleQueue ◀────┘ (first enqueue arms idle wakeup)
//!                                             │
//!                      Timer ──run_idle()──▶ flush ──▶ Action::PostToWorker(PreloadFlags)
//! ```
//!
//! # Example
//!
//! ```rust
//! use countrypicker::{AppState, Config, Theme};
//! use std::time::Instant;
//!
//! let mut state = AppState::new(&Config::default(), Theme::default());
//! let now = Instant::now();
//! state.push_filter_char('f', now);
//! let viewmodel = state.compute_viewmodel(24);
//! assert!(viewmodel.empty_state.is_some()); // catalog not loaded yet
//! ```

use super::actions::Action;
use super::filter::FilterController;
use super::flag_cache::FlagCache;
use super::modes::InputMode;
use super::presenter::CountryPresenter;
use super::selection::{SelectionMirror, SelectionSet};
use crate::domain::{Country, FlagDiscovered};
use crate::schedule::{Debouncer, IdleQueue};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, ListPane, UIViewModel,
};
use crate::worker::WorkerMessage;
use crate::Config;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

/// Rows used by everything except list items: blank line, header, border,
/// filter bar (3), column titles, border, footer.
const CHROME_ROWS: usize = 9;

/// Low-priority jobs run on the idle wakeup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleJob {
    /// Turn the flag cache's pending batch into a preload request.
    FlushFlagCache,
}

/// Central application state.
#[derive(Debug)]
pub struct AppState {
    /// Country list, committed filter and filtered view.
    pub filter: FilterController,

    /// Current text of the filter input, ahead of the debounced filter.
    pub filter_input: String,

    /// Countries selected in the list.
    pub selection: SelectionSet,

    /// Cursor position within the filtered view.
    pub cursor: usize,

    pub input_mode: InputMode,

    pub theme: Theme,

    /// Directory the flag image paths are derived from.
    pub flags_base_path: String,

    flag_cache: FlagCache,
    presenter: CountryPresenter,
    flag_signals: Receiver<FlagDiscovered>,
    idle: IdleQueue<IdleJob>,
    catalog_load: Debouncer<()>,
}

impl AppState {
    /// Creates the state for `config`. No countries are loaded yet.
    #[must_use]
    pub fn new(config: &Config, theme: Theme) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            filter: FilterController::new(config.filter_delay),
            filter_input: String::new(),
            selection: SelectionSet::default(),
            cursor: 0,
            input_mode: InputMode::List,
            theme,
            flags_base_path: config.flags_path.clone(),
            flag_cache: FlagCache::default(),
            presenter: CountryPresenter::new(sender),
            flag_signals: receiver,
            idle: IdleQueue::default(),
            catalog_load: Debouncer::new(config.load_delay),
        }
    }

    /// Schedules the catalog load. Returns the delay to arm a timer with.
    pub fn start(&mut self, now: Instant) -> Duration {
        tracing::debug!(delay_ms = self.catalog_load.delay().as_millis() as u64, "catalog load scheduled");
        self.catalog_load.schedule((), now)
    }

    /// Runs every deferred job that is due at `now`.
    ///
    /// Returns whether the view changed and the actions to execute. Jobs that
    /// are still waiting get a timer re-armed for their remaining time, since
    /// the timer that fired may belong to superseded input.
    pub fn poll_timers(&mut self, now: Instant) -> (bool, Vec<Action>) {
        let mut actions = vec![];
        let mut changed = false;

        if self.catalog_load.poll(now).is_some() {
            tracing::debug!("requesting country catalog");
            actions.push(Action::PostToWorker(WorkerMessage::load_countries(
                self.flags_base_path.clone(),
            )));
        } else if let Some(remaining) = self.catalog_load.remaining(now) {
            actions.push(Action::SetTimeout(remaining));
        }

        if self.filter.poll(now) {
            self.clamp_cursor();
            changed = true;
        } else if let Some(remaining) = self.filter.remaining(now) {
            actions.push(Action::SetTimeout(remaining));
        }

        actions.extend(self.run_idle());

        (changed, actions)
    }

    /// Installs the country list. Returns `false` if one was already loaded.
    pub fn set_countries(&mut self, countries: Vec<Country>) -> bool {
        let loaded = self.filter.set_countries(countries);
        if loaded {
            self.clamp_cursor();
        }
        loaded
    }

    /// Applies `text` immediately, bypassing the debounce, and keeps the
    /// cursor inside the new filtered view.
    pub fn run_filter(&mut self, text: &str) {
        self.filter.run_filter(text);
        self.clamp_cursor();
    }

    /// Appends `c` to the filter input and debounces the new value.
    pub fn push_filter_char(&mut self, c: char, now: Instant) -> Duration {
        self.filter_input.push(c);
        self.filter.on_filter_input(self.filter_input.clone(), now)
    }

    /// Removes the last filter character. `None` if the input was empty.
    pub fn pop_filter_char(&mut self, now: Instant) -> Option<Duration> {
        self.filter_input.pop()?;
        Some(self.filter.on_filter_input(self.filter_input.clone(), now))
    }

    /// Empties the filter input. `None` if it was already empty.
    pub fn clear_filter(&mut self, now: Instant) -> Option<Duration> {
        if self.filter_input.is_empty() {
            return None;
        }
        self.filter_input.clear();
        Some(self.filter.on_filter_input(String::new(), now))
    }

    /// Moves the cursor down, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        let len = self.filter.filtered_len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        let len = self.filter.filtered_len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
    }

    /// The country under the cursor, if any.
    #[must_use]
    pub fn cursor_country(&self) -> Option<&Country> {
        self.filter.filtered_get(self.cursor)
    }

    /// Toggles selection of the cursor country.
    ///
    /// Returns the new selected state, or `None` with no country under the
    /// cursor.
    pub fn toggle_cursor_selection(&mut self) -> Option<bool> {
        let country = self.filter.filtered_get(self.cursor)?.clone();
        let selected = self.selection.toggle(&country);
        tracing::debug!(code = %country.code, selected, total = self.selection.len(), "selection toggled");
        Some(selected)
    }

    fn clamp_cursor(&mut self) {
        let len = self.filter.filtered_len();
        self.cursor = if len == 0 { 0 } else { self.cursor.min(len - 1) };
    }

    /// Feeds flag signals emitted during the last render into the cache.
    ///
    /// Returns the idle wakeup to request, if a flush was newly scheduled.
    pub fn collect_flag_signals(&mut self) -> Option<Action> {
        let mut enqueued = 0usize;
        while let Ok(signal) = self.flag_signals.try_recv() {
            if self.flag_cache.request_cache(signal) {
                enqueued += 1;
            }
        }

        if enqueued == 0 {
            return None;
        }

        tracing::trace!(enqueued, "flag signals collected");
        self.idle
            .schedule(IdleJob::FlushFlagCache)
            .then_some(Action::SetTimeout(Duration::ZERO))
    }

    /// Runs queued idle jobs.
    pub fn run_idle(&mut self) -> Vec<Action> {
        let mut actions = vec![];
        for job in self.idle.drain() {
            match job {
                IdleJob::FlushFlagCache => {
                    let batch = self.flag_cache.flush();
                    if !batch.is_empty() {
                        actions.push(Action::PostToWorker(WorkerMessage::preload_flags(batch)));
                    }
                }
            }
        }
        actions
    }

    /// The flag cache, for inspection.
    #[must_use]
    pub const fn flag_cache(&self) -> &FlagCache {
        &self.flag_cache
    }

    /// Computes the view model, presenting every visible row.
    ///
    /// Presenting is what materializes a row, so this is where flag signals
    /// are emitted; call [`collect_flag_signals`](Self::collect_flag_signals)
    /// afterwards.
    ///
    /// # Windowing
    ///
    /// The list window is centred on the cursor and shifted back when it
    /// would run past the end. The selected column shows its first rows.
    pub fn compute_viewmodel(&mut self, rows: usize) -> UIViewModel {
        let available_rows = rows.saturating_sub(CHROME_ROWS);

        // The filter can be narrowed directly through `self.filter`.
        self.clamp_cursor();

        let total = self.filter.filtered_len();
        let mut visible_start = self.cursor.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(total);
        if visible_end.saturating_sub(visible_start) < available_rows && total >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let filter_state = self.filter.state();
        let mut list_items = Vec::with_capacity(visible_end.saturating_sub(visible_start));
        for index in visible_start..visible_end {
            let Some(country) = self.filter.filtered_get(index) else {
                continue;
            };
            let presented = self.presenter.present(country, Some(filter_state));
            list_items.push(DisplayItem {
                flag: country.flag_emoji(),
                label: presented.label,
                is_cursor: index == self.cursor,
                is_selected: self.selection.contains(&country.code),
                highlight_ranges: presented.highlight.into_iter().collect(),
            });
        }

        let mirror = SelectionMirror::new(&self.selection);
        let selected_items = mirror
            .items()
            .take(available_rows)
            .map(|country| {
                let presented = self.presenter.present(country, None);
                DisplayItem {
                    flag: country.flag_emoji(),
                    label: presented.label,
                    is_cursor: false,
                    is_selected: true,
                    highlight_ranges: vec![],
                }
            })
            .collect();

        UIViewModel {
            header: self.compute_header(),
            filter_bar: FilterBarInfo {
                query: self.filter_input.clone(),
                is_focused: self.input_mode == InputMode::Filter,
            },
            list: ListPane {
                title: "COUNTRY".to_string(),
                items: list_items,
            },
            selected: ListPane {
                title: format!("Selected {}", mirror.header()),
                items: selected_items,
            },
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
            generation: self.filter.generation(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(
                " Countries ({}/{}) ",
                self.filter.filtered_len(),
                self.filter.countries().len()
            ),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Filter => "Type to filter  Enter/ESC: back to list  Ctrl+n/p: navigate",
            InputMode::List => {
                "j/k: navigate  Space: select  /: filter  ESC: clear filter  q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.filter.is_loaded() {
            return Some(EmptyState {
                message: "Loading countries...".to_string(),
                subtitle: "Reading the ISO country table".to_string(),
            });
        }

        if self.filter.filtered_len() == 0 {
            return Some(EmptyState {
                message: "No countries match".to_string(),
                subtitle: format!("Filter: \"{}\"", self.filter.state().raw()),
            });
        }

        None
    }
}
