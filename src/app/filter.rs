//! Debounced, literal, case-insensitive country filtering.
//!
//! [`FilterController`] owns the country list, the committed [`FilterState`]
//! and the derived filtered view. Input events go through a trailing-edge
//! [`Debouncer`]; only the last value of a burst is ever applied.

use crate::domain::Country;
use crate::schedule::Debouncer;
use regex::{Regex, RegexBuilder};
use std::time::{Duration, Instant};

/// A committed filter: raw text, its lowercase form and the compiled matcher.
///
/// The three fields are always built together from one raw value. The
/// matcher is the raw text with every regex metacharacter escaped, compiled
/// case-insensitively, so `"c.+"` only matches the literal `c.+`.
#[derive(Debug, Clone)]
pub struct FilterState {
    raw_value: String,
    normalized_value: String,
    pattern: Option<Regex>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new("")
    }
}

impl FilterState {
    /// Builds the filter state for `raw`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use countrypicker::app::FilterState;
    ///
    /// let state = FilterState::new("C.+");
    /// assert_eq!(state.normalized(), "c.+");
    /// assert!(state.matches("C.+ Land"));
    /// assert!(!state.matches("Chad"));
    /// ```
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let pattern = if raw.is_empty() {
            None
        } else {
            match RegexBuilder::new(&regex::escape(raw))
                .case_insensitive(true)
                .build()
            {
                Ok(re) => Some(re),
                Err(e) => {
                    // Escaped input is always valid syntax; this is the size limit.
                    tracing::debug!(error = %e, query_len = raw.len(), "filter pattern rejected, using plain substring match");
                    None
                }
            }
        };

        Self {
            raw_value: raw.to_string(),
            normalized_value: raw.to_lowercase(),
            pattern,
        }
    }

    /// The text as typed.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw_value
    }

    /// The lowercased text.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized_value
    }

    /// Returns `true` for the empty filter, which matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw_value.is_empty()
    }

    /// Tests `label` against the filter.
    #[must_use]
    pub fn matches(&self, label: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        self.pattern.as_ref().map_or_else(
            || label.to_lowercase().contains(&self.normalized_value),
            |re| re.is_match(label),
        )
    }

    /// Finds the first match in `label` as a `(start, end)` character range.
    ///
    /// Returns `None` for the empty filter or when nothing matches.
    #[must_use]
    pub fn find(&self, label: &str) -> Option<(usize, usize)> {
        if self.is_empty() {
            return None;
        }

        let byte_range = match &self.pattern {
            Some(re) => re.find(label).map(|m| (m.start(), m.end())),
            None => find_lowercase(label, &self.normalized_value),
        }?;

        let start = label[..byte_range.0].chars().count();
        let len = label[byte_range.0..byte_range.1].chars().count();
        Some((start, start + len))
    }
}

/// Byte range of the first occurrence of `needle` (already lowercase) in
/// `haystack`, comparing character-wise in lowercase.
fn find_lowercase(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    let needle_len = needle.chars().count();
    let starts: Vec<usize> = haystack.char_indices().map(|(i, _)| i).collect();

    starts.iter().enumerate().find_map(|(n, &start)| {
        if n + needle_len > starts.len() {
            return None;
        }
        let end = starts.get(n + needle_len).copied().unwrap_or(haystack.len());
        (haystack[start..end].to_lowercase() == needle).then_some((start, end))
    })
}

/// Owner of the country list, the committed filter and the filtered view.
///
/// The filtered view is a list of indices into the country list, so it keeps
/// the source order and never copies countries. Every applied filter bumps
/// [`generation`](Self::generation), telling views to re-derive highlighting
/// even when the same countries stay visible.
#[derive(Debug)]
pub struct FilterController {
    countries: Vec<Country>,
    state: FilterState,
    filtered: Vec<usize>,
    generation: u64,
    debouncer: Debouncer<String>,
}

impl FilterController {
    /// Creates an empty controller with the given debounce quiet period.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            countries: Vec::new(),
            state: FilterState::default(),
            filtered: Vec::new(),
            generation: 0,
            debouncer: Debouncer::new(delay),
        }
    }

    /// Handles a value-commit event from the filter input.
    ///
    /// Supersedes any pending input. Returns the delay after which
    /// [`poll`](Self::poll) should be called.
    pub fn on_filter_input(&mut self, text: String, now: Instant) -> Duration {
        tracing::trace!(query = %text, "filter input debounced");
        self.debouncer.schedule(text, now)
    }

    /// Applies the pending input if its quiet period has elapsed.
    ///
    /// Returns `true` if a filter was applied.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(text) => {
                self.run_filter(&text);
                true
            }
            None => false,
        }
    }

    /// Time left before the pending input is applied, `None` when idle.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    /// Commits `text` immediately and recomputes the filtered view.
    pub fn run_filter(&mut self, text: &str) {
        let _span = tracing::debug_span!(
            "run_filter",
            total_countries = self.countries.len(),
            query_len = text.len()
        )
        .entered();

        self.state = FilterState::new(text);
        self.recompute();
        self.generation += 1;

        tracing::debug!(
            filtered_count = self.filtered.len(),
            generation = self.generation,
            "filter applied"
        );
    }

    /// Installs the country list and applies the committed filter to it.
    ///
    /// The list is loaded once; later calls are ignored and return `false`.
    pub fn set_countries(&mut self, countries: Vec<Country>) -> bool {
        if !self.countries.is_empty() {
            tracing::debug!("country list already loaded, ignoring reload");
            return false;
        }

        self.countries = countries;
        self.recompute();
        self.generation += 1;
        true
    }

    fn recompute(&mut self) {
        let state = &self.state;
        self.filtered = self
            .countries
            .iter()
            .enumerate()
            .filter(|(_, country)| state.matches(&country.label))
            .map(|(idx, _)| idx)
            .collect();
    }

    /// Returns `true` once the country list has arrived.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        !self.countries.is_empty()
    }

    /// The full country list in source order.
    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// The committed filter.
    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    /// Number of countries passing the filter.
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The `index`-th country of the filtered view.
    #[must_use]
    pub fn filtered_get(&self, index: usize) -> Option<&Country> {
        self.filtered
            .get(index)
            .and_then(|&idx| self.countries.get(idx))
    }

    /// Iterates the filtered view in source order.
    pub fn filtered(&self) -> impl Iterator<Item = &Country> + '_ {
        self.filtered.iter().filter_map(|&idx| self.countries.get(idx))
    }

    /// Monotonic counter bumped on every applied filter or list load.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}
