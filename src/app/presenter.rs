//! Per-row presentation of a country.
//!
//! [`CountryPresenter`] turns a [`Country`] into what a list row shows and
//! emits the one-shot [`FlagDiscovered`] signal the first time a country is
//! materialized. The signal goes out over the channel handed to the presenter
//! at construction; the state owner drains the other end into the flag cache.

use super::filter::FilterState;
use crate::domain::{Country, FlagDiscovered};
use std::collections::HashSet;
use std::sync::mpsc::Sender;

/// Display data for one country row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedCountry {
    /// The unmodified label.
    pub label: String,
    /// Character range of the first filter match, if any.
    pub highlight: Option<(usize, usize)>,
}

/// Presents countries and signals each one's flag exactly once.
///
/// The "already signaled" set is keyed by country code and lives for the
/// presenter's lifetime, so re-rendering a country (after scrolling or a
/// filter round-trip) never signals it again.
#[derive(Debug)]
pub struct CountryPresenter {
    signaled: HashSet<String>,
    signals: Sender<FlagDiscovered>,
}

impl CountryPresenter {
    #[must_use]
    pub fn new(signals: Sender<FlagDiscovered>) -> Self {
        Self {
            signaled: HashSet::new(),
            signals,
        }
    }

    /// Presents `country` under `filter`, signaling its flag on first sight.
    ///
    /// Pass `None` (or an empty filter) for rows that are never highlighted,
    /// such as the selected column.
    pub fn present(&mut self, country: &Country, filter: Option<&FilterState>) -> PresentedCountry {
        if self.signaled.insert(country.code.clone())
            && self.signals.send(FlagDiscovered::from(country)).is_err()
        {
            tracing::debug!(code = %country.code, "flag signal receiver dropped");
        }

        PresentedCountry {
            label: country.label.clone(),
            highlight: filter.and_then(|f| f.find(&country.label)),
        }
    }

    /// Returns `true` if `code` has already been signaled.
    #[must_use]
    pub fn has_signaled(&self, code: &str) -> bool {
        self.signaled.contains(code)
    }
}
