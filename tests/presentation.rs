use countrypicker::app::{selection, CountryPresenter, FilterState, FlagCache, SelectionMirror, SelectionSet};
use countrypicker::domain::{Country, FlagDiscovered};
use std::sync::mpsc;

fn france() -> Country {
    Country::new("fr", "France", "/flags/4x3")
}

#[test]
fn rendering_twice_signals_once() {
    let (tx, rx) = mpsc::channel();
    let mut presenter = CountryPresenter::new(tx);
    let country = france();

    presenter.present(&country, Some(&FilterState::new("r")));
    presenter.present(&country, Some(&FilterState::new("")));
    presenter.present(&country, None);

    let signals: Vec<FlagDiscovered> = rx.try_iter().collect();
    assert_eq!(
        signals,
        vec![FlagDiscovered {
            img_src: "/flags/4x3/fr.svg".to_string(),
            code: "fr".to_string(),
        }]
    );
    assert!(presenter.has_signaled("fr"));
}

#[test]
fn presentation_highlights_first_match() {
    let (tx, _rx) = mpsc::channel();
    let mut presenter = CountryPresenter::new(tx);

    let presented = presenter.present(&france(), Some(&FilterState::new("R")));
    assert_eq!(presented.label, "France");
    assert_eq!(presented.highlight, Some((1, 2)));

    let plain = presenter.present(&france(), None);
    assert_eq!(plain.highlight, None);
}

#[test]
fn dropped_receiver_does_not_panic() {
    let (tx, rx) = mpsc::channel();
    drop(rx);
    let mut presenter = CountryPresenter::new(tx);

    presenter.present(&france(), None);
    assert!(presenter.has_signaled("fr"));
}

#[test]
fn request_cache_deduplicates_codes() {
    let mut cache = FlagCache::default();
    let signal = FlagDiscovered::from(&france());

    assert!(cache.request_cache(signal.clone()));
    assert!(!cache.request_cache(signal.clone()));
    assert_eq!(cache.pending_len(), 1);

    assert_eq!(cache.flush(), vec![signal.clone()]);
    assert!(cache.is_cached("fr"));
    assert!(!cache.request_cache(signal));
    assert_eq!(cache.pending_len(), 0);
}

#[test]
fn flush_keeps_enqueue_order() {
    let mut cache = FlagCache::default();
    let codes = ["de", "fr", "td"];
    for code in codes {
        cache.request_cache(FlagDiscovered::from(&Country::new(code, code, "/flags")));
    }

    let flushed: Vec<String> = cache.flush().into_iter().map(|f| f.code).collect();
    assert_eq!(flushed, codes);
    assert!(cache.flush().is_empty());
}

#[test]
fn header_label_tracks_selection_size() {
    assert_eq!(selection::selected_header(0), "Countries");
    assert_eq!(selection::selected_header(1), "Country");
    assert_eq!(selection::selected_header(5), "Countries(5)");
}

#[test]
fn mirror_lists_selection_in_order() {
    let mut set = SelectionSet::default();
    let germany = Country::new("de", "Germany", "/flags");
    assert!(set.toggle(&germany));
    assert!(set.toggle(&france()));

    let mirror = SelectionMirror::new(&set);
    assert_eq!(mirror.header(), "Countries(2)");
    let codes: Vec<&str> = mirror.items().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["de", "fr"]);

    assert!(!set.toggle(&germany));
    assert_eq!(SelectionMirror::new(&set).header(), "Country");
}
