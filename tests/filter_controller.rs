use countrypicker::app::{FilterController, FilterState};
use countrypicker::domain::{catalog, Country};
use std::time::{Duration, Instant};

const DELAY: Duration = Duration::from_millis(100);

fn labels(controller: &FilterController) -> Vec<&str> {
    controller.filtered().map(|c| c.label.as_str()).collect()
}

fn france_germany() -> FilterController {
    let mut controller = FilterController::new(DELAY);
    controller.set_countries(vec![
        Country::new("fr", "France", "/flags"),
        Country::new("de", "Germany", "/flags"),
    ]);
    controller
}

#[test]
fn metacharacters_match_literally() {
    let mut controller = FilterController::new(DELAY);
    controller.set_countries(vec![
        Country::new("xx", "C.+ Land", "/flags"),
        Country::new("td", "Chad", "/flags"),
    ]);

    controller.run_filter("c.+");

    assert_eq!(labels(&controller), vec!["C.+ Land"]);
}

#[test]
fn unmatched_filter_yields_empty_list() {
    let mut controller = france_germany();
    controller.run_filter("[(*");

    assert_eq!(controller.filtered_len(), 0);
    assert_eq!(controller.state().raw(), "[(*");
}

#[test]
fn rapid_inputs_recompute_once_with_last_value() {
    let mut controller = FilterController::new(DELAY);
    controller.set_countries(catalog::countries("/flags"));
    let generation = controller.generation();
    let t0 = Instant::now();

    controller.on_filter_input("f".to_string(), t0);
    controller.on_filter_input("fr".to_string(), t0 + Duration::from_millis(30));
    controller.on_filter_input("fra".to_string(), t0 + Duration::from_millis(60));

    assert!(!controller.poll(t0 + Duration::from_millis(100)));
    assert_eq!(controller.generation(), generation);

    assert!(controller.poll(t0 + Duration::from_millis(160)));
    assert_eq!(controller.generation(), generation + 1);
    assert_eq!(controller.state().raw(), "fra");
    assert_eq!(labels(&controller), vec!["France"]);

    assert!(!controller.poll(t0 + Duration::from_millis(500)));
    assert_eq!(controller.generation(), generation + 1);
}

#[test]
fn remaining_tracks_latest_keystroke() {
    let mut controller = france_germany();
    let t0 = Instant::now();

    assert_eq!(controller.on_filter_input("g".to_string(), t0), DELAY);
    controller.on_filter_input("ge".to_string(), t0 + Duration::from_millis(40));

    assert_eq!(
        controller.remaining(t0 + Duration::from_millis(100)),
        Some(Duration::from_millis(40))
    );
}

#[test]
fn filtering_is_case_insensitive() {
    let mut controller = france_germany();
    controller.run_filter("GER");

    assert_eq!(labels(&controller), vec!["Germany"]);
    assert_eq!(controller.state().normalized(), "ger");
}

#[test]
fn filter_and_clear_restores_source_order() {
    let mut controller = france_germany();
    let state = FilterState::new("r");

    controller.run_filter("r");
    assert_eq!(labels(&controller), vec!["France", "Germany"]);
    assert_eq!(state.find("France"), Some((1, 2)));
    assert_eq!(state.find("Germany"), Some((2, 3)));

    controller.run_filter("ance");
    assert_eq!(labels(&controller), vec!["France"]);

    controller.run_filter("");
    assert_eq!(labels(&controller), vec!["France", "Germany"]);
    assert_eq!(controller.state().find("France"), None);
}

#[test]
fn filter_committed_before_load_applies_on_arrival() {
    let mut controller = FilterController::new(DELAY);
    controller.run_filter("ger");
    assert_eq!(controller.filtered_len(), 0);

    assert!(controller.set_countries(vec![
        Country::new("fr", "France", "/flags"),
        Country::new("de", "Germany", "/flags"),
    ]));
    assert_eq!(labels(&controller), vec!["Germany"]);
}

#[test]
fn country_list_loads_once() {
    let mut controller = france_germany();

    assert!(!controller.set_countries(vec![Country::new("td", "Chad", "/flags")]));
    assert_eq!(controller.countries().len(), 2);
}

#[test]
fn highlight_counts_characters_not_bytes() {
    let state = FilterState::new("land");

    assert_eq!(state.find("Åland Islands"), Some((1, 5)));
}

#[test]
fn catalog_is_in_name_order() {
    let countries = catalog::countries("/flags");
    let first: Vec<&str> = countries.iter().take(3).map(|c| c.label.as_str()).collect();

    assert_eq!(first, vec!["Afghanistan", "Åland Islands", "Albania"]);
    assert_eq!(countries.last().map(|c| c.label.as_str()), Some("Zimbabwe"));

    let mut controller = FilterController::new(DELAY);
    controller.set_countries(countries);
    controller.run_filter("ger");
    assert_eq!(labels(&controller), vec!["Algeria", "Germany", "Niger", "Nigeria"]);
}
