use countrypicker::domain::catalog;
use countrypicker::worker::{WorkerMessage, WorkerResponse};
use countrypicker::{handle_event, Action, AppState, Config, Event, InputMode, PickerError, Theme};
use std::time::{Duration, Instant};

fn config() -> Config {
    Config {
        flags_path: "/flags".to_string(),
        ..Config::default()
    }
}

fn loaded_state(now: Instant) -> AppState {
    let mut state = AppState::new(&config(), Theme::default());
    let countries = catalog::countries("/flags");
    handle_event(&mut state, &Event::WorkerResponse(WorkerResponse::CountriesLoaded { countries }), now).unwrap();
    state
}

#[test]
fn started_schedules_catalog_request() {
    let mut state = AppState::new(&config(), Theme::default());
    let t0 = Instant::now();

    let (_, actions) = handle_event(&mut state, &Event::Started, t0).unwrap();
    assert_eq!(actions, vec![Action::SetTimeout(Duration::from_millis(200))]);

    let (_, early) = handle_event(&mut state, &Event::Timer, t0 + Duration::from_millis(150)).unwrap();
    assert_eq!(early, vec![Action::SetTimeout(Duration::from_millis(50))]);

    let (_, due) = handle_event(&mut state, &Event::Timer, t0 + Duration::from_millis(200)).unwrap();
    assert_eq!(due.len(), 1);
    assert!(matches!(
        &due[0],
        Action::PostToWorker(WorkerMessage::LoadCountries { flags_base_path, .. }) if flags_base_path == "/flags"
    ));
}

#[test]
fn typing_is_debounced_through_timers() {
    let t0 = Instant::now();
    let mut state = loaded_state(t0);
    let generation = state.filter.generation();

    handle_event(&mut state, &Event::FocusFilter, t0).unwrap();
    assert_eq!(state.input_mode, InputMode::Filter);

    let (_, first) = handle_event(&mut state, &Event::Char('g'), t0).unwrap();
    assert_eq!(first, vec![Action::SetTimeout(Duration::from_millis(100))]);
    handle_event(&mut state, &Event::Char('e'), t0 + Duration::from_millis(50)).unwrap();

    let (render, rearm) = handle_event(&mut state, &Event::Timer, t0 + Duration::from_millis(100)).unwrap();
    assert!(!render);
    assert_eq!(rearm, vec![Action::SetTimeout(Duration::from_millis(50))]);
    assert_eq!(state.filter.generation(), generation);

    let (render, _) = handle_event(&mut state, &Event::Timer, t0 + Duration::from_millis(150)).unwrap();
    assert!(render);
    assert_eq!(state.filter.generation(), generation + 1);
    assert_eq!(state.filter.state().raw(), "ge");
}

#[test]
fn list_keys_are_ignored_as_filter_text_in_list_mode() {
    let t0 = Instant::now();
    let mut state = loaded_state(t0);

    let (render, actions) = handle_event(&mut state, &Event::Char('x'), t0).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
    assert!(state.filter_input.is_empty());
}

#[test]
fn rendered_rows_are_preloaded_on_idle() {
    let t0 = Instant::now();
    let mut state = loaded_state(t0);

    let viewmodel = state.compute_viewmodel(24);
    let visible: Vec<String> = viewmodel.list.items.iter().map(|i| i.label.clone()).collect();
    assert_eq!(visible.len(), 15);

    assert_eq!(state.collect_flag_signals(), Some(Action::SetTimeout(Duration::ZERO)));
    assert_eq!(state.flag_cache().pending_len(), 15);

    state.compute_viewmodel(24);
    assert_eq!(state.collect_flag_signals(), None);

    let (_, actions) = handle_event(&mut state, &Event::Timer, t0).unwrap();
    let [Action::PostToWorker(WorkerMessage::PreloadFlags { flags, .. })] = actions.as_slice() else {
        panic!("expected one preload batch, got {actions:?}");
    };
    let labels: Vec<String> = catalog::countries("/flags")
        .into_iter()
        .take(15)
        .map(|c| c.label)
        .collect();
    assert_eq!(visible, labels);
    assert_eq!(flags.len(), 15);
    assert!(flags[0].img_src.starts_with("/flags/"));
    assert_eq!(state.flag_cache().pending_len(), 0);
}

#[test]
fn selection_survives_filter_and_updates_header() {
    let t0 = Instant::now();
    let mut state = loaded_state(t0);
    state.filter.run_filter("france");

    handle_event(&mut state, &Event::ToggleSelection, t0).unwrap();
    assert_eq!(state.compute_viewmodel(24).selected.title, "Selected Country");

    state.filter.run_filter("chad");
    handle_event(&mut state, &Event::ToggleSelection, t0).unwrap();
    state.filter.run_filter("zzz");

    let viewmodel = state.compute_viewmodel(24);
    assert_eq!(viewmodel.selected.title, "Selected Countries(2)");
    assert_eq!(viewmodel.selected.items.len(), 2);
    assert!(viewmodel.empty_state.is_some());
}

#[test]
fn viewmodel_marks_cursor_and_highlight() {
    let t0 = Instant::now();
    let mut state = loaded_state(t0);
    state.filter.run_filter("ance");

    let viewmodel = state.compute_viewmodel(24);
    assert_eq!(viewmodel.header.title, format!(" Countries (1/{}) ", catalog::ISO_COUNTRIES.len()));
    let item = &viewmodel.list.items[0];
    assert_eq!(item.label, "France");
    assert!(item.is_cursor);
    assert_eq!(item.highlight_ranges, vec![(2, 6)]);
    assert_eq!(item.flag, "\u{1F1EB}\u{1F1F7}");
}

#[test]
fn cursor_wraps_and_clamps() {
    let t0 = Instant::now();
    let mut state = loaded_state(t0);

    handle_event(&mut state, &Event::KeyUp, t0).unwrap();
    assert_eq!(state.cursor, catalog::ISO_COUNTRIES.len() - 1);

    handle_event(&mut state, &Event::FocusFilter, t0).unwrap();
    handle_event(&mut state, &Event::Char('f'), t0).unwrap();
    handle_event(&mut state, &Event::Timer, t0 + Duration::from_millis(100)).unwrap();
    assert!(state.cursor < state.filter.filtered_len());
}

#[test]
fn worker_error_surfaces_as_picker_error() {
    let mut state = AppState::new(&config(), Theme::default());
    let event = Event::WorkerResponse(WorkerResponse::Error {
        message: "boom".to_string(),
    });

    let err = handle_event(&mut state, &event, Instant::now()).unwrap_err();
    assert!(matches!(err, PickerError::Worker(ref message) if message == "boom"));
    assert!(!state.filter.is_loaded());
}

#[test]
fn narrowing_filter_under_cursor_keeps_viewmodel_in_range() {
    let t0 = Instant::now();
    let mut state = loaded_state(t0);
    handle_event(&mut state, &Event::KeyUp, t0).unwrap();
    assert_eq!(state.cursor, catalog::ISO_COUNTRIES.len() - 1);

    state.filter.run_filter("france");
    let viewmodel = state.compute_viewmodel(24);

    assert_eq!(state.cursor, 0);
    assert_eq!(viewmodel.list.items.len(), 1);
    assert!(viewmodel.list.items[0].is_cursor);
}

#[test]
fn run_filter_clamps_cursor() {
    let t0 = Instant::now();
    let mut state = loaded_state(t0);
    handle_event(&mut state, &Event::KeyUp, t0).unwrap();

    state.run_filter("land");
    assert!(state.cursor < state.filter.filtered_len());

    state.run_filter("zzz");
    assert_eq!(state.cursor, 0);
    assert!(state.compute_viewmodel(24).list.items.is_empty());
}
