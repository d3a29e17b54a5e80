use countrypicker::domain::{Country, FlagDiscovered};
use countrypicker::worker::{CountryWorker, WorkerMessage, WorkerResponse};
use std::fs;

#[test]
fn load_countries_builds_catalog_paths() {
    let mut worker = CountryWorker::default();

    let response = worker.handle_message(WorkerMessage::load_countries("/srv/flags/".to_string()));
    let WorkerResponse::CountriesLoaded { countries } = &response else {
        panic!("expected CountriesLoaded, got {response:?}");
    };
    let germany = countries.iter().find(|c| c.code == "de").unwrap();
    assert_eq!(germany.img_src, "/srv/flags/de.svg");
}

#[test]
fn preload_counts_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().to_str().unwrap();
    fs::write(dir.path().join("fr.svg"), "<svg/>").unwrap();

    let flags = vec![
        FlagDiscovered::from(&Country::new("fr", "France", base)),
        FlagDiscovered::from(&Country::new("de", "Germany", base)),
    ];

    let mut worker = CountryWorker::default();
    let response = worker.handle_message(WorkerMessage::preload_flags(flags));

    assert_eq!(response, WorkerResponse::FlagsPreloaded { loaded: 1, failed: 1 });
    assert!(worker.has_flag("fr"));
    assert!(!worker.has_flag("de"));
}

#[test]
fn preloaded_flags_are_not_reread() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().to_str().unwrap();
    fs::write(dir.path().join("td.svg"), "<svg/>").unwrap();
    let chad = FlagDiscovered::from(&Country::new("td", "Chad", base));

    let mut worker = CountryWorker::default();
    worker.handle_message(WorkerMessage::preload_flags(vec![chad.clone()]));
    fs::remove_file(dir.path().join("td.svg")).unwrap();

    let response = worker.handle_message(WorkerMessage::preload_flags(vec![chad]));
    assert_eq!(response, WorkerResponse::FlagsPreloaded { loaded: 1, failed: 0 });
    assert_eq!(worker.stored_flags(), 1);
}

#[test]
fn messages_round_trip_as_json() {
    let message = WorkerMessage::load_countries("/flags".to_string());
    let json = serde_json::to_string(&message).unwrap();

    assert!(!json.contains("trace_context"));
    assert_eq!(serde_json::from_str::<WorkerMessage>(&json).unwrap(), message);
}
