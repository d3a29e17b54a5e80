use countrypicker::{resolve_theme, Config, Theme};
use std::collections::BTreeMap;
use std::time::Duration;

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn defaults_when_empty() {
    let config = Config::from_zellij(&BTreeMap::new());

    assert_eq!(config.filter_delay, Duration::from_millis(100));
    assert_eq!(config.load_delay, Duration::from_millis(200));
    assert_eq!(config.flags_path, "/host/.local/share/zellij/countrypicker/flags/4x3");
    assert!(config.theme_name.is_none());
    assert!(config.trace_level.is_none());
}

#[test]
fn filter_delay_is_clamped() {
    let low = Config::from_zellij(&map(&[("filter_delay_ms", "0")]));
    let high = Config::from_zellij(&map(&[("filter_delay_ms", "60000")]));

    assert_eq!(low.filter_delay, Duration::from_millis(10));
    assert_eq!(high.filter_delay, Duration::from_millis(2000));
}

#[test]
fn unparseable_values_fall_back() {
    let config = Config::from_zellij(&map(&[
        ("filter_delay_ms", "fast"),
        ("load_delay_ms", "-1"),
        ("flags_path", "  "),
    ]));

    assert_eq!(config.filter_delay, Duration::from_millis(100));
    assert_eq!(config.load_delay, Duration::from_millis(200));
    assert_eq!(config.flags_path, Config::default().flags_path);
}

#[test]
fn explicit_values_are_used() {
    let config = Config::from_zellij(&map(&[
        ("load_delay_ms", "0"),
        ("flags_path", "~/flags/1x1"),
        ("theme", "catppuccin-latte"),
        ("trace_level", "debug"),
    ]));

    assert_eq!(config.load_delay, Duration::ZERO);
    assert_eq!(config.flags_path, "/host/flags/1x1");
    assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    assert_eq!(config.trace_level.as_deref(), Some("debug"));
}

#[test]
fn theme_resolution_falls_back_to_default() {
    let default_header = Theme::default().colors.header_fg;

    let unknown = Config {
        theme_name: Some("solarized".to_string()),
        ..Config::default()
    };
    assert_eq!(resolve_theme(&unknown).colors.header_fg, default_header);

    let missing_file = Config {
        theme_file: Some("/nonexistent/theme.toml".to_string()),
        theme_name: Some("catppuccin-latte".to_string()),
        ..Config::default()
    };
    let latte = Theme::from_name("catppuccin-latte").unwrap();
    assert_eq!(resolve_theme(&missing_file).colors.header_fg, latte.colors.header_fg);
}
