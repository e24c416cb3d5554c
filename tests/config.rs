use bookstacks::{initialize, Config, Route, Theme};
use std::collections::BTreeMap;
use std::io::Write;

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}

#[test]
fn empty_configuration_uses_defaults() {
    let config = Config::from_zellij(&BTreeMap::new());
    assert_eq!(config.start_route, Route::Home);
    assert!(config.theme_name.is_none());
    assert!(config.trace_level.is_none());
    assert_eq!(config.load_theme(), Theme::default());
}

#[test]
fn blank_values_are_ignored() {
    let config = Config::from_zellij(&map(&[("theme", "  "), ("start_route", "")]));
    assert!(config.theme_name.is_none());
    assert_eq!(config.start_route, Route::Home);
}

#[test]
fn start_route_opens_the_configured_page() {
    let config = Config::from_zellij(&map(&[("start_route", "/book/2")]));
    let state = initialize(&config);
    assert_eq!(state.route, Route::Detail { id: "2".to_string() });
    assert_eq!(state.pane_title(), "Bookstacks: /book/2");
}

#[test]
fn unknown_theme_name_falls_back_to_default() {
    let config = Config::from_zellij(&map(&[("theme", "neon")]));
    assert_eq!(config.load_theme().name, "emerald");
}

#[test]
fn theme_file_takes_precedence_over_name() {
    let parchment = Theme::from_name("parchment").unwrap();
    let mut renamed = parchment.clone();
    renamed.name = "ink".to_string();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(toml::to_string(&renamed).unwrap().as_bytes()).unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let config = Config::from_zellij(&map(&[("theme", "emerald"), ("theme_file", &path)]));

    let theme = config.load_theme();
    assert_eq!(theme.name, "ink");
    assert_eq!(theme.colors, parchment.colors);
}

#[test]
fn unreadable_theme_file_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "name = \"half\"\n[colors]\nbrand_fg = \"#ffffff\"\n").unwrap();

    assert!(Theme::from_file(&path).is_err());

    let config = Config {
        theme_file: Some(path.to_string_lossy().into_owned()),
        ..Config::default()
    };
    assert_eq!(config.load_theme(), Theme::default());
}

#[test]
fn invalid_trace_level_is_dropped() {
    let config = Config::from_zellij(&map(&[("trace_level", "bookstacks=loud")]));
    assert!(config.trace_level.is_none());

    let config = Config::from_zellij(&map(&[("trace_level", "bookstacks=debug,warn")]));
    assert_eq!(config.trace_level.as_deref(), Some("bookstacks=debug,warn"));
}
