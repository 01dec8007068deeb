//! Settings-file override tests against the real loader.

use std::io::Write;

use tempfile::NamedTempFile;

use portfolio_site::config::{load_config, ConfigError, PortfolioConfig};

fn settings_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn no_overrides_yields_the_default_profile() {
    let loaded = load_config(None).unwrap();
    assert_eq!(loaded, PortfolioConfig::default());
}

#[test]
fn file_overrides_apply_and_defaults_fill_the_rest() {
    let file = settings_file(
        r#"
        [identity]
        name = "John Dev"
        title = "MERN Stack Developer"

        [theme]
        dark_mode = false

        [server]
        port = 9000
        "#,
    );

    let loaded = load_config(Some(file.path())).unwrap();
    assert_eq!(loaded.identity.name, "John Dev");
    assert_eq!(loaded.identity.title, "MERN Stack Developer");
    assert!(!loaded.theme.dark_mode);
    assert_eq!(loaded.server.port, 9000);

    // Everything not named in the file keeps its default.
    let default = PortfolioConfig::default();
    assert_eq!(loaded.identity.email, default.identity.email);
    assert_eq!(loaded.theme.primary_color, default.theme.primary_color);
    assert_eq!(loaded.server.host, default.server.host);
    assert_eq!(loaded.projects, default.projects);
    assert_eq!(loaded.education, default.education);
}

#[test]
fn out_of_range_port_fails_to_load() {
    let file = settings_file("[server]\nport = 70000\n");
    let err = load_config(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn duplicate_skill_categories_fail_to_load() {
    let file = settings_file(
        r#"
        [[skills]]
        name = "Languages"
        items = ["Rust"]

        [[skills]]
        name = "Languages"
        items = ["Python"]
        "#,
    );
    let err = load_config(Some(file.path())).unwrap_err();
    match err {
        ConfigError::Validation(errors) => {
            assert!(errors.iter().any(|e| e.to_string().contains("Languages")));
        }
        other => panic!("expected validation failure, got {other}"),
    }
}

#[test]
fn degree_ending_before_start_fails_to_load() {
    let file = settings_file(
        r#"
        [[education]]
        degree = "B.S."
        institution = "Somewhere"
        location = "Nowhere"
        start_year = 2020
        end_year = 2016
        description = ""
        "#,
    );
    let err = load_config(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn missing_settings_file_is_an_io_error() {
    let err = load_config(Some(std::path::Path::new("/definitely/not/here.toml")))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn skill_order_survives_the_round_trip() {
    let file = settings_file(
        r#"
        [[skills]]
        name = "Zebra"
        items = []

        [[skills]]
        name = "Alpha"
        items = []
        "#,
    );
    let loaded = load_config(Some(file.path())).unwrap();
    let names: Vec<&str> = loaded.skills.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Zebra", "Alpha"]);
}
