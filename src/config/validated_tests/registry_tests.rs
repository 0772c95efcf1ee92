//! Tests for resolving the registry from a validated configuration.

use super::*;

#[test]
fn defaults_without_overrides() {
    let config = ValidatedConfig::from_raw(&cli(&[]), None, &EnvSnapshot::new()).unwrap();
    let registry = config.registry();

    assert_eq!(registry.base_fallback_url(), "http://localhost:8080");
    assert_eq!(registry.ant_message_duration(), 6);
}

#[test]
fn cli_mode_selects_relative_base_url() {
    let config =
        ValidatedConfig::from_raw(&cli(&["--mode", "production"]), None, &EnvSnapshot::new())
            .unwrap();

    assert_eq!(config.registry().base_fallback_url(), "..");
}

#[test]
fn forced_playwright_uses_test_driver_default() {
    let config =
        ValidatedConfig::from_raw(&cli(&["--playwright"]), None, &EnvSnapshot::new()).unwrap();

    assert_eq!(config.registry().ant_message_duration(), 1);
}

#[test]
fn playwright_detected_from_process_env() {
    let config =
        ValidatedConfig::from_raw(&cli(&[]), None, &process(&[("PLAYWRIGHT", "true")])).unwrap();

    assert_eq!(config.registry().ant_message_duration(), 1);
}

#[test]
fn duration_override_beats_forced_playwright() {
    let config = ValidatedConfig::from_raw(
        &cli(&["--playwright", "--env", "ANT_MESSAGE_DURATION=5"]),
        None,
        &EnvSnapshot::new(),
    )
    .unwrap();

    assert_eq!(config.registry().ant_message_duration(), 5);
}

#[test]
fn malformed_duration_falls_back() {
    let toml = toml(
        r#"
        [env]
        ANT_MESSAGE_DURATION = "soon"
    "#,
    );

    let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml), &EnvSnapshot::new()).unwrap();

    assert_eq!(config.registry().ant_message_duration(), 6);
}

#[test]
fn display_summarizes_config() {
    let config = ValidatedConfig::from_raw(
        &cli(&["export", "--format", "toml", "--mode", "production", "--env", "A=1"]),
        None,
        &EnvSnapshot::new(),
    )
    .unwrap();

    assert_eq!(
        config.to_string(),
        "Config { command: export(toml), mode: production, overrides: 2, playwright: auto }"
    );
}

#[test]
fn missing_command_defaults_to_show() {
    let config = ValidatedConfig::from_raw(&cli(&["-v"]), None, &EnvSnapshot::new()).unwrap();

    assert_eq!(config.command, Command::Show);
    assert!(config.verbose);
}
