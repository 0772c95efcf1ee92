//! Tests for TOML configuration parsing.

use super::ConfigError;
use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert_eq!(config.runtime.mode, None);
        assert!(!config.runtime.playwright);
        assert!(config.env.is_empty());
    }

    #[test]
    fn parse_runtime_section() {
        let toml = r#"
            [runtime]
            mode = "production"
            playwright = true
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.runtime.mode.as_deref(), Some("production"));
        assert!(config.runtime.playwright);
    }

    #[test]
    fn parse_env_section() {
        let toml = r#"
            [env]
            ANT_MESSAGE_DURATION = "3"
            PLAYWRIGHT = "1"
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.env.len(), 2);
        assert_eq!(
            config.env.get("ANT_MESSAGE_DURATION").map(String::as_str),
            Some("3")
        );
    }
}

mod errors {
    use super::*;

    #[test]
    fn unknown_section_is_rejected() {
        let result = TomlConfig::parse("[server]\nport = 8080");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn unknown_runtime_field_is_rejected() {
        let result = TomlConfig::parse("[runtime]\nverbose = true");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn non_string_env_value_is_rejected() {
        let result = TomlConfig::parse("[env]\nANT_MESSAGE_DURATION = 3");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn missing_file_is_file_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let result = TomlConfig::load(&path);

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert_eq!(config.runtime.mode, None);
        assert!(!config.runtime.playwright);
        assert!(config.env.is_empty());
    }

    #[test]
    fn default_template_mentions_every_option() {
        let template = default_config_template();

        for option in ["[runtime]", "mode", "playwright", "[env]", "ANT_MESSAGE_DURATION"] {
            assert!(template.contains(option), "missing {option}");
        }
    }
}
