use nc_gui_consts::config::Cli;
use nc_gui_consts::env::EnvSnapshot;

use super::*;

fn config(args: &[&str], env: &[(&str, &str)]) -> ValidatedConfig {
    let mut full_args = vec!["nc-gui-consts"];
    full_args.extend(args);
    let cli = Cli::parse_from_iter(full_args);
    let process: EnvSnapshot = env.iter().copied().collect();
    ValidatedConfig::from_raw(&cli, None, &process).unwrap()
}

fn run(args: &[&str], env: &[(&str, &str)]) -> String {
    let mut out = Vec::new();
    execute(&config(args, env), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

mod show {
    use super::*;

    #[test]
    fn prints_one_line_per_entry() {
        let output = run(&[], &[]);

        assert_eq!(output.lines().count(), 11);
    }

    #[test]
    fn aligns_names() {
        let output = run(&["show"], &[]);

        let first = output.lines().next().unwrap();
        let separator = first.find(" = ").unwrap();
        for line in output.lines() {
            assert_eq!(line.find(" = "), Some(separator), "{line}");
        }
    }

    #[test]
    fn reflects_environment() {
        let output = run(&["show"], &[("NODE_ENV", "production"), ("PLAYWRIGHT", "1")]);

        assert!(output.lines().any(|l| l.starts_with("BASE_FALLBACK_URL") && l.ends_with("= ..")));
        assert!(output.lines().any(|l| l.starts_with("ANT_MESSAGE_DURATION") && l.ends_with("= 1")));
        assert!(output.contains("id, title, created_at, updated_at"));
    }
}

mod export_command {
    use super::*;

    #[test]
    fn json_output_is_valid() {
        let output = run(&["export"], &[("ANT_MESSAGE_DURATION", "8")]);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["ANT_MESSAGE_DURATION"], 8);
        assert_eq!(value["NO_SCOPE"], "nc");
    }

    #[test]
    fn toml_output_is_valid() {
        let output = run(&["export", "--format", "toml", "--mode", "production"], &[]);
        let value: toml::Table = toml::from_str(&output).unwrap();

        assert_eq!(value["BASE_FALLBACK_URL"].as_str(), Some(".."));
    }

    #[test]
    fn output_ends_with_single_newline() {
        let output = run(&["export"], &[]);

        assert!(output.ends_with("}\n"));
    }
}

#[test]
fn init_writes_nothing() {
    let output = run(&["init"], &[]);

    assert!(output.is_empty());
}
