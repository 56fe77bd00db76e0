use std::ffi::OsString;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn defaults() {
    let config = SessionConfig::default();
    assert!(config.include_paths.is_empty());
    assert_eq!(config.emission, EmissionPolicy::PerModule);
    assert_eq!(config.color, ColorMode::Auto);
}

#[test]
fn include_paths_keep_order() {
    let (config, positional) =
        SessionConfig::parse_args(["-I", "lib", "main", "-Ivendor"]).unwrap();
    assert_eq!(
        config.include_paths,
        vec![PathBuf::from("lib"), PathBuf::from("vendor")]
    );
    assert_eq!(positional, vec!["main".to_string()]);
}

#[test]
fn emission_and_color_flags() {
    let (config, _) =
        SessionConfig::parse_args(["--emit-at-end", "--color=never"]).unwrap();
    assert_eq!(config.emission, EmissionPolicy::SessionEnd);
    assert_eq!(config.color, ColorMode::Never);
}

#[test]
fn missing_include_value() {
    let err = SessionConfig::parse_args(["-I"]).err();
    assert_eq!(
        err,
        Some(ConfigError::MissingValue {
            flag: "-I".to_string()
        })
    );
}

#[test]
fn bad_color_and_unknown_flag() {
    assert!(matches!(
        SessionConfig::parse_args(["--color=sometimes"]),
        Err(ConfigError::InvalidColor(_))
    ));
    assert_eq!(
        SessionConfig::parse_args(["--frobnicate"]).err(),
        Some(ConfigError::UnknownFlag("--frobnicate".to_string()))
    );
}

#[test]
fn path_list_appends_after_cli_roots() {
    let mut config = SessionConfig::new(vec![PathBuf::from("cli")]);
    let list = std::env::join_paths(["a", "b"]).unwrap();
    config.append_path_list(&list);
    assert_eq!(
        config.include_paths,
        vec![PathBuf::from("cli"), PathBuf::from("a"), PathBuf::from("b")]
    );
}

#[test]
fn empty_path_list_entries_are_skipped() {
    let mut config = SessionConfig::default();
    config.append_path_list(&OsString::new());
    assert!(config.include_paths.is_empty());
}

#[test]
fn every_accepted_option_is_documented() {
    for flag in ["-I <dir>", "--color=<mode>", "--emit-at-end"] {
        assert!(OPTIONS_HELP.contains(flag), "{flag} missing from help");
    }
    for line in OPTIONS_HELP.lines() {
        let flag = line.split_whitespace().next().unwrap();
        let args: Vec<&str> = match flag {
            "-I" => vec!["-I", "dir"],
            "--color=<mode>" => vec!["--color=never"],
            other => vec![other],
        };
        assert!(SessionConfig::parse_args(args).is_ok(), "{flag} not accepted");
    }
}
