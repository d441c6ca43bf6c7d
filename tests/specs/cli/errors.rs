//! CLI error handling specs
//!
//! Verify error messages for bad arguments and config files.

use crate::prelude::*;

#[test]
fn missing_config_file_shows_error() {
    let temp = Project::empty();
    let path = temp.path().join("missing.toml");
    let run = cli()
        .args(&["-c", path.to_str().unwrap(), "x"])
        .fails()
        .stderr_has("Error: failed to read config")
        .stderr_has("missing.toml");
    assert_eq!(run.code(), Some(1));
}

#[test]
fn invalid_config_shows_error() {
    let temp = Project::empty();
    let path = temp.file("bad.toml", "seperator = \"_\"\n");
    cli()
        .args(&["-c", path.to_str().unwrap(), "x"])
        .fails()
        .stderr_has("Error: invalid config")
        .stderr_has("seperator");
}

#[test]
fn empty_substitution_key_in_config_shows_error() {
    let temp = Project::empty();
    let path = temp.file("bad.toml", "[substitutions]\n\"\" = \"x\"\n");
    cli()
        .args(&["-c", path.to_str().unwrap(), "x"])
        .fails()
        .stderr_has("substitution keys must not be empty");
}

#[test]
fn malformed_sub_flag_shows_error() {
    let run = cli()
        .args(&["--sub", "amp", "x"])
        .fails()
        .stderr_has("expected KEY=VALUE");
    assert_eq!(run.code(), Some(2));
}

#[test]
fn empty_input_is_not_an_error() {
    cli().stdin("").passes().stdout_eq("").stderr_lacks("Error");
}
