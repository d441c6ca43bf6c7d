//! Config file specs
//!
//! Verify config discovery and precedence.

use crate::prelude::*;

const CONFIG: &str = r#"
separator = "_"
emoji = true

[substitutions]
"&" = "and"
"#;

#[test]
fn config_flag_applies_settings() {
    let temp = Project::empty();
    let path = temp.file("slugger.toml", CONFIG);
    cli()
        .args(&["-c", path.to_str().unwrap(), "Salt & Pepper 🦁"])
        .passes()
        .stdout_eq("salt_and_pepper_lion\n");
}

#[test]
fn config_from_env_var() {
    let temp = Project::empty();
    let path = temp.file("slugger.toml", CONFIG);
    cli()
        .args(&["Salt & Pepper"])
        .env("SLUGGER_CONFIG", &path)
        .passes()
        .stdout_eq("salt_and_pepper\n");
}

#[test]
fn config_from_user_config_dir() {
    let temp = Project::empty();
    temp.file("slugger/config.toml", CONFIG);
    // dirs::config_dir honours XDG_CONFIG_HOME on Linux only
    if cfg!(target_os = "linux") {
        cli()
            .args(&["Salt & Pepper"])
            .env("XDG_CONFIG_HOME", temp.path())
            .passes()
            .stdout_eq("salt_and_pepper\n");
    }
}

#[test]
fn flags_override_config() {
    let temp = Project::empty();
    let path = temp.file("slugger.toml", CONFIG);
    cli()
        .args(&[
            "-c",
            path.to_str().unwrap(),
            "-s",
            "-",
            "--sub",
            "&=plus",
            "Salt & Pepper",
        ])
        .passes()
        .stdout_eq("salt-plus-pepper\n");
}

#[test]
fn debug_log_names_the_config_file() {
    let temp = Project::empty();
    let path = temp.file("slugger.toml", CONFIG);
    cli()
        .args(&["-c", path.to_str().unwrap(), "x"])
        .env("SLUGGER_LOG", "slugger=debug")
        .passes()
        .stderr_has("using config file")
        .stderr_has("slugger.toml");
}
