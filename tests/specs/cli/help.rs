//! CLI help output specs
//!
//! Verify help and version text.

use crate::prelude::*;

#[test]
fn slugger_help_shows_usage() {
    cli().args(&["--help"]).passes().stdout_has("Usage:");
}

#[test]
fn slugger_help_lists_options() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("--separator")
        .stdout_has("--emoji")
        .stdout_has("--sub")
        .stdout_has("--config")
        .stdout_has("--output");
}

#[test]
fn slugger_version() {
    cli()
        .args(&["--version"])
        .passes()
        .stdout_has(env!("CARGO_PKG_VERSION"));
}

#[test]
fn slugger_binary_resolves_from_workspace_target() {
    let path = binary_path(&format!("slugger{}", std::env::consts::EXE_SUFFIX));
    assert!(path.is_file(), "slugger binary not found at {}", path.display());
}
