// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

// --- Config file ---

/// Explicit config path from `SLUGGER_CONFIG`.
pub fn config_path() -> Option<PathBuf> {
    std::env::var("SLUGGER_CONFIG")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// `<config dir>/slugger/config.toml`, only when the file exists.
pub fn default_config_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("slugger").join("config.toml");
    path.is_file().then_some(path)
}

// --- Logging ---

/// Tracing filter directive from `SLUGGER_LOG`.
pub fn log_filter() -> Option<String> {
    std::env::var("SLUGGER_LOG").ok().filter(|s| !s.is_empty())
}
