// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! slugger: turn free-form text into URL-safe slugs

pub mod config;
pub mod emoji;
pub mod normalize;
pub mod shared;
pub mod slugger;
pub mod substitution;
pub mod tokenize;

pub use config::{ConfigError, SluggerConfig};
pub use shared::SharedSlugger;
pub use slugger::Slugger;
pub use substitution::SubstitutionTable;
pub use tokenize::{effective_separator, DEFAULT_SEPARATOR};
