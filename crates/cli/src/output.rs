// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One slugged input, as printed in JSON mode.
#[derive(Debug, Serialize)]
pub struct SlugRecord<'a> {
    pub input: &'a str,
    pub slug: &'a str,
}

/// Write one result line in the requested format.
pub fn write_slug(
    out: &mut impl Write,
    format: OutputFormat,
    input: &str,
    slug: &str,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", slug)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &SlugRecord { input, slug })?;
            writeln!(out)?;
        }
    }
    Ok(())
}
