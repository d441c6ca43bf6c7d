// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! slugger - turn text into URL-safe slugs

mod env;
mod output;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use output::{write_slug, OutputFormat};
use slugger::{effective_separator, Slugger, SluggerConfig};

#[derive(Parser)]
#[command(
    name = "slugger",
    version,
    about = "Turn free-form text into URL-safe slugs"
)]
struct Cli {
    /// Text to slugify (joined with spaces); reads stdin line by line when omitted
    text: Vec<String>,

    /// String placed between tokens [default: "-"]
    #[arg(short, long)]
    separator: Option<String>,

    /// Replace emoji with their names instead of dropping them
    #[arg(short, long)]
    emoji: bool,

    /// Add a substitution, e.g. --sub '&=and' (repeatable)
    #[arg(long = "sub", value_name = "KEY=VALUE", value_parser = parse_substitution)]
    substitutions: Vec<(String, String)>,

    /// TOML config file [env: SLUGGER_CONFIG]
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    output: OutputFormat,
}

fn main() {
    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped; otherwise the full chain is rendered.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    let config = load_config(cli.config.as_deref())?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    execute(&cli, &config, &mut stdin.lock(), &mut stdout.lock())
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = env::log_filter()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Slug the arguments, or every line of `input` when there are none.
fn execute(
    cli: &Cli,
    config: &SluggerConfig,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let slugger = build_slugger(cli, config);
    let separator = match cli.separator.as_deref() {
        Some(sep) => effective_separator(sep),
        None => config.separator(),
    };

    if cli.text.is_empty() {
        for line in input.lines() {
            let line = line?;
            write_slug(out, cli.output, &line, &slugger.slug(&line, separator))?;
        }
    } else {
        let text = cli.text.join(" ");
        write_slug(out, cli.output, &text, &slugger.slug(&text, separator))?;
    }
    Ok(())
}

/// Config precedence: `--config` > `SLUGGER_CONFIG` > user config dir > defaults.
fn load_config(explicit: Option<&Path>) -> Result<SluggerConfig> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(env::config_path)
        .or_else(env::default_config_path);
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using config file");
            Ok(SluggerConfig::load(&path)?)
        }
        None => {
            tracing::debug!("no config file, using defaults");
            Ok(SluggerConfig::default())
        }
    }
}

/// Command-line flags layered over the config file.
fn build_slugger(cli: &Cli, config: &SluggerConfig) -> Slugger {
    let mut slugger = config.build();
    for (key, value) in &cli.substitutions {
        slugger.add_substitution(key.as_str(), value.as_str());
    }
    if cli.emoji {
        slugger.set_emoji(true);
    }
    slugger
}

fn parse_substitution(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    if key.is_empty() {
        return Err("substitution key must not be empty".to_string());
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
