use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use org_capture::{logging, CaptureConfig, CaptureEngine, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = CaptureConfig::from_env(cli.action, &cli.overrides())?;
    let engine = CaptureEngine::new(config)?;

    let raw = match cli.inline_text() {
        Some(text) => text,
        None => read_stdin_content().context("failed to read capture from stdin")?,
    };

    let outcome = if cli.dry_run {
        engine.prepare(&raw, CaptureEngine::get_timestamp())
    } else {
        engine.add_entry(&raw)?
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if cli.dry_run {
        println!("{}", outcome.text);
    } else {
        println!("{}", outcome.message);
    }

    Ok(())
}

/// Read the capture from stdin without its trailing newline
fn read_stdin_content() -> io::Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}
