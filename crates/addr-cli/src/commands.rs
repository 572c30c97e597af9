//! Subcommand implementations.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use addr_cli::input::parse_input;
use addr_cli::report::{countries_table, country_rows, format_addresses};
use addr_core::AddressComposer;
use addr_standards::ConfigStore;
use anyhow::{Context, Result};

use crate::cli::{ConfArgs, CountriesArgs, FormatArgs};

fn load_store(conf: &ConfArgs) -> Result<ConfigStore> {
    match conf.conf_dir.as_deref() {
        Some(dir) => ConfigStore::load_from_dir(dir)
            .with_context(|| format!("failed to load configuration from {}", dir.display())),
        None => ConfigStore::load_default().context("failed to load configuration"),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

pub fn run_format(args: &FormatArgs) -> Result<()> {
    let store = load_store(&args.conf)?;
    let text = read_input(args.input.as_deref())?;
    let inputs = parse_input(&text)?;
    tracing::info!(addresses = inputs.len(), "formatting addresses");

    let composer = AddressComposer::new(&store);
    let output = format_addresses(&composer, &inputs, args.abbreviate);
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write output")
}

pub fn run_countries(args: &CountriesArgs) -> Result<()> {
    let store = load_store(&args.conf)?;
    let rows = country_rows(&store);
    if args.json {
        let json =
            serde_json::to_string_pretty(&rows).context("failed to serialize country listing")?;
        println!("{json}");
        return Ok(());
    }
    println!("{}", countries_table(&rows));
    println!("{} countries", rows.len());
    Ok(())
}

pub fn run_summary(conf: &ConfArgs) -> Result<()> {
    let store = load_store(conf)?;
    let json = serde_json::to_string_pretty(&store.summary())
        .context("failed to serialize configuration summary")?;
    println!("{json}");
    Ok(())
}
