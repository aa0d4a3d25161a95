//! Stencil CLI application
//!
//! Command-line interface for the stencil date-time formatter. Flag parsing
//! lives in [`args`]; the core formatting logic lives in `stencil-core`.

mod args;

use std::str::FromStr;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use jiff::{civil::DateTime, Zoned};
use log::info;
use stencil_core::iso8601;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let options = args.options();

    let value = match &args.datetime {
        Some(text) => DateTime::from_str(text)
            .with_context(|| format!("Failed to parse date-time '{text}'"))?,
        None => Zoned::now().datetime(),
    };

    info!("Formatting {value} with {options:?}");

    println!("{}", iso8601(&options).format(&value));
    Ok(())
}
