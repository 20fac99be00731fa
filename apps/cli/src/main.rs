#![allow(clippy::print_stdout)]

mod args;
mod handlers;

use crate::args::{Cli, Commands};
use anyhow::Result;
use clap::Parser;
use sfeed::kernel::config::load_feed_config;
use sfeed_logger::Logger;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_feed_config(cli.config.as_deref())?;

    let mut builder = Logger::builder().name(env!("CARGO_BIN_NAME")).apply(&config.logging);
    match cli.verbose {
        0 => {},
        1 => builder = builder.env_filter("debug"),
        _ => builder = builder.env_filter("trace"),
    }
    let _logger = builder.init()?;

    match cli.config.as_deref() {
        Some(path) => info!(path = %path.display(), "Configuration loaded"),
        None => info!("Configuration loaded from defaults and environment"),
    }

    let catalog = sfeed::catalog(&config);

    let output = match cli.command {
        Commands::Check { file, pretty } => handlers::check(&file, &catalog, pretty)?,
        Commands::Fields {} => handlers::fields(),
        Commands::Conditions {} => handlers::conditions(&catalog),
    };

    println!("{output}");

    Ok(())
}
