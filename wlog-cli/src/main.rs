mod cli;
mod modes;
mod render;

use crate::cli::Cli;
use crate::modes::{CliModeResult, maintenance_mode, read_mode, write_mode};
use crate::render::Renderer;
use anyhow::Result;
use wlog_core::{Config, Journal};

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::new();
    let renderer = Renderer::new();
    let config = Config::load()?;
    let journal = Journal::with_config(config)?;

    if let CliModeResult::Finish = write_mode(&cli, &renderer, &journal)? {
        return Ok(());
    }
    if let CliModeResult::Finish = read_mode(&cli, &renderer, &journal)? {
        return Ok(());
    }
    if let CliModeResult::Finish = maintenance_mode(&cli, &renderer, &journal)? {
        return Ok(());
    }

    renderer.print_info("Nothing to do. Try --help.");
    Ok(())
}
