use anyhow::{Context, Result};
use clap::Parser;
use inkpad::Config;
use inkpad::export;
use inkpad::script::Script;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "inkpad")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("INKPAD_GIT_HASH"), ")"),
    about = "Freehand drawing surface with parametric shapes, undo and PNG export"
)]
struct Cli {
    /// Replay script (TOML) describing commands and pointer gestures
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Write the PNG here instead of the configured export directory
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Use this config file instead of ~/.config/inkpad/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let script = Script::load(&cli.script)?;
    let raster = script.render(&config)?;

    let saved = match &cli.output {
        Some(path) => {
            export::write_png(&raster, path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            path.clone()
        }
        None => export::save_png(&raster, &config.export)
            .context("Failed to save the drawing")?,
    };

    log::info!("Saved drawing to {}", saved.display());
    println!("{}", saved.display());
    Ok(())
}
