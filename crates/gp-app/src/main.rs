use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod export;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config puis appliquer les overrides CLI
    let config = export::resolve_config(&cli)?;

    // 4. Exporter
    let path = export::run(&cli, &config)?;
    log::info!("Export HTML terminé : {}", path.display());
    Ok(())
}
