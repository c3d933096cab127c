use anyhow::Context;
use clap::Parser;
use tracing::info;

use nexus::catalog::Catalog;
use nexus::cli::Cli;
use nexus::config::Config;
use nexus::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)?;
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(&config.logging, cli.log_file.as_deref());
    info!(config = %config_path.display(), "configuration loaded");

    let catalog = Catalog::load(config.catalog.path.as_deref()).context("loading catalog")?;

    if cli.check {
        println!(
            "config: {} | start screen: {} | catalog: {}",
            config_path.display(),
            config.ui.start_screen,
            catalog.summary()
        );
        return Ok(());
    }

    nexus::ui::run(&config, catalog).context("terminal UI failed")?;
    Ok(())
}
