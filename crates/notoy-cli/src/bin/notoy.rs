//! Notoy Binary Entry Point

use clap::Parser;
use notoy_cli::{init_logging, run, Cli};
use notoy_core::NotoyConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = NotoyConfig::load(&cli.config)?;
    init_logging(&config);

    log::debug!("Loaded configuration from {:?}", cli.config);

    let mut stdout = std::io::stdout().lock();
    run(cli, &config, &mut stdout).await
}
