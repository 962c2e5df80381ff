use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use bogo_scraper::Config;

#[derive(Parser)]
#[command(
    name = "bogos",
    about = "Scrape a sales page for BOGO deals and publish them"
)]
struct Cli {
    /// Path to the JSON config file
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.logging.level)
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let published = bogo_scraper::run(&config);
    tracing::info!("run finished with {} line(s)", published.len());

    Ok(())
}
