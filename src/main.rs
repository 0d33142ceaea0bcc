use anyhow::Result;
use clap::Parser;

use kondate::App;
use kondate::config::Config;
use kondate_store::FileStore;

mod cli;

/// kondate - meal planning and shopping lists
#[derive(Parser)]
#[command(name = "kondate")]
#[command(about = "Plan meals on a calendar and derive shopping lists", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: cli::Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    kondate::observability::init_observability("kondate", &config.observability.log_level)?;

    let store = FileStore::open(config.storage.dir.as_str())?;
    let mut app = App::load(Box::new(store), config.exclusions());

    cli::run(&mut app, cli.command)
}
