mod backup;
mod plan;
mod recipe;
mod shopping;
mod staples;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use kondate::App;

pub use plan::PlanCommand;
pub use recipe::RecipeCommand;
pub use shopping::ShoppingCommand;
pub use staples::StaplesCommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the recipe collection
    Recipe {
        #[command(subcommand)]
        command: RecipeCommand,
    },
    /// Assign recipes to calendar dates
    Plan {
        #[command(subcommand)]
        command: PlanCommand,
    },
    /// Manage the shopping list
    Shopping {
        #[command(subcommand)]
        command: ShoppingCommand,
    },
    /// Manage recurring staples
    Staples {
        #[command(subcommand)]
        command: StaplesCommand,
    },
    /// Write a full backup of all data as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Replace all data from a backup document
    Import { file: PathBuf },
}

pub fn run(app: &mut App, command: Commands) -> Result<()> {
    match command {
        Commands::Recipe { command } => recipe::run(app, command),
        Commands::Plan { command } => plan::run(app, command),
        Commands::Shopping { command } => shopping::run(app, command),
        Commands::Staples { command } => staples::run(app, command),
        Commands::Export { output } => backup::export(app, output.as_deref()),
        Commands::Import { file } => backup::import(app, &file),
    }
}
