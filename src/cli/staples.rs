use anyhow::Result;
use clap::Subcommand;
use kondate::App;

#[derive(Subcommand)]
pub enum StaplesCommand {
    /// Show the staples in their manual order
    List,
    /// Add a staple (starts out of stock)
    Add { name: String },
    /// Toggle a staple between in stock and out of stock
    Toggle { id: String },
    /// Remove a staple
    Remove { id: String },
    /// Move the staple at position FROM to position TO
    Reorder { from: usize, to: usize },
}

pub fn run(app: &mut App, command: StaplesCommand) -> Result<()> {
    match command {
        StaplesCommand::List => {
            for (index, item) in app.staples().items().iter().enumerate() {
                let status = if item.in_stock { "✓ あり" } else { "✗ なし" };
                println!("{index}  {}  {}  {status}", item.id, item.name);
            }
        }
        StaplesCommand::Add { name } => {
            app.add_staple(&name);
        }
        StaplesCommand::Toggle { id } => {
            app.toggle_staple(&id)?;
        }
        StaplesCommand::Remove { id } => {
            app.remove_staple(&id)?;
        }
        StaplesCommand::Reorder { from, to } => {
            app.reorder_staples(from, to)?;
        }
    }
    Ok(())
}
