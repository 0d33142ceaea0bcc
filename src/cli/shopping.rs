use anyhow::Result;
use clap::Subcommand;
use kondate::App;

use super::plan::date_arg;

#[derive(Subcommand)]
pub enum ShoppingCommand {
    /// Rebuild the list from the recipes planned in a date range,
    /// replacing the current list
    Generate { start: String, end: String },
    /// Show the shopping list
    List,
    /// Add an item by hand
    Add { name: String },
    /// Toggle an item's checked state
    Toggle { id: String },
    /// Remove an item
    Remove { id: String },
    /// Remove every checked item
    ClearChecked,
}

pub fn run(app: &mut App, command: ShoppingCommand) -> Result<()> {
    match command {
        ShoppingCommand::Generate { start, end } => {
            let count = app.generate_shopping_list(date_arg(&start)?, date_arg(&end)?)?;
            println!("generated {count} items");
        }
        ShoppingCommand::List => {
            for item in app.shopping().items() {
                let mark = if item.checked { "x" } else { " " };
                println!("[{mark}] {}  {}", item.id, item.name);
            }
        }
        ShoppingCommand::Add { name } => {
            app.add_shopping_item(&name);
        }
        ShoppingCommand::Toggle { id } => {
            app.toggle_shopping_item(&id)?;
        }
        ShoppingCommand::Remove { id } => {
            app.remove_shopping_item(&id)?;
        }
        ShoppingCommand::ClearChecked => {
            let removed = app.remove_checked_items();
            println!("removed {removed} items");
        }
    }
    Ok(())
}
