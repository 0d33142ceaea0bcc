use anyhow::Result;
use chrono::NaiveDate;
use clap::Subcommand;
use kondate::{App, AppError};
use kondate_shared::date::parse_date;

#[derive(Subcommand)]
pub enum PlanCommand {
    /// Put a recipe on a date (YYYY-MM-DD)
    Assign { date: String, recipe_id: String },
    /// Take a recipe off a date
    Unassign { date: String, recipe_id: String },
    /// Show planned recipes for every date, or one date
    Show { date: Option<String> },
}

pub(crate) fn date_arg(input: &str) -> Result<NaiveDate, AppError> {
    parse_date(input).map_err(|_| AppError::InvalidDate {
        input: input.to_owned(),
    })
}

fn print_day(app: &App, date: NaiveDate, ids: &[String]) {
    println!("{date}");
    for id in ids {
        // Stale ids linger until the next mutation of that date; skip them
        // the same way the generator does.
        if let Some(recipe) = app.recipes().find(id) {
            println!("  {}  [{}]  {}", recipe.id, recipe.category, recipe.name);
        }
    }
}

pub fn run(app: &mut App, command: PlanCommand) -> Result<()> {
    match command {
        PlanCommand::Assign { date, recipe_id } => {
            let date = date_arg(&date)?;
            app.assign(date, &recipe_id)?;
            println!("assigned {recipe_id} to {date}");
        }
        PlanCommand::Unassign { date, recipe_id } => {
            let date = date_arg(&date)?;
            app.unassign(date, &recipe_id);
            println!("unassigned {recipe_id} from {date}");
        }
        PlanCommand::Show { date } => match date {
            Some(date) => {
                let date = date_arg(&date)?;
                print_day(app, date, app.plan().recipes_for(date));
            }
            None => {
                for (date, ids) in app.plan().days() {
                    print_day(app, date, ids);
                }
            }
        },
    }
    Ok(())
}
