use std::str::FromStr;

use anyhow::Result;
use clap::Subcommand;
use kondate::{App, AppError};
use kondate_recipe::RecipeDraft;
use kondate_shared::{Ingredient, RecipeCategory};

#[derive(Subcommand)]
pub enum RecipeCommand {
    /// Add a recipe
    Add {
        #[arg(long)]
        name: String,
        /// Category: 主菜/副菜/汁物/ご飯もの/その他 (or main/side/soup/rice/other)
        #[arg(long, default_value = "main")]
        category: String,
        /// Ingredient line as NAME=AMOUNT (repeatable; the amount is optional)
        #[arg(long = "ingredient", value_name = "NAME=AMOUNT")]
        ingredients: Vec<String>,
        #[arg(long, default_value = "")]
        instructions: String,
    },
    /// List recipes, optionally narrowed to one category
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one recipe in full
    Show { id: String },
    /// Replace a recipe's fields
    Update {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "main")]
        category: String,
        #[arg(long = "ingredient", value_name = "NAME=AMOUNT")]
        ingredients: Vec<String>,
        #[arg(long, default_value = "")]
        instructions: String,
    },
    /// Delete a recipe and take it off every planned date
    Remove { id: String },
}

fn parse_category(input: &str) -> Result<RecipeCategory, AppError> {
    RecipeCategory::from_str(input.trim())
        .map_err(|_| AppError::UnknownCategory(input.to_owned()))
}

/// `NAME=AMOUNT`, or just `NAME` for an amount-less line.
fn parse_ingredient(raw: &str) -> Ingredient {
    match raw.split_once('=') {
        Some((name, amount)) => Ingredient::new(name, amount),
        None => Ingredient::new(raw, ""),
    }
}

fn draft(
    name: String,
    category: &str,
    ingredients: Vec<String>,
    instructions: String,
) -> Result<RecipeDraft, AppError> {
    Ok(RecipeDraft {
        name,
        category: parse_category(category)?,
        ingredients: ingredients.iter().map(|raw| parse_ingredient(raw)).collect(),
        instructions,
    })
}

pub fn run(app: &mut App, command: RecipeCommand) -> Result<()> {
    match command {
        RecipeCommand::Add {
            name,
            category,
            ingredients,
            instructions,
        } => {
            let id = app.add_recipe(draft(name, &category, ingredients, instructions)?)?;
            println!("added {id}");
        }
        RecipeCommand::List { category } => {
            let filter = category.as_deref().map(parse_category).transpose()?;
            for recipe in app.recipes().list(filter) {
                println!("{}  [{}]  {}", recipe.id, recipe.category, recipe.name);
            }
        }
        RecipeCommand::Show { id } => {
            let recipe = app
                .recipes()
                .find(&id)
                .ok_or_else(|| kondate_recipe::RecipeError::NotFound(id.clone()))?;
            println!("{}  [{}]", recipe.name, recipe.category);
            for line in &recipe.ingredients {
                if line.amount.is_empty() {
                    println!("  ・{}", line.name);
                } else {
                    println!("  ・{}　{}", line.name, line.amount);
                }
            }
            if !recipe.instructions.is_empty() {
                println!("{}", recipe.instructions);
            }
        }
        RecipeCommand::Update {
            id,
            name,
            category,
            ingredients,
            instructions,
        } => {
            app.update_recipe(&id, draft(name, &category, ingredients, instructions)?)?;
            println!("updated {id}");
        }
        RecipeCommand::Remove { id } => {
            app.remove_recipe(&id)?;
            println!("removed {id}");
        }
    }
    Ok(())
}
