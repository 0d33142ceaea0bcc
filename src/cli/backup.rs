use std::fs;
use std::path::Path;

use anyhow::Result;
use kondate::{App, Backup};

pub fn export(app: &App, output: Option<&Path>) -> Result<()> {
    let document = app.export().to_json()?;
    match output {
        Some(path) => {
            fs::write(path, &document)?;
            println!("exported to {}", path.display());
        }
        None => println!("{document}"),
    }
    Ok(())
}

pub fn import(app: &mut App, file: &Path) -> Result<()> {
    let raw = fs::read_to_string(file)?;
    let backup = Backup::from_json(&raw)?;
    let (recipes, dates, items, staples) = (
        backup.recipes.len(),
        backup.meals.len(),
        backup.shopping_list.len(),
        backup.staples.len(),
    );
    app.import(backup);
    println!("imported {recipes} recipes, {dates} planned dates, {items} shopping items, {staples} staples");
    Ok(())
}
