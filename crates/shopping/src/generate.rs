use std::collections::HashMap;

use chrono::NaiveDate;
use kondate_mealplan::MealPlan;
use kondate_recipe::RecipeStore;

use crate::error::GenerateError;
use crate::exclusion::is_excluded;
use crate::list::ShoppingItem;

/// Derive a shopping list from every recipe planned in `[start, end]`.
///
/// The range is walked day by day in chronological order, both endpoints
/// included. Recipe ids that no longer resolve are skipped; they are
/// expected after a recipe deletion races a stale plan blob. Ingredient
/// lines matching the exclusion set are dropped; the rest group by exact
/// name (no case or whitespace normalization) in first-encountered order,
/// accumulating their amount strings across the whole range.
///
/// Each group becomes one unchecked item: non-blank amounts joined with 、
/// inside （）, or the bare name when no amount was ever given.
///
/// Callers replace their whole shopping list with the result; generation
/// never merges into an existing list.
pub fn generate<S: AsRef<str>>(
    start: NaiveDate,
    end: NaiveDate,
    plan: &MealPlan,
    recipes: &RecipeStore,
    exclusions: &[S],
) -> Result<Vec<ShoppingItem>, GenerateError> {
    if start > end {
        return Err(GenerateError::ReversedRange { start, end });
    }

    let mut order: Vec<String> = Vec::new();
    let mut amounts: HashMap<String, Vec<String>> = HashMap::new();

    for day in start.iter_days() {
        if day > end {
            break;
        }
        for recipe_id in plan.recipes_for(day) {
            let Some(recipe) = recipes.find(recipe_id) else {
                continue;
            };
            for line in &recipe.ingredients {
                if is_excluded(&line.name, exclusions) {
                    continue;
                }
                amounts
                    .entry(line.name.clone())
                    .or_insert_with(|| {
                        order.push(line.name.clone());
                        Vec::new()
                    })
                    .push(line.amount.clone());
            }
        }
    }

    let items = order
        .into_iter()
        .map(|name| {
            let merged: Vec<String> = amounts
                .remove(&name)
                .unwrap_or_default()
                .into_iter()
                .filter(|amount| !amount.trim().is_empty())
                .collect();
            let label = if merged.is_empty() {
                name
            } else {
                format!("{}（{}）", name, merged.join("、"))
            };
            ShoppingItem::new(label)
        })
        .collect();

    Ok(items)
}
