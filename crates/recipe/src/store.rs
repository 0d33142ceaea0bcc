use kondate_shared::{Ingredient, RecipeCategory, id::new_id};
use serde::{Deserialize, Serialize};

use crate::error::{RecipeError, RecipeResult};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: RecipeCategory,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: String,
}

/// User input for creating or updating a recipe, before validation.
#[derive(Clone, Debug, Default)]
pub struct RecipeDraft {
    pub name: String,
    pub category: RecipeCategory,
    pub ingredients: Vec<Ingredient>,
    pub instructions: String,
}

impl RecipeDraft {
    /// Trim the name and drop ingredient lines without a name. An empty
    /// name after trimming is a validation error, never silently defaulted.
    fn normalize(self) -> RecipeResult<Self> {
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err(RecipeError::EmptyName);
        }
        let ingredients = self
            .ingredients
            .into_iter()
            .filter_map(|line| {
                let name = line.name.trim().to_owned();
                if name.is_empty() {
                    return None;
                }
                Some(Ingredient {
                    name,
                    amount: line.amount.trim().to_owned(),
                })
            })
            .collect();
        Ok(Self {
            name,
            category: self.category,
            ingredients,
            instructions: self.instructions.trim().to_owned(),
        })
    }
}

/// Ordered collection of recipes. Persisted as a plain JSON array.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt already-built recipes, ids included. Used for seeding and for
    /// restoring imported data.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn add(&mut self, draft: RecipeDraft) -> RecipeResult<&Recipe> {
        let draft = draft.normalize()?;
        self.recipes.push(Recipe {
            id: new_id("recipe"),
            name: draft.name,
            category: draft.category,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
        });
        let last = self.recipes.len() - 1;
        Ok(&self.recipes[last])
    }

    /// Replace every field of an existing recipe; the id and the recipe's
    /// position in the collection are stable.
    pub fn update(&mut self, id: &str, draft: RecipeDraft) -> RecipeResult<&Recipe> {
        let draft = draft.normalize()?;
        let recipe = self
            .recipes
            .iter_mut()
            .find(|recipe| recipe.id == id)
            .ok_or_else(|| RecipeError::NotFound(id.to_owned()))?;
        recipe.name = draft.name;
        recipe.category = draft.category;
        recipe.ingredients = draft.ingredients;
        recipe.instructions = draft.instructions;
        Ok(recipe)
    }

    /// Remove a recipe and hand it back. Callers owning a meal plan must
    /// follow up with `MealPlan::remove_recipe_everywhere` so the plan does
    /// not keep serving the dangling id.
    pub fn remove(&mut self, id: &str) -> RecipeResult<Recipe> {
        let index = self
            .recipes
            .iter()
            .position(|recipe| recipe.id == id)
            .ok_or_else(|| RecipeError::NotFound(id.to_owned()))?;
        Ok(self.recipes.remove(index))
    }

    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Recipes in insertion order, optionally narrowed to one category.
    pub fn list(&self, category: Option<RecipeCategory>) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| category.map_or(true, |c| recipe.category == c))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
