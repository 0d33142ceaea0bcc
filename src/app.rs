use chrono::NaiveDate;
use kondate_mealplan::MealPlan;
use kondate_recipe::{RecipeDraft, RecipeError, RecipeStore, seed};
use kondate_shopping::{ShoppingList, Staples, generate};
use kondate_store::{KvStore, keys, load_or_default, persist};

use crate::backup::Backup;
use crate::error::AppError;

/// The live application state: the four collections plus the store they
/// persist into.
///
/// Every mutation goes through a method here and is immediately followed
/// by a full persist of the affected collection(s); readers get shared
/// references through the accessors. Nothing else holds the collections.
pub struct App {
    recipes: RecipeStore,
    plan: MealPlan,
    shopping: ShoppingList,
    staples: Staples,
    exclusions: Vec<String>,
    store: Box<dyn KvStore>,
}

impl App {
    /// Restore all four collections from the store. Missing or unreadable
    /// blobs fall back to empty defaults; an empty recipe collection is
    /// seeded with the built-in starter recipes on first run.
    pub fn load(store: Box<dyn KvStore>, exclusions: Vec<String>) -> Self {
        let mut app = Self {
            recipes: load_or_default(store.as_ref(), keys::RECIPES),
            plan: load_or_default(store.as_ref(), keys::MEALS),
            shopping: load_or_default(store.as_ref(), keys::SHOPPING),
            staples: load_or_default(store.as_ref(), keys::STAPLES),
            exclusions,
            store,
        };
        if app.recipes.is_empty() {
            app.recipes = RecipeStore::from_recipes(seed::seed_recipes());
            app.persist_recipes();
            tracing::info!(count = app.recipes.len(), "seeded starter recipes");
        }
        app
    }

    pub fn recipes(&self) -> &RecipeStore {
        &self.recipes
    }

    pub fn plan(&self) -> &MealPlan {
        &self.plan
    }

    pub fn shopping(&self) -> &ShoppingList {
        &self.shopping
    }

    pub fn staples(&self) -> &Staples {
        &self.staples
    }

    pub fn exclusions(&self) -> &[String] {
        &self.exclusions
    }

    // --- recipes

    pub fn add_recipe(&mut self, draft: RecipeDraft) -> Result<String, AppError> {
        let id = self.recipes.add(draft)?.id.clone();
        self.persist_recipes();
        Ok(id)
    }

    pub fn update_recipe(&mut self, id: &str, draft: RecipeDraft) -> Result<(), AppError> {
        self.recipes.update(id, draft)?;
        self.persist_recipes();
        Ok(())
    }

    /// Delete a recipe and cascade the deletion into the meal plan. The
    /// cascade is this method's explicit contract with `MealPlan`, not a
    /// side effect hidden in storage.
    pub fn remove_recipe(&mut self, id: &str) -> Result<(), AppError> {
        self.recipes.remove(id)?;
        let dates_changed = self.plan.remove_recipe_everywhere(id);
        self.persist_recipes();
        if dates_changed > 0 {
            self.persist_plan();
        }
        tracing::debug!(recipe_id = id, dates_changed, "recipe removed");
        Ok(())
    }

    // --- meal plan

    /// Put a recipe on a date. The id must resolve right now; ids that go
    /// stale later are tolerated at lookup instead.
    pub fn assign(&mut self, date: NaiveDate, recipe_id: &str) -> Result<(), AppError> {
        if self.recipes.find(recipe_id).is_none() {
            return Err(RecipeError::NotFound(recipe_id.to_owned()).into());
        }
        if self.plan.assign(date, recipe_id) {
            self.persist_plan();
        }
        Ok(())
    }

    pub fn unassign(&mut self, date: NaiveDate, recipe_id: &str) {
        if self.plan.unassign(date, recipe_id) {
            self.persist_plan();
        }
    }

    // --- shopping list

    /// Regenerate the shopping list from the plan over `[start, end]`. The
    /// previous list is replaced wholesale, checked state included.
    pub fn generate_shopping_list(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<usize, AppError> {
        let items = generate(start, end, &self.plan, &self.recipes, &self.exclusions)?;
        let count = items.len();
        self.shopping.replace(items);
        self.persist_shopping();
        tracing::info!(%start, %end, count, "shopping list generated");
        Ok(count)
    }

    pub fn add_shopping_item(&mut self, name: &str) {
        if self.shopping.add(name).is_some() {
            self.persist_shopping();
        }
    }

    pub fn toggle_shopping_item(&mut self, id: &str) -> Result<(), AppError> {
        if !self.shopping.toggle(id) {
            return Err(AppError::ShoppingItemNotFound(id.to_owned()));
        }
        self.persist_shopping();
        Ok(())
    }

    pub fn remove_shopping_item(&mut self, id: &str) -> Result<(), AppError> {
        if !self.shopping.remove(id) {
            return Err(AppError::ShoppingItemNotFound(id.to_owned()));
        }
        self.persist_shopping();
        Ok(())
    }

    pub fn remove_checked_items(&mut self) -> usize {
        let removed = self.shopping.remove_checked();
        if removed > 0 {
            self.persist_shopping();
        }
        removed
    }

    // --- staples

    pub fn add_staple(&mut self, name: &str) {
        if self.staples.add(name).is_some() {
            self.persist_staples();
        }
    }

    pub fn toggle_staple(&mut self, id: &str) -> Result<(), AppError> {
        if !self.staples.toggle(id) {
            return Err(AppError::StapleNotFound(id.to_owned()));
        }
        self.persist_staples();
        Ok(())
    }

    pub fn remove_staple(&mut self, id: &str) -> Result<(), AppError> {
        if !self.staples.remove(id) {
            return Err(AppError::StapleNotFound(id.to_owned()));
        }
        self.persist_staples();
        Ok(())
    }

    pub fn reorder_staples(&mut self, from: usize, to: usize) -> Result<(), AppError> {
        if !self.staples.reorder(from, to) {
            return Err(AppError::ReorderOutOfRange {
                index: from,
                len: self.staples.len(),
            });
        }
        self.persist_staples();
        Ok(())
    }

    // --- backup

    pub fn export(&self) -> Backup {
        Backup::capture(&self.recipes, &self.plan, &self.shopping, &self.staples)
    }

    /// Replace all four collections from an already-parsed document and
    /// persist each. Parsing validated the shape up front, so by the time
    /// this runs there is no failure path that could leave mixed state.
    pub fn import(&mut self, backup: Backup) {
        let Backup {
            recipes,
            meals,
            shopping_list,
            staples,
            ..
        } = backup;
        self.recipes = recipes;
        self.plan = meals;
        self.shopping = shopping_list;
        self.staples = staples;
        self.persist_recipes();
        self.persist_plan();
        self.persist_shopping();
        self.persist_staples();
        tracing::info!(
            recipes = self.recipes.len(),
            dates = self.plan.len(),
            "backup imported"
        );
    }

    // --- persistence

    fn persist_recipes(&mut self) {
        persist(self.store.as_mut(), keys::RECIPES, &self.recipes);
    }

    fn persist_plan(&mut self) {
        persist(self.store.as_mut(), keys::MEALS, &self.plan);
    }

    fn persist_shopping(&mut self) {
        persist(self.store.as_mut(), keys::SHOPPING, &self.shopping);
    }

    fn persist_staples(&mut self) {
        persist(self.store.as_mut(), keys::STAPLES, &self.staples);
    }
}
