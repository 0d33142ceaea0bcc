use chrono::Utc;
use kondate_mealplan::MealPlan;
use kondate_recipe::RecipeStore;
use kondate_shopping::{ShoppingList, Staples};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const BACKUP_VERSION: &str = "1.0.0";

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("invalid backup document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A full export of all four collections as one document.
///
/// `recipes` is the one required field on import; a document without a
/// recipe array is rejected before any collection is touched. The other
/// collections default to empty so trimmed or hand-edited backups still
/// import. `version` is informational; nothing migrates on it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Backup {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(rename = "exportedAt", default)]
    pub exported_at: String,
    pub recipes: RecipeStore,
    #[serde(default)]
    pub meals: MealPlan,
    #[serde(rename = "shoppingList", default)]
    pub shopping_list: ShoppingList,
    #[serde(default)]
    pub staples: Staples,
}

fn default_version() -> String {
    BACKUP_VERSION.to_owned()
}

impl Backup {
    pub fn capture(
        recipes: &RecipeStore,
        meals: &MealPlan,
        shopping_list: &ShoppingList,
        staples: &Staples,
    ) -> Self {
        Self {
            version: BACKUP_VERSION.to_owned(),
            exported_at: Utc::now().to_rfc3339(),
            recipes: recipes.clone(),
            meals: meals.clone(),
            shopping_list: shopping_list.clone(),
            staples: staples.clone(),
        }
    }

    /// Parse an exported document, validating its shape up front.
    pub fn from_json(raw: &str) -> Result<Self, BackupError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, BackupError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
