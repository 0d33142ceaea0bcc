use serde::{Deserialize, Serialize};

/// One ingredient line of a recipe. The amount is free text (「大さじ2」,
/// 「3個」, or nothing at all) and is never parsed numerically.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub amount: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }
}
