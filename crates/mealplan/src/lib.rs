use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Assignment of recipes to calendar dates.
///
/// A date only appears as a key while it has at least one recipe; entries
/// emptied by `unassign` or the delete cascade are pruned so the persisted
/// map never carries dead keys. Per-date order is insertion order. Recipe
/// ids are plain strings and may go stale when a recipe is deleted out from
/// under the plan; readers treat unresolvable ids as "not found, skip".
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct MealPlan {
    days: BTreeMap<NaiveDate, Vec<String>>,
}

impl MealPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a recipe to a date. Assigning an already-present id is a no-op;
    /// returns whether the plan changed.
    pub fn assign(&mut self, date: NaiveDate, recipe_id: &str) -> bool {
        let ids = self.days.entry(date).or_default();
        if ids.iter().any(|id| id == recipe_id) {
            return false;
        }
        ids.push(recipe_id.to_owned());
        true
    }

    /// Remove a recipe from a date; the date key goes away with its last
    /// recipe. Returns whether the plan changed.
    pub fn unassign(&mut self, date: NaiveDate, recipe_id: &str) -> bool {
        let Some(ids) = self.days.get_mut(&date) else {
            return false;
        };
        let before = ids.len();
        ids.retain(|id| id != recipe_id);
        let changed = ids.len() != before;
        if ids.is_empty() {
            self.days.remove(&date);
        }
        changed
    }

    /// Recipe ids assigned to a date, in insertion order.
    pub fn recipes_for(&self, date: NaiveDate) -> &[String] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    /// Strip a deleted recipe from every date, pruning dates left empty.
    /// This is the plan's half of the recipe-delete cascade; the recipe
    /// store's owner calls it right after a successful delete. Returns the
    /// number of dates that changed.
    pub fn remove_recipe_everywhere(&mut self, recipe_id: &str) -> usize {
        let mut changed = 0;
        self.days.retain(|_, ids| {
            let before = ids.len();
            ids.retain(|id| id != recipe_id);
            if ids.len() != before {
                changed += 1;
            }
            !ids.is_empty()
        });
        changed
    }

    /// Dates with at least one assigned recipe, chronologically.
    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, &[String])> {
        self.days.iter().map(|(date, ids)| (*date, ids.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn assign_is_idempotent() {
        let mut plan = MealPlan::new();
        assert!(plan.assign(date(1), "r1"));
        assert!(!plan.assign(date(1), "r1"));
        assert_eq!(plan.recipes_for(date(1)), ["r1"]);
    }

    #[test]
    fn assign_preserves_insertion_order() {
        let mut plan = MealPlan::new();
        plan.assign(date(1), "r2");
        plan.assign(date(1), "r1");
        plan.assign(date(1), "r3");
        assert_eq!(plan.recipes_for(date(1)), ["r2", "r1", "r3"]);
    }

    #[test]
    fn unassign_prunes_emptied_dates() {
        let mut plan = MealPlan::new();
        plan.assign(date(1), "r1");
        plan.assign(date(1), "r2");

        assert!(plan.unassign(date(1), "r1"));
        assert_eq!(plan.len(), 1);

        assert!(plan.unassign(date(1), "r2"));
        assert!(plan.is_empty());
        assert!(plan.recipes_for(date(1)).is_empty());

        assert!(!plan.unassign(date(1), "r2"));
    }

    #[test]
    fn remove_recipe_everywhere_covers_all_dates() {
        let mut plan = MealPlan::new();
        plan.assign(date(1), "r1");
        plan.assign(date(2), "r1");
        plan.assign(date(2), "r2");
        plan.assign(date(3), "r1");

        assert_eq!(plan.remove_recipe_everywhere("r1"), 3);

        // Dates holding only r1 disappear entirely.
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.recipes_for(date(2)), ["r2"]);
        assert_eq!(plan.remove_recipe_everywhere("r1"), 0);
    }

    #[test]
    fn days_iterates_chronologically() {
        let mut plan = MealPlan::new();
        plan.assign(date(9), "r1");
        plan.assign(date(2), "r2");
        let dates: Vec<_> = plan.days().map(|(d, _)| d).collect();
        assert_eq!(dates, [date(2), date(9)]);
    }

    #[test]
    fn persists_as_a_date_keyed_map() {
        let mut plan = MealPlan::new();
        plan.assign(date(5), "r1");
        let json = serde_json::to_string(&plan).unwrap();
        assert_eq!(json, r#"{"2024-01-05":["r1"]}"#);
        let back: MealPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
