use chrono::NaiveDate;
use kondate_mealplan::MealPlan;
use kondate_recipe::{Recipe, RecipeStore};
use kondate_shared::{Ingredient, RecipeCategory};
use kondate_shopping::{GenerateError, generate};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn recipe(id: &str, name: &str, ingredients: &[(&str, &str)]) -> Recipe {
    Recipe {
        id: id.to_owned(),
        name: name.to_owned(),
        category: RecipeCategory::Main,
        ingredients: ingredients
            .iter()
            .map(|(name, amount)| Ingredient::new(*name, *amount))
            .collect(),
        instructions: String::new(),
    }
}

fn names(items: &[kondate_shopping::ShoppingItem]) -> Vec<&str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

#[test]
fn single_day_with_exclusion() {
    let recipes = RecipeStore::from_recipes(vec![recipe(
        "r1",
        "肉じゃが",
        &[("じゃがいも", "3個"), ("醤油", "大さじ2")],
    )]);
    let mut plan = MealPlan::new();
    plan.assign(date(1), "r1");

    let items = generate(date(1), date(1), &plan, &recipes, &["醤油"]).unwrap();

    assert_eq!(names(&items), ["じゃがいも（3個）"]);
    assert!(!items[0].checked);
}

#[test]
fn merges_amounts_across_days() {
    let recipes = RecipeStore::from_recipes(vec![
        recipe("r1", "肉じゃが", &[("じゃがいも", "2個")]),
        recipe("r2", "ポテトサラダ", &[("じゃがいも", "3個")]),
    ]);
    let mut plan = MealPlan::new();
    plan.assign(date(1), "r1");
    plan.assign(date(2), "r2");

    let items = generate(date(1), date(2), &plan, &recipes, &[] as &[&str]).unwrap();

    assert_eq!(names(&items), ["じゃがいも（2個、3個）"]);
}

#[test]
fn items_come_out_in_first_encountered_order() {
    let recipes = RecipeStore::from_recipes(vec![
        recipe("r1", "カレー", &[("玉ねぎ", "1個"), ("にんじん", "1本")]),
        recipe("r2", "サラダ", &[("トマト", "2個"), ("玉ねぎ", "1/2個")]),
    ]);
    let mut plan = MealPlan::new();
    plan.assign(date(1), "r1");
    plan.assign(date(2), "r2");

    let items = generate(date(1), date(2), &plan, &recipes, &[] as &[&str]).unwrap();

    assert_eq!(
        names(&items),
        ["玉ねぎ（1個、1/2個）", "にんじん（1本）", "トマト（2個）"]
    );
}

#[test]
fn blank_amounts_leave_the_bare_name() {
    let recipes = RecipeStore::from_recipes(vec![
        recipe("r1", "鍋", &[("白菜", ""), ("豆腐", " ")]),
        recipe("r2", "八宝菜", &[("白菜", "1/4個")]),
    ]);
    let mut plan = MealPlan::new();
    plan.assign(date(1), "r1");
    plan.assign(date(2), "r2");

    let items = generate(date(1), date(2), &plan, &recipes, &[] as &[&str]).unwrap();

    // 白菜 has one blank and one real amount: only the real one survives.
    // 豆腐 only ever had a blank amount: no parentheses at all.
    assert_eq!(names(&items), ["白菜（1/4個）", "豆腐"]);
}

#[test]
fn grouping_is_exact_name_match() {
    let recipes = RecipeStore::from_recipes(vec![
        recipe("r1", "カレー", &[("にんじん", "1本")]),
        recipe("r2", "シチュー", &[("ニンジン", "2本")]),
    ]);
    let mut plan = MealPlan::new();
    plan.assign(date(1), "r1");
    plan.assign(date(1), "r2");

    let items = generate(date(1), date(1), &plan, &recipes, &[] as &[&str]).unwrap();

    // No normalization: different spellings stay separate items.
    assert_eq!(names(&items), ["にんじん（1本）", "ニンジン（2本）"]);
}

#[test]
fn exclusion_matches_both_directions() {
    let recipes = RecipeStore::from_recipes(vec![recipe(
        "r1",
        "炒め物",
        &[
            ("減塩しょうゆ", "大さじ1"), // name contains the entry
            ("ソース", "適量"),          // an entry (ウスターソース) contains the name
            ("キャベツ", "1/4個"),
        ],
    )]);
    let mut plan = MealPlan::new();
    plan.assign(date(1), "r1");

    let items = generate(
        date(1),
        date(1),
        &plan,
        &recipes,
        &["しょうゆ", "ウスターソース"],
    )
    .unwrap();

    assert_eq!(names(&items), ["キャベツ（1/4個）"]);
}

#[test]
fn dangling_recipe_ids_are_skipped() {
    let recipes = RecipeStore::from_recipes(vec![recipe("r1", "カレー", &[("玉ねぎ", "1個")])]);
    let mut plan = MealPlan::new();
    plan.assign(date(1), "r_deleted");
    plan.assign(date(1), "r1");

    let items = generate(date(1), date(1), &plan, &recipes, &[] as &[&str]).unwrap();

    assert_eq!(names(&items), ["玉ねぎ（1個）"]);
}

#[test]
fn empty_plan_and_ingredientless_recipes_produce_nothing() {
    let recipes = RecipeStore::from_recipes(vec![recipe("r1", "白ご飯", &[])]);
    let mut plan = MealPlan::new();

    let items = generate(date(1), date(7), &plan, &recipes, &[] as &[&str]).unwrap();
    assert!(items.is_empty());

    plan.assign(date(3), "r1");
    let items = generate(date(1), date(7), &plan, &recipes, &[] as &[&str]).unwrap();
    assert!(items.is_empty());
}

#[test]
fn each_day_in_range_is_visited_exactly_once() {
    let recipes = RecipeStore::from_recipes(vec![recipe("r1", "カレー", &[("玉ねぎ", "1個")])]);
    let mut plan = MealPlan::new();
    plan.assign(date(1), "r1");
    plan.assign(date(2), "r1");
    plan.assign(date(3), "r1");
    // Outside the range; must not contribute.
    plan.assign(date(4), "r1");

    let items = generate(date(1), date(3), &plan, &recipes, &[] as &[&str]).unwrap();

    // One amount per visited day, in chronological order.
    assert_eq!(names(&items), ["玉ねぎ（1個、1個、1個）"]);
}

#[test]
fn crosses_month_boundaries() {
    let recipes = RecipeStore::from_recipes(vec![recipe("r1", "カレー", &[("玉ねぎ", "1個")])]);
    let mut plan = MealPlan::new();
    plan.assign(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(), "r1");
    plan.assign(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(), "r1");

    let items = generate(
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        &plan,
        &recipes,
        &[] as &[&str],
    )
    .unwrap();

    assert_eq!(names(&items), ["玉ねぎ（1個、1個）"]);
}

#[test]
fn reversed_range_is_an_error() {
    let recipes = RecipeStore::new();
    let plan = MealPlan::new();

    let err = generate(date(2), date(1), &plan, &recipes, &[] as &[&str]).unwrap_err();

    assert_eq!(
        err,
        GenerateError::ReversedRange {
            start: date(2),
            end: date(1),
        }
    );
}

#[test]
fn generation_is_repeatable() {
    let recipes = RecipeStore::from_recipes(vec![
        recipe("r1", "肉じゃが", &[("じゃがいも", "2個"), ("醤油", "大さじ2")]),
        recipe("r2", "ポテトサラダ", &[("じゃがいも", "3個")]),
    ]);
    let mut plan = MealPlan::new();
    plan.assign(date(1), "r1");
    plan.assign(date(2), "r2");
    let exclusions = ["醤油"];

    let first = generate(date(1), date(2), &plan, &recipes, &exclusions).unwrap();
    let second = generate(date(1), date(2), &plan, &recipes, &exclusions).unwrap();

    // Fresh ids each run, but the same names in the same order.
    assert_eq!(names(&first), names(&second));
}
