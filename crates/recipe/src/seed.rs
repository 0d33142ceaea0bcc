use kondate_shared::{Ingredient, RecipeCategory};

use crate::store::Recipe;

/// Starter recipes installed when no recipe data has been persisted yet.
/// Ids are fixed so meal-plan entries referencing them survive a wiped
/// recipe blob.
pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "recipe_seed_nikujaga".to_owned(),
            name: "肉じゃが".to_owned(),
            category: RecipeCategory::Main,
            ingredients: vec![
                Ingredient::new("じゃがいも", "3個"),
                Ingredient::new("にんじん", "1本"),
                Ingredient::new("玉ねぎ", "1個"),
                Ingredient::new("牛こま切れ肉", "200g"),
                Ingredient::new("しらたき", "1袋"),
            ],
            instructions: "具材を炒め、だし汁と調味料で煮含める。".to_owned(),
        },
        Recipe {
            id: "recipe_seed_karaage".to_owned(),
            name: "鶏の唐揚げ".to_owned(),
            category: RecipeCategory::Main,
            ingredients: vec![
                Ingredient::new("鶏もも肉", "300g"),
                Ingredient::new("にんにく", "1かけ"),
                Ingredient::new("しょうが", "1かけ"),
                Ingredient::new("卵", "1個"),
            ],
            instructions: "下味をつけて30分置き、170度の油で揚げる。".to_owned(),
        },
        Recipe {
            id: "recipe_seed_ohitashi".to_owned(),
            name: "ほうれん草のおひたし".to_owned(),
            category: RecipeCategory::Side,
            ingredients: vec![
                Ingredient::new("ほうれん草", "1束"),
                Ingredient::new("かつお節", "適量"),
            ],
            instructions: "さっと茹でて水にさらし、絞ってだし醤油をかける。".to_owned(),
        },
        Recipe {
            id: "recipe_seed_misoshiru".to_owned(),
            name: "豆腐とわかめの味噌汁".to_owned(),
            category: RecipeCategory::Soup,
            ingredients: vec![
                Ingredient::new("豆腐", "1/2丁"),
                Ingredient::new("乾燥わかめ", "大さじ1"),
                Ingredient::new("長ねぎ", "1/2本"),
            ],
            instructions: "だしを取り、具を煮て火を止めてから味噌を溶く。".to_owned(),
        },
        Recipe {
            id: "recipe_seed_oyakodon".to_owned(),
            name: "親子丼".to_owned(),
            category: RecipeCategory::Rice,
            ingredients: vec![
                Ingredient::new("鶏もも肉", "200g"),
                Ingredient::new("玉ねぎ", "1/2個"),
                Ingredient::new("卵", "2個"),
                Ingredient::new("ご飯", "2杯分"),
            ],
            instructions: "割り下で鶏肉と玉ねぎを煮て、溶き卵でとじてご飯にのせる。".to_owned(),
        },
    ]
}
