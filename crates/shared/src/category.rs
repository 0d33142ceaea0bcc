use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Fixed set of recipe categories, labelled the way they appear in
/// persisted data. The ascii aliases exist for command-line input.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum RecipeCategory {
    #[default]
    #[serde(rename = "主菜")]
    #[strum(to_string = "主菜", serialize = "main")]
    Main,

    #[serde(rename = "副菜")]
    #[strum(to_string = "副菜", serialize = "side")]
    Side,

    #[serde(rename = "汁物")]
    #[strum(to_string = "汁物", serialize = "soup")]
    Soup,

    #[serde(rename = "ご飯もの")]
    #[strum(to_string = "ご飯もの", serialize = "rice")]
    Rice,

    #[serde(rename = "その他")]
    #[strum(to_string = "その他", serialize = "other")]
    Other,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parses_japanese_label_and_ascii_alias() {
        assert_eq!(RecipeCategory::from_str("主菜").unwrap(), RecipeCategory::Main);
        assert_eq!(RecipeCategory::from_str("main").unwrap(), RecipeCategory::Main);
        assert_eq!(RecipeCategory::from_str("汁物").unwrap(), RecipeCategory::Soup);
        assert!(RecipeCategory::from_str("dessert").is_err());
    }

    #[test]
    fn displays_japanese_label() {
        assert_eq!(RecipeCategory::Rice.to_string(), "ご飯もの");
    }

    #[test]
    fn serializes_as_japanese_label() {
        let json = serde_json::to_string(&RecipeCategory::Side).unwrap();
        assert_eq!(json, "\"副菜\"");
        let back: RecipeCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RecipeCategory::Side);
    }
}
