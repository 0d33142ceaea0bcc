/// Seasonings and pantry basics that never go on a generated shopping
/// list; most households restock these independently of any one recipe.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "水",
    "醤油",
    "しょうゆ",
    "みりん",
    "砂糖",
    "塩",
    "塩こしょう",
    "酒",
    "料理酒",
    "酢",
    "サラダ油",
    "ごま油",
    "オリーブオイル",
    "だし汁",
    "だしの素",
    "コンソメ",
    "味噌",
    "みそ",
    "ケチャップ",
    "マヨネーズ",
    "ソース",
    "ウスターソース",
    "こしょう",
    "コショウ",
    "胡椒",
    "片栗粉",
    "小麦粉",
    "バター",
];

pub fn default_exclusions() -> Vec<String> {
    DEFAULT_EXCLUSIONS.iter().map(|entry| (*entry).to_owned()).collect()
}

/// Two-way substring containment: an ingredient is excluded when its name
/// contains an exclusion entry, or an exclusion entry contains the name.
/// Both directions are deliberate so abbreviated and elaborated names both
/// match (しょうゆ and 減塩しょうゆ, in either role). Short entries cast a
/// wide net: 酒 also catches 酒粕.
pub fn is_excluded<S: AsRef<str>>(name: &str, exclusions: &[S]) -> bool {
    exclusions
        .iter()
        .map(S::as_ref)
        .any(|entry| name.contains(entry) || entry.contains(name))
}
