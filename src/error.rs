use kondate_recipe::RecipeError;
use kondate_shopping::GenerateError;
use thiserror::Error;

use crate::backup::BackupError;

/// Application-level error reported to the user. Everything here is a
/// user-correctable input problem; storage failures never surface as
/// errors (they are logged and degraded inside the store layer).
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Recipe(#[from] RecipeError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Backup(#[from] BackupError),

    #[error("invalid date {input:?}: expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("unknown category {0:?} (expected 主菜/副菜/汁物/ご飯もの/その他 or main/side/soup/rice/other)")]
    UnknownCategory(String),

    #[error("no shopping item with id {0}")]
    ShoppingItemNotFound(String),

    #[error("no staple with id {0}")]
    StapleNotFound(String),

    #[error("position {index} is out of range for a list of {len} staples")]
    ReorderOutOfRange { index: usize, len: usize },
}
