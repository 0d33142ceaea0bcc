use thiserror::Error;

pub type RecipeResult<T> = Result<T, RecipeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipeError {
    #[error("recipe name must not be empty")]
    EmptyName,

    #[error("recipe not found: {0}")]
    NotFound(String),
}
