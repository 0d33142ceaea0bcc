pub mod error;
pub mod exclusion;
pub mod generate;
pub mod list;
pub mod staples;

pub use error::GenerateError;
pub use exclusion::{DEFAULT_EXCLUSIONS, default_exclusions, is_excluded};
pub use generate::generate;
pub use list::{ShoppingItem, ShoppingList};
pub use staples::{StapleItem, Staples};
