pub mod app;
pub mod backup;
pub mod config;
pub mod error;
pub mod observability;

pub use app::App;
pub use backup::Backup;
pub use error::AppError;
