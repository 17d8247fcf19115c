// Shared kernel used by the catalog module

pub mod config;
pub mod database;
pub mod errors;
pub mod utils;

// Re-exports for convenience
pub use config::{CatalogConfig, TokenPersistence};
pub use database::Database;
