//! Linked NEO database and close-approach query filters.

pub mod database;
pub mod filters;

pub use database::NeoDatabase;
pub use filters::Filters;
