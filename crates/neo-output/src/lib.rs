//! Report generation for close-approach query results.
//!
//! This crate converts a sequence of linked close approaches into the two
//! canonical external formats:
//!
//! - **CSV**: one flat row per approach with the owning NEO's fields inlined
//! - **JSON**: an array of nested objects with the NEO under a `neo` key
//!
//! Both writers require [`neo_model::LinkedApproach`] input, so an unlinked
//! approach cannot reach them.

mod common;
mod write;

pub use common::{CSV_FIELDS, display_diameter, display_hazardous, display_name};
pub use write::{write_to_csv, write_to_json};
