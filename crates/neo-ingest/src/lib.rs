//! Extraction of near-Earth objects and close approaches from source files.
//!
//! [`load_neos`] reads the tabular CSV source into a collection of
//! `NearEarthObject`s; [`load_approaches`] reads the hierarchical JSON source
//! into a collection of `CloseApproach`es. Both loads are fail-fast and
//! preserve source order.

pub mod approaches;
pub mod error;
pub mod neos;

pub use approaches::load_approaches;
pub use error::{IngestError, Result};
pub use neos::load_neos;
