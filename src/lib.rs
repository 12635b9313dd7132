//! Multi-criteria filtering for property listings.
//!
//! - [`models`]: listing records and their closed label sets
//! - [`filter`]: filter settings, the matching engine, and saved-search encoding
//! - [`preferences`]: key-value storage for saved searches
//! - [`sources`]: where candidate listings come from (API or JSON file)

pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod preferences;
pub mod sources;

pub use error::{ListingError, Result};
pub use filter::{apply, FilterSpec};
pub use models::{ListingType, Property};
