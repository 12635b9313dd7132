//! # Listing filters
//!
//! A [`FilterSpec`] holds every filter control of a listings view as one
//! value. [`apply`] evaluates it against a slice of listings and returns the
//! survivors in input order; nothing is mutated and nothing is cached, so the
//! host simply re-runs it whenever a control changes.
//!
//! Within a group (property types, facings, ...) selections combine with OR;
//! checklists (additional rooms, documents, amenities) require every selection;
//! groups combine with AND.
//!
//! ```ignore
//! let mut spec = FilterSpec::for_listing(ListingType::Sale);
//! spec.bedrooms = vec![5]; // "5+" bedrooms
//! spec.amenities = vec!["Power Backup".into()];
//! let hits = apply(&listings, &spec);
//! ```

mod combinators;
mod engine;
mod pricing;
pub mod saved;
mod spec;

pub use combinators::{RoomBand, BALCONY_BAND, BATHROOM_BAND, BEDROOM_BAND};
pub use engine::{apply, apply_refs, matches, Criteria, PREDICATES};
pub use pricing::{format_price, monthly_payment};
pub use spec::{
    parse_leading_int, FilterSpec, HouseTour, PriceMode, PricePerArea, YearRange,
    DEFAULT_MONTHLY_MAX,
};
