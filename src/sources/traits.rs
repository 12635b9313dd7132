use crate::error::Result;
use crate::models::{ListingType, Property};
use async_trait::async_trait;

/// Common trait for everything that supplies candidate listings.
///
/// Sources return only published listings of the requested type; filtering
/// by the user's criteria happens afterwards in [`crate::filter::apply`].
#[async_trait]
pub trait PropertySource: Send + Sync {
    async fn fetch(&self, listing_type: ListingType) -> Result<Vec<Property>>;

    /// Get the name of the source for logging
    fn source_name(&self) -> &'static str;
}

/// Keep published listings of `listing_type`, preserving order.
pub fn published(properties: Vec<Property>, listing_type: ListingType) -> Vec<Property> {
    properties
        .into_iter()
        .filter(|p| p.listing_type == listing_type && p.is_published())
        .collect()
}
