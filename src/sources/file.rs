use crate::error::Result;
use crate::models::{ListingType, Property};
use crate::sources::traits::{published, PropertySource};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

/// Listings read from a local JSON array, in the API's record shape.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PropertySource for JsonFileSource {
    async fn fetch(&self, listing_type: ListingType) -> Result<Vec<Property>> {
        info!(path = %self.path.display(), "Reading listings");
        let text = tokio::fs::read_to_string(&self.path).await?;
        let all: Vec<Property> = serde_json::from_str(&text)?;
        Ok(published(all, listing_type))
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}
