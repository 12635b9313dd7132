use crate::error::Result;
use crate::models::{ListingType, Property};
use crate::sources::row::PropertyRow;
use crate::sources::traits::{published, PropertySource};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

/// Listing API client
pub struct ApiSource {
    client: Client,
    base_url: String,
}

impl ApiSource {
    /// Create a client for the API rooted at `base_url` (e.g. `http://localhost:5000`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("housing-filter/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/properties", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl PropertySource for ApiSource {
    async fn fetch(&self, listing_type: ListingType) -> Result<Vec<Property>> {
        let url = self.endpoint();
        info!(%url, %listing_type, "Fetching listings");

        let rows: Vec<PropertyRow> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let total = rows.len();
        let all = rows.into_iter().map(Property::from).collect();
        let kept = published(all, listing_type);

        info!(total, kept = kept.len(), "Fetched listings");
        Ok(kept)
    }

    fn source_name(&self) -> &'static str {
        "api"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve `body` as JSON to a single request, returning the base URL.
    async fn serve_once(body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await.unwrap();
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn fetch_reads_server_rows() {
        let base = serve_once(
            r#"[
                {"id": 1, "title": "Rented flat", "price": "25000.00", "type": "Apartment",
                 "listing_type": "rent", "status": "Approved", "floor_no": 2,
                 "is_tax_excluded": 1, "amenities": null},
                {"id": 2, "title": "Villa", "price": 30000000, "type": "Villa",
                 "listing_type": "sale", "status": "Approved"},
                {"id": 3, "title": "Pending flat", "price": 20000, "type": "Apartment",
                 "listing_type": "rent", "status": "Pending"}
            ]"#,
        )
        .await;

        let source = ApiSource::new(base).unwrap();
        let rentals = source.fetch(ListingType::Rent).await.unwrap();

        assert_eq!(rentals.len(), 1);
        assert_eq!(rentals[0].id, "1");
        assert_eq!(rentals[0].price, 25_000.0);
        assert_eq!(rentals[0].floor, Some(2));
        assert_eq!(rentals[0].tax_excluded, Some(true));
        assert!(rentals[0].amenities.is_empty());
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let source = ApiSource::new("http://localhost:5000/").unwrap();
        assert_eq!(source.endpoint(), "http://localhost:5000/api/properties");

        let source = ApiSource::new("https://kiwi.example").unwrap();
        assert_eq!(source.endpoint(), "https://kiwi.example/api/properties");
    }
}
