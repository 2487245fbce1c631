use crate::error::Result;
use reqwest::Client;
use tracing::{error, info};

/// Query sent to the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub from: u32,
    pub num: u32,
    pub category: String,
}

impl ListingQuery {
    fn as_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("from", self.from.to_string()),
            ("num", self.num.to_string()),
            ("type", self.category.clone()),
        ]
    }
}

pub struct CatalogClient {
    client: Client,
    listing_url: String,
}

impl CatalogClient {
    pub fn new(client: Client, listing_url: impl Into<String>) -> Self {
        Self {
            client,
            listing_url: listing_url.into(),
        }
    }

    /// Fetches the listing page body. Transport failures and non-success
    /// statuses are both returned as errors.
    pub async fn fetch_listing(&self, query: &ListingQuery) -> Result<String> {
        info!(
            "Fetching data from {}?from={}&num={}&type={}...",
            self.listing_url, query.from, query.num, query.category
        );

        let response = self
            .client
            .get(&self.listing_url)
            .query(&query.as_pairs())
            .send()
            .await?;

        let status = response.status();
        let response = response.error_for_status().inspect_err(|e| {
            error!("Listing request failed with status {}: {}", status, e);
        })?;

        let body = response.text().await?;
        info!("Successfully fetched {} bytes of data.", body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_keep_endpoint_names() {
        let query = ListingQuery {
            from: 0,
            num: 120_000,
            category: "hot".to_string(),
        };

        assert_eq!(
            query.as_pairs(),
            [
                ("from", "0".to_string()),
                ("num", "120000".to_string()),
                ("type", "hot".to_string()),
            ]
        );
    }
}
