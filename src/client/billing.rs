//! HTTP client for the cloud billing usage endpoint.

use super::{UsageSource, bearer_headers, send_json};
use crate::constants::{USAGE_API_URL, USAGE_API_VERSION, USAGE_PAGE_SIZE};
use crate::error::{Result, TcrError};
use crate::types::UsagePage;
use async_trait::async_trait;
use reqwest::header::HeaderValue;
use tracing::debug;

/// Fetches usage summaries for the account owning the API key
#[derive(Debug, Clone)]
pub struct CloudUsageClient {
    client: reqwest::Client,
    base_url: String,
    page_size: u32,
}

impl CloudUsageClient {
    pub fn new(api_key: &str) -> Result<Self> {
        let mut headers = bearer_headers(api_key)?;
        headers.insert(
            "temporal-cloud-api-version",
            HeaderValue::from_static(USAGE_API_VERSION),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| TcrError::Http {
                context: "building usage API client".to_string(),
                source: e,
            })?;

        Ok(Self {
            client,
            base_url: USAGE_API_URL.to_string(),
            page_size: USAGE_PAGE_SIZE,
        })
    }

    /// Overrides the endpoint URL (for testing with wiremock).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[async_trait]
impl UsageSource for CloudUsageClient {
    async fn usage_page(&self, start: &str, end: &str, page_token: &str) -> Result<UsagePage> {
        let page_size = self.page_size.to_string();
        let mut query = vec![
            ("start_time_inclusive", start),
            ("end_time_exclusive", end),
            ("page_size", page_size.as_str()),
        ];
        if !page_token.is_empty() {
            query.push(("page_token", page_token));
        }

        debug!(start, end, first_page = page_token.is_empty(), "fetching usage page");
        let request = self.client.get(&self.base_url).query(&query);
        send_json(request, "fetching usage page").await
    }
}
