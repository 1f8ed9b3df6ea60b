//! Collaborators that supply raw usage pages and workflow histories.
//!
//! The report pipelines only see the [`UsageSource`] and [`WorkflowSource`]
//! traits; the HTTP implementations live in the submodules.

pub mod billing;
pub mod workflows;

use crate::error::{Result, TcrError};
use crate::types::{HistoryEvent, UsagePage, WorkflowExecution};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

pub use billing::CloudUsageClient;
pub use workflows::WorkflowHttpClient;

/// One page of executions from a visibility query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionPage {
    pub executions: Vec<WorkflowExecution>,
    /// Empty on the last page
    pub next_page_token: String,
}

/// One page of a workflow execution history
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryPage {
    pub events: Vec<HistoryEvent>,
    /// Empty on the last page
    pub next_page_token: String,
}

/// Paginated access to billing usage summaries
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsageSource: Send + Sync {
    /// Fetch one page; an empty `page_token` requests the first page
    async fn usage_page(&self, start: &str, end: &str, page_token: &str) -> Result<UsagePage>;
}

/// Paginated access to workflow visibility and histories
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkflowSource: Send + Sync {
    async fn list_executions(
        &self,
        query: &str,
        page_size: usize,
        page_token: &str,
    ) -> Result<ExecutionPage>;

    async fn history_page(
        &self,
        execution: &WorkflowExecution,
        page_token: &str,
    ) -> Result<HistoryPage>;
}

/// Default headers for bearer-token authenticated APIs
pub(crate) fn bearer_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let value = HeaderValue::from_str(&format!("Bearer {api_key}"))
        .map_err(|_| TcrError::InvalidApiKey)?;
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

/// Send a request and decode a successful JSON response
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    context: &str,
) -> Result<T> {
    let response = request.send().await.map_err(|e| TcrError::Http {
        context: context.to_string(),
        source: e,
    })?;

    let status = response.status();
    debug!(status = %status, context, "response received");

    let body = response.text().await.map_err(|e| TcrError::Http {
        context: format!("{context}: reading response body"),
        source: e,
    })?;

    if !status.is_success() {
        return Err(TcrError::Api {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| TcrError::JsonParse {
        context: context.to_string(),
        source: e,
    })
}
