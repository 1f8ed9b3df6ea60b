//! HTTP client for a namespace's workflow service API.
//!
//! Uses the JSON HTTP API exposed next to the gRPC frontend:
//! `/api/v1/namespaces/{namespace}/workflows` for visibility queries and
//! `/api/v1/namespaces/{namespace}/workflows/{id}/history` for histories.

use super::{ExecutionPage, HistoryPage, WorkflowSource, bearer_headers, send_json};
use crate::error::{Result, TcrError};
use crate::types::{HistoryEvent, WorkflowExecution};
use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    #[serde(default)]
    executions: Vec<ExecutionInfo>,
    #[serde(default)]
    next_page_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExecutionInfo {
    #[serde(default)]
    execution: ExecutionRef,
    start_time: Option<String>,
    close_time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExecutionRef {
    #[serde(default)]
    workflow_id: String,
    #[serde(default)]
    run_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryResponse {
    #[serde(default)]
    history: History,
    #[serde(default)]
    next_page_token: String,
}

#[derive(Debug, Default, Deserialize)]
struct History {
    #[serde(default)]
    events: Vec<HistoryEvent>,
}

impl From<ExecutionInfo> for WorkflowExecution {
    fn from(info: ExecutionInfo) -> Self {
        WorkflowExecution {
            workflow_id: info.execution.workflow_id.into(),
            run_id: info.execution.run_id.into(),
            start_time: timestamp_nanos(info.start_time.as_deref()),
            close_time: timestamp_nanos(info.close_time.as_deref()),
        }
    }
}

/// RFC3339 timestamp as Unix nanoseconds; missing or unparseable -> 0
fn timestamp_nanos(timestamp: Option<&str>) -> i64 {
    timestamp
        .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
        .and_then(|t| t.timestamp_nanos_opt())
        .unwrap_or(0)
}

/// Parse a service address, defaulting to https when no scheme is given
fn parse_address(address: &str) -> Result<Url> {
    let with_scheme = if address.contains("://") {
        address.to_string()
    } else {
        format!("https://{address}")
    };

    let url = Url::parse(&with_scheme).map_err(|_| TcrError::InvalidAddress {
        address: address.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(TcrError::InvalidAddress {
            address: address.to_string(),
        });
    }
    Ok(url)
}

/// Workflow service client bound to one namespace
#[derive(Debug, Clone)]
pub struct WorkflowHttpClient {
    client: reqwest::Client,
    base_url: Url,
    namespace: String,
}

impl WorkflowHttpClient {
    pub fn new(address: &str, namespace: &str, api_key: &str) -> Result<Self> {
        let base_url = parse_address(address)?;
        let client = reqwest::Client::builder()
            .default_headers(bearer_headers(api_key)?)
            .build()
            .map_err(|e| TcrError::Http {
                context: "building workflow service client".to_string(),
                source: e,
            })?;

        Ok(Self {
            client,
            base_url,
            namespace: namespace.to_string(),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// `{base}/api/v1/namespaces/{namespace}/workflows/{extra...}`
    fn workflows_url(&self, extra: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // parse_address rejects cannot-be-a-base URLs
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "v1", "namespaces", self.namespace.as_str(), "workflows"])
                .extend(extra);
        }
        url
    }
}

#[async_trait]
impl WorkflowSource for WorkflowHttpClient {
    async fn list_executions(
        &self,
        query: &str,
        page_size: usize,
        page_token: &str,
    ) -> Result<ExecutionPage> {
        let page_size = page_size.to_string();
        let mut params = vec![("query", query), ("pageSize", page_size.as_str())];
        if !page_token.is_empty() {
            params.push(("nextPageToken", page_token));
        }

        debug!(query, page_size = %page_size, "listing workflow executions");
        let request = self.client.get(self.workflows_url(&[])).query(&params);
        let response: ListResponse = send_json(request, "listing workflow executions").await?;

        Ok(ExecutionPage {
            executions: response
                .executions
                .into_iter()
                .map(WorkflowExecution::from)
                .collect(),
            next_page_token: response.next_page_token,
        })
    }

    async fn history_page(
        &self,
        execution: &WorkflowExecution,
        page_token: &str,
    ) -> Result<HistoryPage> {
        let mut params = vec![("execution.runId", execution.run_id.as_str())];
        if !page_token.is_empty() {
            params.push(("nextPageToken", page_token));
        }

        debug!(workflow_id = %execution.workflow_id, run_id = %execution.run_id, "fetching history page");
        let url = self.workflows_url(&[execution.workflow_id.as_str(), "history"]);
        let request = self.client.get(url).query(&params);
        let response: HistoryResponse = send_json(request, "fetching workflow history").await?;

        Ok(HistoryPage {
            events: response.history.events,
            next_page_token: response.next_page_token,
        })
    }
}
