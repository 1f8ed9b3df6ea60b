//! Drives the collaborators through their pagination and feeds the
//! aggregation and counting cores.

use crate::actions::count_actions;
use crate::aggregator::UsageAggregator;
use crate::client::{UsageSource, WorkflowSource};
use crate::constants::LIST_PAGE_SIZE;
use crate::error::Result;
use crate::types::{
    ActionCount, AnalyzedExecution, HistoryEvent, Period, Pricing, Report, WorkflowExecution,
};
use tracing::{debug, info};

/// Fetch every usage page in `[start, end)` and build the namespace report.
///
/// Pages are aggregated as they arrive; a fetch error discards everything
/// accumulated so far.
pub async fn collect_usage<S>(
    source: &S,
    start: &str,
    end: &str,
    pricing: Pricing,
    period: Period,
) -> Result<Report>
where
    S: UsageSource + ?Sized,
{
    let mut aggregator = UsageAggregator::new();
    let mut page_token = String::new();
    let mut pages = 0usize;

    loop {
        let page = source.usage_page(start, end, &page_token).await?;
        aggregator.ingest(&page);
        pages += 1;

        if page.next_page_token.is_empty() {
            break;
        }
        page_token = page.next_page_token;
    }

    info!(
        pages,
        namespaces = aggregator.namespace_count(),
        "usage data fetched"
    );
    Ok(aggregator.finish(pricing, period))
}

/// Visibility query selecting closed executions of one workflow type
pub fn closed_executions_query(workflow_type: &str) -> String {
    format!("WorkflowType = '{workflow_type}' AND CloseTime IS NOT NULL")
}

/// List up to `limit` closed executions of `workflow_type`
pub async fn list_workflows_by_type<S>(
    source: &S,
    workflow_type: &str,
    limit: usize,
) -> Result<Vec<WorkflowExecution>>
where
    S: WorkflowSource + ?Sized,
{
    let query = closed_executions_query(workflow_type);
    let mut executions = Vec::new();
    let mut page_token = String::new();

    while executions.len() < limit {
        let page_size = (limit - executions.len()).min(LIST_PAGE_SIZE);
        let page = source
            .list_executions(&query, page_size, &page_token)
            .await?;

        for execution in page.executions {
            executions.push(execution);
            if executions.len() >= limit {
                return Ok(executions);
            }
        }

        if page.next_page_token.is_empty() {
            break;
        }
        page_token = page.next_page_token;
    }

    Ok(executions)
}

/// Count the actions in one execution's full history
pub async fn count_execution_actions<S>(
    source: &S,
    execution: &WorkflowExecution,
) -> Result<ActionCount>
where
    S: WorkflowSource + ?Sized,
{
    let mut events: Vec<Result<HistoryEvent>> = Vec::new();
    let mut page_token = String::new();

    // A fetch error ends the stream and is surfaced by the counter
    loop {
        match source.history_page(execution, &page_token).await {
            Ok(page) => {
                events.extend(page.events.into_iter().map(Ok));
                if page.next_page_token.is_empty() {
                    break;
                }
                page_token = page.next_page_token;
            }
            Err(e) => {
                events.push(Err(e));
                break;
            }
        }
    }

    count_actions(events)
}

/// Count actions for every execution, in order.
///
/// Fail-fast: the first history error aborts the batch and no partial
/// results are returned.
pub async fn analyze_workflows<S>(
    source: &S,
    executions: Vec<WorkflowExecution>,
) -> Result<Vec<AnalyzedExecution>>
where
    S: WorkflowSource + ?Sized,
{
    let mut results = Vec::with_capacity(executions.len());

    for execution in executions {
        let actions = count_execution_actions(source, &execution).await?;
        debug!(
            workflow_id = %execution.workflow_id,
            run_id = %execution.run_id,
            total = actions.total,
            "execution analyzed"
        );
        results.push(AnalyzedExecution { execution, actions });
    }

    Ok(results)
}
