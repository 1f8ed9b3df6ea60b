//! Monthly cost projection from a sample of analyzed executions.
//!
//! The projection assumes executions arrive at a uniform rate over the
//! sampled period and cost the sample average; treat it as an estimate.

use crate::constants::{NANOS_PER_DAY, PROJECTION_DAYS};
use crate::types::{
    ActionBreakdown, ActionCount, AnalyzedExecution, Period, WorkflowCostReport, action_cost,
};
use chrono::DateTime;

/// Summarize a sample of executions into a cost report
pub fn project(
    workflow_type: &str,
    namespace: &str,
    executions: &[AnalyzedExecution],
    action_price_per_million: f64,
) -> WorkflowCostReport {
    let Some(first) = executions.first() else {
        return WorkflowCostReport {
            workflow_type: workflow_type.to_string(),
            namespace: namespace.to_string(),
            action_price_per_million,
            ..Default::default()
        };
    };

    let mut min_start = first.execution.start_time;
    let mut max_close = first.execution.close_time;
    let mut min_actions = first.actions.total;
    let mut max_actions = first.actions.total;
    let mut sum = ActionCount::default();

    for analyzed in executions {
        min_start = min_start.min(analyzed.execution.start_time);
        max_close = max_close.max(analyzed.execution.close_time);
        min_actions = min_actions.min(analyzed.actions.total);
        max_actions = max_actions.max(analyzed.actions.total);
        sum.accumulate(&analyzed.actions);
    }

    let period_days = period_days(min_start, max_close);
    let sample_size = executions.len() as f64;

    let average_actions = sum.total as f64 / sample_size;
    let average_cost = action_cost(average_actions, action_price_per_million);

    let executions_per_day = sample_size / period_days;
    let monthly_execs = (executions_per_day * PROJECTION_DAYS).floor() as u64;
    let monthly_cost = monthly_execs as f64 * average_cost;

    WorkflowCostReport {
        workflow_type: workflow_type.to_string(),
        namespace: namespace.to_string(),
        sample_size: executions.len(),
        period: Period::new(format_date(min_start), format_date(max_close)),
        period_days,
        min_actions_per_exec: min_actions,
        max_actions_per_exec: max_actions,
        average_actions_per_exec: average_actions,
        average_cost_per_exec: average_cost,
        estimated_monthly_execs: monthly_execs,
        estimated_monthly_cost: monthly_cost,
        action_price_per_million,
        average_action_breakdown: ActionBreakdown {
            workflow_starts: sum.workflow_starts as f64 / sample_size,
            timers: sum.timers as f64 / sample_size,
            signals: sum.signals as f64 / sample_size,
            search_attr_upserts: sum.search_attr_upserts as f64 / sample_size,
            updates: sum.updates as f64 / sample_size,
            activities: sum.activities as f64 / sample_size,
            child_workflows: sum.child_workflows as f64 / sample_size,
            side_effects: sum.side_effects as f64 / sample_size,
            total_actions: average_actions,
        },
    }
}

/// Days between two nanosecond timestamps, never less than 1
fn period_days(start_nanos: i64, end_nanos: i64) -> f64 {
    let days = end_nanos.saturating_sub(start_nanos) as f64 / NANOS_PER_DAY;
    days.max(1.0)
}

fn format_date(nanos: i64) -> String {
    DateTime::from_timestamp_nanos(nanos)
        .format("%Y-%m-%d")
        .to_string()
}
