use super::ids::{RunId, WorkflowId};
use super::report::Period;
use serde::Serialize;

/// A closed workflow execution selected for analysis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowExecution {
    pub workflow_id: WorkflowId,
    pub run_id: RunId,
    /// Unix timestamp in nanoseconds
    pub start_time: i64,
    /// Unix timestamp in nanoseconds
    pub close_time: i64,
}

/// Billable actions recorded in one execution's history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionCount {
    pub workflow_starts: u64,
    pub timers: u64,
    pub signals: u64,
    pub search_attr_upserts: u64,
    pub updates: u64,
    pub activities: u64,
    /// Each child workflow start is billed as 2 actions
    pub child_workflows: u64,
    pub side_effects: u64,
    pub total: u64,
}

impl ActionCount {
    /// Weighted sum of the counters
    pub fn weighted_total(&self) -> u64 {
        self.workflow_starts
            + self.timers
            + self.signals
            + self.search_attr_upserts
            + self.updates
            + self.activities
            + self.child_workflows * 2
            + self.side_effects
    }

    /// Elementwise sum, `total` included
    pub(crate) fn accumulate(&mut self, other: &ActionCount) {
        self.workflow_starts += other.workflow_starts;
        self.timers += other.timers;
        self.signals += other.signals;
        self.search_attr_upserts += other.search_attr_upserts;
        self.updates += other.updates;
        self.activities += other.activities;
        self.child_workflows += other.child_workflows;
        self.side_effects += other.side_effects;
        self.total += other.total;
    }
}

/// An execution together with its counted actions
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedExecution {
    pub execution: WorkflowExecution,
    pub actions: ActionCount,
}

/// Average actions per execution by kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionBreakdown {
    pub workflow_starts: f64,
    pub timers: f64,
    pub signals: f64,
    pub search_attr_upserts: f64,
    pub updates: f64,
    pub activities: f64,
    pub child_workflows: f64,
    pub side_effects: f64,
    pub total_actions: f64,
}

/// Cost analysis of a sample of executions of one workflow type
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowCostReport {
    pub workflow_type: String,
    pub namespace: String,
    pub sample_size: usize,
    pub period: Period,
    pub period_days: f64,
    #[serde(rename = "minActionsPerExecution")]
    pub min_actions_per_exec: u64,
    #[serde(rename = "maxActionsPerExecution")]
    pub max_actions_per_exec: u64,
    #[serde(rename = "averageActionsPerExecution")]
    pub average_actions_per_exec: f64,
    #[serde(rename = "averageCostPerExecution")]
    pub average_cost_per_exec: f64,
    #[serde(rename = "estimatedMonthlyExecutions")]
    pub estimated_monthly_execs: u64,
    pub estimated_monthly_cost: f64,
    pub action_price_per_million: f64,
    #[serde(rename = "actionBreakdown")]
    pub average_action_breakdown: ActionBreakdown,
}

impl WorkflowCostReport {
    /// True when the sample contained no executions
    pub fn is_empty(&self) -> bool {
        self.sample_size == 0
    }
}
