pub mod cost;
pub mod history;
pub mod ids;
pub mod pricing;
pub mod report;
pub mod usage;
pub mod workflow;

pub use cost::Cost;
pub use history::{EventType, HistoryEvent, MarkerRecordedAttributes, SIDE_EFFECT_MARKER};
pub use ids::{RunId, WorkflowId};
pub use pricing::{Pricing, action_cost};
pub use report::{NamespaceUsage, Period, Report, Totals};
pub use usage::{GroupBy, GroupByKey, RecordGroup, RecordType, Summary, UsagePage, UsageRecord};
pub use workflow::{
    ActionBreakdown, ActionCount, AnalyzedExecution, WorkflowCostReport, WorkflowExecution,
};
