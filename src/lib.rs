// Module declarations
pub mod actions;
pub mod aggregator;
pub mod analyzer;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod output;
pub mod projector;
pub mod types;

// Re-export commonly used items
pub use actions::{ActionCounter, count_actions};
pub use aggregator::{UsageAggregator, generate_report};
pub use error::{Result, TcrError};
pub use projector::project;
pub use types::{
    ActionCount, AnalyzedExecution, Cost, HistoryEvent, NamespaceUsage, Period, Pricing, Report,
    UsagePage, WorkflowCostReport, WorkflowExecution,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_page_json_to_report() {
        let json_str = r#"{
            "summaries": [
                {
                    "startTime": "2026-01-01T00:00:00Z",
                    "endTime": "2026-01-02T00:00:00Z",
                    "incomplete": false,
                    "recordGroups": [
                        {
                            "groupBys": [{"key": "GROUP_BY_KEY_NAMESPACE", "value": "payments.x1"}],
                            "records": [
                                {"type": "RECORD_TYPE_ACTIONS", "unit": "RECORD_UNIT_NUMBER", "value": 3000000},
                                {"type": "RECORD_TYPE_ACTIVE_STORAGE", "unit": "RECORD_UNIT_BYTE_SECONDS", "value": 3865470566400},
                                {"type": "RECORD_TYPE_RETAINED_STORAGE", "unit": "RECORD_UNIT_BYTE_SECONDS", "value": 0}
                            ]
                        },
                        {
                            "groupBys": [{"key": "GROUP_BY_KEY_NAMESPACE", "value": "orders.x1"}],
                            "records": [
                                {"type": "RECORD_TYPE_ACTIONS", "unit": "RECORD_UNIT_NUMBER", "value": 1000000},
                                {"type": "RECORD_TYPE_FUTURE_METRIC", "unit": "RECORD_UNIT_NUMBER", "value": 7}
                            ]
                        }
                    ]
                }
            ],
            "nextPageToken": ""
        }"#;

        let page: UsagePage = serde_json::from_str(json_str).unwrap();
        let report = generate_report(
            [&page],
            Pricing::default(),
            Period::new("2026-01-01", "2026-01-01"),
        );

        let names: Vec<&str> = report.namespaces.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["orders.x1", "payments.x1"]);

        let payments = &report.namespaces[1];
        assert_eq!(payments.actions, 3_000_000.0);
        assert_eq!(payments.actions_percent, 75.0);
        assert_eq!(payments.action_cost, 150.0);
        assert!((payments.active_storage_gbh - 1.0).abs() < 1e-9);
        assert!((payments.active_storage_cost - 0.042).abs() < 1e-9);

        assert_eq!(report.totals.actions, 4_000_000.0);
        assert!((report.totals.total_cost - 200.042).abs() < 1e-9);
    }
}
