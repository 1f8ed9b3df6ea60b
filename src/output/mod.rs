//! Table and JSON presentation of the reports.

pub mod table;

use crate::error::Result;
use crate::formatting::{
    format_compact, format_currency, format_number_with_commas, format_percent,
};
use crate::types::{Cost, Report, WorkflowCostReport};
use colored::Colorize;
use serde::Serialize;
use table::Table;

const USAGE_DISCLAIMER: &str =
    "* Costs are estimates based on the provided pricing and may differ from actual invoiced amounts.";
const WORKFLOW_DISCLAIMER: &str =
    "* Costs are estimates based on sampled data and may differ from actual invoiced amounts.";

/// Pretty-printed JSON for any report
pub fn to_json<T: Serialize>(report: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_usage_table(report: &Report) -> String {
    let pricing = &report.pricing;
    let mut out = format!(
        "\n{}\nPeriod: {} to {}\nPricing: ${:.2}/M actions, ${:.4}/GBh active, ${:.5}/GBh retained\n\n",
        "Temporal Cloud Usage Report".bold(),
        report.period.start,
        report.period.end,
        pricing.action_price_per_million,
        pricing.active_storage_price_per_gbh,
        pricing.retained_storage_price_per_gbh
    );

    let mut table = Table::new([
        "Namespace", "Count", "Cost", "%", "GBh", "Cost", "%", "GBh", "Cost", "%", "Cost", "%",
    ])
    .group("", 1)
    .group("ACTIONS", 3)
    .group("ACTIVE STORAGE", 3)
    .group("RETAINED STORAGE", 3)
    .group("TOTAL", 2);

    for ns in &report.namespaces {
        table.row([
            ns.name.clone(),
            format_compact(ns.actions),
            format_currency(ns.action_cost),
            format_percent(ns.actions_percent),
            format!("{:.2}", ns.active_storage_gbh),
            format_currency(ns.active_storage_cost),
            format_percent(ns.active_storage_percent),
            format!("{:.2}", ns.retained_storage_gbh),
            format_currency(ns.retained_storage_cost),
            format_percent(ns.retained_storage_percent),
            format_currency(ns.total_cost),
            format_percent(ns.total_cost_percent),
        ]);
    }

    let totals = &report.totals;
    let hundred = format_percent(100.0);
    table.footer([
        "TOTAL".to_string(),
        format_compact(totals.actions),
        format_currency(totals.action_cost),
        hundred.clone(),
        format!("{:.2}", totals.active_storage_gbh),
        format_currency(totals.active_storage_cost),
        hundred.clone(),
        format!("{:.2}", totals.retained_storage_gbh),
        format_currency(totals.retained_storage_cost),
        hundred.clone(),
        format_currency(totals.total_cost),
        hundred,
    ]);

    out.push_str(&table.render());
    out.push('\n');
    out.push_str(&format!("{}\n", USAGE_DISCLAIMER.dimmed()));
    out
}

pub fn render_workflow_table(report: &WorkflowCostReport) -> String {
    let mut out = format!(
        "\n{}\nType: {}\nNamespace: {}\n",
        "Workflow Cost Analysis".bold(),
        report.workflow_type,
        report.namespace
    );
    if !report.is_empty() {
        out.push_str(&format!(
            "Sample: {} executions ({} to {})\n",
            report.sample_size, report.period.start, report.period.end
        ));
    }
    out.push_str(&format!(
        "Pricing: ${:.2}/M actions\n\n",
        report.action_price_per_million
    ));

    if report.is_empty() {
        out.push_str("No completed workflows found for this type.\n");
        return out;
    }

    let mut summary = Table::new(["Metric", "Value"]);
    summary.row([
        "Min Actions/Exec".to_string(),
        report.min_actions_per_exec.to_string(),
    ]);
    summary.row([
        "Max Actions/Exec".to_string(),
        report.max_actions_per_exec.to_string(),
    ]);
    summary.row([
        "Avg Actions/Exec".to_string(),
        format!("{:.1}", report.average_actions_per_exec),
    ]);
    summary.row([
        "Avg Cost/Exec".to_string(),
        Cost::new(report.average_cost_per_exec).to_precise_string(),
    ]);
    summary.row([
        "Executions Sampled".to_string(),
        format_number_with_commas(report.sample_size as u64),
    ]);
    summary.row([
        "Sample Period (days)".to_string(),
        format!("{:.1}", report.period_days),
    ]);
    summary.row([
        "Est. Monthly Execs".to_string(),
        format_compact(report.estimated_monthly_execs as f64),
    ]);
    summary.row([
        "Est. Monthly Cost".to_string(),
        format_currency(report.estimated_monthly_cost),
    ]);
    out.push_str(&summary.render());
    out.push_str("\n\n");

    out.push_str(&format!(
        "{}\n",
        "Action Breakdown (avg per execution):".bold()
    ));
    let b = &report.average_action_breakdown;
    // (label, average count, action weight)
    let kinds = [
        ("Workflow Starts", b.workflow_starts, 1.0),
        ("Activities", b.activities, 1.0),
        ("Timers", b.timers, 1.0),
        ("Signals", b.signals, 1.0),
        ("Child Workflows", b.child_workflows, 2.0),
        ("Updates", b.updates, 1.0),
        ("Search Attr Upserts", b.search_attr_upserts, 1.0),
        ("Side Effects", b.side_effects, 1.0),
    ];

    let mut breakdown = Table::new(["Event Type", "Count", "Actions"]);
    for (label, count, weight) in kinds {
        if count > 0.0 {
            breakdown.row([
                label.to_string(),
                format!("{:.1}", count),
                format!("{:.1}", count * weight),
            ]);
        }
    }
    breakdown.footer([
        "TOTAL".to_string(),
        String::new(),
        format!("{:.1}", b.total_actions),
    ]);
    out.push_str(&breakdown.render());
    out.push_str("\n\n");
    out.push_str(&format!("{}\n", WORKFLOW_DISCLAIMER.dimmed()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        ActionBreakdown, NamespaceUsage, Period, Pricing, Totals, WorkflowCostReport,
    };

    fn usage_report() -> Report {
        Report {
            period: Period::new("2026-01-01", "2026-01-31"),
            pricing: Pricing::default(),
            namespaces: vec![NamespaceUsage {
                name: "orders.a1b2c".to_string(),
                actions: 2_500_000.0,
                actions_percent: 100.0,
                action_cost: 125.0,
                total_cost: 125.0,
                total_cost_percent: 100.0,
                ..Default::default()
            }],
            totals: Totals {
                actions: 2_500_000.0,
                action_cost: 125.0,
                total_cost: 125.0,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_usage_table_contents() {
        let rendered = render_usage_table(&usage_report());

        assert!(rendered.contains("Period: 2026-01-01 to 2026-01-31"));
        assert!(rendered.contains("Pricing: $50.00/M actions, $0.0420/GBh active, $0.00105/GBh retained"));
        assert!(rendered.contains("RETAINED STORAGE"));
        assert!(rendered.contains("orders.a1b2c"));
        assert!(rendered.contains("2.50M"));
        assert!(rendered.contains("$125.00"));
        assert!(rendered.contains("│ TOTAL "));
    }

    #[test]
    fn test_usage_table_layout() {
        let rendered = render_usage_table(&usage_report());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "");
        assert!(lines[1].contains("Temporal Cloud Usage Report"));
        assert_eq!(lines[4], "");
        assert!(lines[5].starts_with('┌'));
        assert!(lines[lines.len() - 2].starts_with('└'));
        assert!(lines[lines.len() - 1].contains("Costs are estimates"));
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_empty_workflow_report() {
        let report = WorkflowCostReport {
            workflow_type: "OrderWorkflow".to_string(),
            namespace: "orders.a1b2c".to_string(),
            action_price_per_million: 50.0,
            ..Default::default()
        };

        let rendered = render_workflow_table(&report);
        assert!(rendered.contains("No completed workflows found for this type."));
        assert!(!rendered.contains("Sample:"));
        assert!(!rendered.contains("Metric"));
    }

    #[test]
    fn test_workflow_breakdown_lists_nonzero_kinds() {
        let report = WorkflowCostReport {
            workflow_type: "OrderWorkflow".to_string(),
            namespace: "orders.a1b2c".to_string(),
            sample_size: 4,
            period: Period::new("2026-01-01", "2026-01-05"),
            period_days: 4.0,
            min_actions_per_exec: 4,
            max_actions_per_exec: 6,
            average_actions_per_exec: 5.0,
            average_cost_per_exec: 0.00025,
            estimated_monthly_execs: 30,
            estimated_monthly_cost: 0.0075,
            action_price_per_million: 50.0,
            average_action_breakdown: ActionBreakdown {
                workflow_starts: 1.0,
                activities: 2.0,
                child_workflows: 1.0,
                total_actions: 5.0,
                ..Default::default()
            },
        };

        let rendered = render_workflow_table(&report);
        assert!(rendered.contains("Sample: 4 executions (2026-01-01 to 2026-01-05)"));
        assert!(rendered.contains("$0.000250"));
        assert!(rendered.contains("Child Workflows │   1.0 │     2.0"));
        assert!(rendered.contains("Activities"));
        assert!(!rendered.contains("Timers"));
        assert!(!rendered.contains("Side Effects"));
    }

    #[test]
    fn test_json_uses_api_field_names() {
        let json = to_json(&usage_report()).unwrap();
        assert!(json.contains("\"actionsPercent\": 100.0"));
        assert!(json.contains("\"activeStorageGBh\""));
        assert!(json.contains("\"actionPricePerMillion\": 50.0"));
    }
}
