//! Namespace usage aggregation.
//!
//! Folds billing usage pages into per-namespace running totals, then
//! converts them into a priced [`Report`] with each namespace's share of
//! the total.

use crate::constants::{BYTES_PER_GB, SECONDS_PER_HOUR};
use crate::types::{NamespaceUsage, Period, Pricing, RecordType, Report, Totals, UsagePage};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Running sums for one namespace, in the units the API reports
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct NamespaceAggregate {
    actions: f64,
    active_storage_byte_seconds: f64,
    retained_storage_byte_seconds: f64,
}

/// Convert a storage integral in byte-seconds to GB-hours
#[inline]
pub fn byte_seconds_to_gbh(byte_seconds: f64) -> f64 {
    byte_seconds / SECONDS_PER_HOUR / BYTES_PER_GB
}

/// `value` as a percentage of `total`, 0 when the total is 0
#[inline]
fn percent_of(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        (value / total) * 100.0
    } else {
        0.0
    }
}

/// Accumulates usage pages; each report owns a fresh aggregator
#[derive(Debug, Default)]
pub struct UsageAggregator {
    namespaces: HashMap<String, NamespaceAggregate>,
}

impl UsageAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every record group of a page to its namespace totals
    pub fn ingest(&mut self, page: &UsagePage) {
        for summary in &page.summaries {
            if summary.incomplete {
                warn!(
                    start = %summary.start_time,
                    end = %summary.end_time,
                    "usage summary is incomplete; totals may still change"
                );
            }

            for group in &summary.record_groups {
                // Groups without a namespace are not attributable to anyone
                let Some(namespace) = group.namespace() else {
                    debug!(records = group.records.len(), "skipping record group without namespace");
                    continue;
                };

                let agg = self.namespaces.entry(namespace.to_string()).or_default();
                for record in &group.records {
                    match record.record_type {
                        RecordType::Actions => agg.actions += record.value,
                        RecordType::ActiveStorage => {
                            agg.active_storage_byte_seconds += record.value
                        }
                        RecordType::RetainedStorage => {
                            agg.retained_storage_byte_seconds += record.value
                        }
                        RecordType::Unknown => {
                            debug!(namespace, unit = %record.unit, "ignoring unknown record type")
                        }
                    }
                }
            }
        }
    }

    /// Number of namespaces seen so far
    pub fn namespace_count(&self) -> usize {
        self.namespaces.len()
    }

    /// Price the accumulated usage and derive percentages
    pub fn finish(self, pricing: Pricing, period: Period) -> Report {
        // HashMap iteration order is arbitrary; sort first so both the
        // output order and the float summation order are stable
        let mut aggregates: Vec<_> = self.namespaces.into_iter().collect();
        aggregates.sort_by(|a, b| a.0.cmp(&b.0));

        let mut namespaces = Vec::with_capacity(aggregates.len());
        let mut totals = Totals::default();

        for (name, agg) in aggregates {
            let usage = namespace_usage(name, &agg, &pricing);
            totals.add(&usage);
            namespaces.push(usage);
        }

        for usage in &mut namespaces {
            usage.actions_percent = percent_of(usage.actions, totals.actions);
            usage.active_storage_percent =
                percent_of(usage.active_storage_gbh, totals.active_storage_gbh);
            usage.retained_storage_percent =
                percent_of(usage.retained_storage_gbh, totals.retained_storage_gbh);
            usage.total_cost_percent = percent_of(usage.total_cost, totals.total_cost);
        }

        Report {
            period,
            pricing,
            namespaces,
            totals,
        }
    }
}

fn namespace_usage(name: String, agg: &NamespaceAggregate, pricing: &Pricing) -> NamespaceUsage {
    let active_storage_gbh = byte_seconds_to_gbh(agg.active_storage_byte_seconds);
    let retained_storage_gbh = byte_seconds_to_gbh(agg.retained_storage_byte_seconds);

    let action_cost = pricing.action_cost(agg.actions);
    let active_storage_cost = pricing.active_storage_cost(active_storage_gbh);
    let retained_storage_cost = pricing.retained_storage_cost(retained_storage_gbh);

    NamespaceUsage {
        name,
        actions: agg.actions,
        active_storage_gbh,
        retained_storage_gbh,
        action_cost,
        active_storage_cost,
        retained_storage_cost,
        total_cost: action_cost + active_storage_cost + retained_storage_cost,
        ..Default::default()
    }
}

/// Build a report from already-fetched usage pages
pub fn generate_report<'a, I>(pages: I, pricing: Pricing, period: Period) -> Report
where
    I: IntoIterator<Item = &'a UsagePage>,
{
    let mut aggregator = UsageAggregator::new();
    for page in pages {
        aggregator.ingest(page);
    }
    aggregator.finish(pricing, period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GroupBy, GroupByKey, RecordGroup, Summary, UsageRecord};

    const GBH: f64 = 3600.0 * 1024.0 * 1024.0 * 1024.0;

    fn record(record_type: RecordType, value: f64) -> UsageRecord {
        UsageRecord {
            record_type,
            unit: String::new(),
            value,
        }
    }

    fn group(namespace: Option<&str>, records: Vec<UsageRecord>) -> RecordGroup {
        RecordGroup {
            group_bys: namespace
                .map(|ns| {
                    vec![GroupBy {
                        key: GroupByKey::Namespace,
                        value: ns.to_string(),
                    }]
                })
                .unwrap_or_default(),
            records,
        }
    }

    fn page(groups: Vec<RecordGroup>) -> UsagePage {
        UsagePage {
            summaries: vec![Summary {
                record_groups: groups,
                ..Default::default()
            }],
            next_page_token: String::new(),
        }
    }

    fn period() -> Period {
        Period::new("2026-01-01", "2026-01-31")
    }

    #[test]
    fn test_gbh_conversion_is_exact() {
        assert_eq!(byte_seconds_to_gbh(GBH), 1.0);
        assert_eq!(byte_seconds_to_gbh(0.0), 0.0);
    }

    #[test]
    fn test_two_namespace_scenario() {
        let pages = vec![page(vec![
            group(Some("ns-a"), vec![record(RecordType::Actions, 1_000_000.0)]),
            group(Some("ns-b"), vec![record(RecordType::Actions, 0.0)]),
        ])];
        let pricing = Pricing {
            action_price_per_million: 50.0,
            ..Default::default()
        };

        let report = generate_report(&pages, pricing, period());

        assert_eq!(report.namespaces.len(), 2);
        let a = &report.namespaces[0];
        let b = &report.namespaces[1];
        assert_eq!(a.name, "ns-a");
        assert_eq!(a.action_cost, 50.0);
        assert_eq!(a.actions_percent, 100.0);
        assert_eq!(b.name, "ns-b");
        assert_eq!(b.actions_percent, 0.0);
        assert_eq!(report.totals.action_cost, 50.0);
    }

    #[test]
    fn test_accumulates_across_pages_and_groups() {
        let pages = vec![
            page(vec![
                group(
                    Some("billing"),
                    vec![
                        record(RecordType::Actions, 100.0),
                        record(RecordType::ActiveStorage, GBH),
                    ],
                ),
                group(Some("billing"), vec![record(RecordType::Actions, 50.0)]),
            ]),
            page(vec![group(
                Some("billing"),
                vec![
                    record(RecordType::Actions, 25.0),
                    record(RecordType::RetainedStorage, 2.0 * GBH),
                ],
            )]),
        ];

        let report = generate_report(&pages, Pricing::default(), period());

        let billing = &report.namespaces[0];
        assert_eq!(billing.actions, 175.0);
        assert_eq!(billing.active_storage_gbh, 1.0);
        assert_eq!(billing.retained_storage_gbh, 2.0);
        assert!((billing.active_storage_cost - 0.042).abs() < 1e-12);
        assert!((billing.retained_storage_cost - 0.0021).abs() < 1e-12);
        assert!(
            (billing.total_cost
                - (billing.action_cost + billing.active_storage_cost + billing.retained_storage_cost))
                .abs()
                < 1e-12
        );
    }

    #[test]
    fn test_group_without_namespace_is_dropped() {
        let pages = vec![page(vec![
            group(None, vec![record(RecordType::Actions, 9_999.0)]),
            group(Some("kept"), vec![record(RecordType::Actions, 1.0)]),
        ])];

        let report = generate_report(&pages, Pricing::default(), period());

        assert_eq!(report.namespaces.len(), 1);
        assert_eq!(report.namespaces[0].name, "kept");
        assert_eq!(report.totals.actions, 1.0);
    }

    #[test]
    fn test_empty_namespace_value_is_dropped() {
        let pages = vec![page(vec![
            group(Some(""), vec![record(RecordType::Actions, 5.0)]),
            group(Some("a"), vec![record(RecordType::Actions, 15.0)]),
        ])];

        let report = generate_report(&pages, Pricing::default(), period());

        let names: Vec<&str> = report.namespaces.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["a"]);
        assert_eq!(report.namespaces[0].actions_percent, 100.0);
        assert_eq!(report.totals.actions, 15.0);
    }

    #[test]
    fn test_unknown_record_type_is_ignored() {
        let pages = vec![page(vec![group(
            Some("ns"),
            vec![
                record(RecordType::Unknown, 500.0),
                record(RecordType::Actions, 10.0),
            ],
        )])];

        let report = generate_report(&pages, Pricing::default(), period());
        assert_eq!(report.namespaces[0].actions, 10.0);
        assert_eq!(report.namespaces[0].active_storage_gbh, 0.0);
    }

    #[test]
    fn test_percentages_sum_to_100() {
        let pages = vec![page(vec![
            group(
                Some("a"),
                vec![
                    record(RecordType::Actions, 3.0),
                    record(RecordType::ActiveStorage, 7.0),
                ],
            ),
            group(
                Some("b"),
                vec![
                    record(RecordType::Actions, 5.0),
                    record(RecordType::ActiveStorage, 11.0),
                ],
            ),
            group(Some("c"), vec![record(RecordType::Actions, 13.0)]),
        ])];

        let report = generate_report(&pages, Pricing::default(), period());

        let actions: f64 = report.namespaces.iter().map(|n| n.actions_percent).sum();
        let active: f64 = report
            .namespaces
            .iter()
            .map(|n| n.active_storage_percent)
            .sum();
        let cost: f64 = report.namespaces.iter().map(|n| n.total_cost_percent).sum();
        assert!((actions - 100.0).abs() < 1e-9);
        assert!((active - 100.0).abs() < 1e-9);
        assert!((cost - 100.0).abs() < 1e-9);

        // No retained storage anywhere: every share is zero
        assert!(
            report
                .namespaces
                .iter()
                .all(|n| n.retained_storage_percent == 0.0)
        );
    }

    #[test]
    fn test_zero_totals_yield_zero_percentages() {
        let pages = vec![page(vec![
            group(Some("a"), vec![record(RecordType::Actions, 0.0)]),
            group(Some("b"), vec![]),
        ])];

        let report = generate_report(&pages, Pricing::default(), period());

        for ns in &report.namespaces {
            assert_eq!(ns.actions_percent, 0.0);
            assert_eq!(ns.active_storage_percent, 0.0);
            assert_eq!(ns.total_cost_percent, 0.0);
        }
    }

    #[test]
    fn test_output_sorted_by_name() {
        let pages = vec![page(vec![
            group(Some("zeta"), vec![record(RecordType::Actions, 1.0)]),
            group(Some("alpha"), vec![record(RecordType::Actions, 1.0)]),
            group(Some("mid"), vec![record(RecordType::Actions, 1.0)]),
        ])];

        let report = generate_report(&pages, Pricing::default(), period());
        let names: Vec<_> = report.namespaces.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_totals_match_namespace_sums() {
        let pages = vec![page(vec![
            group(
                Some("a"),
                vec![
                    record(RecordType::Actions, 2_000_000.0),
                    record(RecordType::RetainedStorage, GBH),
                ],
            ),
            group(Some("b"), vec![record(RecordType::ActiveStorage, 3.0 * GBH)]),
        ])];

        let report = generate_report(&pages, Pricing::default(), period());
        let totals = &report.totals;

        assert_eq!(totals.actions, 2_000_000.0);
        assert_eq!(totals.active_storage_gbh, 3.0);
        assert_eq!(totals.retained_storage_gbh, 1.0);
        assert!(
            (totals.storage_cost - (totals.active_storage_cost + totals.retained_storage_cost))
                .abs()
                < 1e-12
        );
        assert!((totals.total_cost - (totals.action_cost + totals.storage_cost)).abs() < 1e-12);
    }

    #[test]
    fn test_report_is_deterministic() {
        let pages = vec![page(vec![
            group(Some("b"), vec![record(RecordType::Actions, 1.5)]),
            group(Some("a"), vec![record(RecordType::ActiveStorage, 12345.0)]),
            group(Some("c"), vec![record(RecordType::RetainedStorage, 0.25)]),
        ])];

        let first = generate_report(&pages, Pricing::default(), period());
        let second = generate_report(&pages, Pricing::default(), period());
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        let pages: Vec<UsagePage> = Vec::new();
        let report = generate_report(&pages, Pricing::default(), period());
        assert!(report.namespaces.is_empty());
        assert_eq!(report.totals, Totals::default());
        assert_eq!(report.period, period());
    }
}
