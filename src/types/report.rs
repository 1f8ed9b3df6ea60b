use super::pricing::Pricing;
use serde::Serialize;

/// Date range shown on a report (YYYY-MM-DD, inclusive)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Period {
    pub start: String,
    pub end: String,
}

impl Period {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Usage and cost attributed to one namespace
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NamespaceUsage {
    pub name: String,
    pub actions: f64,
    #[serde(rename = "actionsPercent")]
    pub actions_percent: f64,
    #[serde(rename = "activeStorageGBh")]
    pub active_storage_gbh: f64,
    #[serde(rename = "activeStoragePercent")]
    pub active_storage_percent: f64,
    #[serde(rename = "retainedStorageGBh")]
    pub retained_storage_gbh: f64,
    #[serde(rename = "retainedStoragePercent")]
    pub retained_storage_percent: f64,
    #[serde(rename = "actionCost")]
    pub action_cost: f64,
    #[serde(rename = "activeStorageCost")]
    pub active_storage_cost: f64,
    #[serde(rename = "retainedStorageCost")]
    pub retained_storage_cost: f64,
    #[serde(rename = "totalCost")]
    pub total_cost: f64,
    #[serde(rename = "totalCostPercent")]
    pub total_cost_percent: f64,
}

/// Sums across every namespace in a report
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Totals {
    pub actions: f64,
    #[serde(rename = "activeStorageGBh")]
    pub active_storage_gbh: f64,
    #[serde(rename = "retainedStorageGBh")]
    pub retained_storage_gbh: f64,
    #[serde(rename = "actionCost")]
    pub action_cost: f64,
    #[serde(rename = "activeStorageCost")]
    pub active_storage_cost: f64,
    #[serde(rename = "retainedStorageCost")]
    pub retained_storage_cost: f64,
    #[serde(rename = "storageCost")]
    pub storage_cost: f64,
    #[serde(rename = "totalCost")]
    pub total_cost: f64,
}

impl Totals {
    pub(crate) fn add(&mut self, usage: &NamespaceUsage) {
        self.actions += usage.actions;
        self.active_storage_gbh += usage.active_storage_gbh;
        self.retained_storage_gbh += usage.retained_storage_gbh;
        self.action_cost += usage.action_cost;
        self.active_storage_cost += usage.active_storage_cost;
        self.retained_storage_cost += usage.retained_storage_cost;
        self.storage_cost += usage.active_storage_cost + usage.retained_storage_cost;
        self.total_cost += usage.total_cost;
    }
}

/// Complete namespace cost report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub period: Period,
    pub pricing: Pricing,
    pub namespaces: Vec<NamespaceUsage>,
    pub totals: Totals,
}
