use serde::Deserialize;

/// One page returned by the billing usage endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsagePage {
    #[serde(default)]
    pub summaries: Vec<Summary>,
    #[serde(default)]
    pub next_page_token: String,
}

/// Usage for one billing interval
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub record_groups: Vec<RecordGroup>,
    #[serde(default)]
    pub incomplete: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordGroup {
    #[serde(default)]
    pub group_bys: Vec<GroupBy>,
    #[serde(default)]
    pub records: Vec<UsageRecord>,
}

impl RecordGroup {
    /// Namespace this group is attributed to, if it carries a non-empty
    /// namespace dimension
    pub fn namespace(&self) -> Option<&str> {
        self.group_bys
            .iter()
            .find(|g| g.key == GroupByKey::Namespace)
            .map(|g| g.value.as_str())
            .filter(|ns| !ns.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GroupBy {
    // Zero-valued enums are omitted from the wire
    #[serde(default)]
    pub key: GroupByKey,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum GroupByKey {
    #[serde(rename = "GROUP_BY_KEY_NAMESPACE")]
    Namespace,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UsageRecord {
    #[serde(rename = "type", default)]
    pub record_type: RecordType,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub value: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum RecordType {
    #[serde(rename = "RECORD_TYPE_ACTIONS")]
    Actions,
    #[serde(rename = "RECORD_TYPE_ACTIVE_STORAGE")]
    ActiveStorage,
    #[serde(rename = "RECORD_TYPE_RETAINED_STORAGE")]
    RetainedStorage,
    /// Unspecified, or introduced after this client was written
    #[default]
    #[serde(other)]
    Unknown,
}
