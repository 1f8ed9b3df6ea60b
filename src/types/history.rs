use serde::Deserialize;

/// Marker name the SDKs use for side effects
pub const SIDE_EFFECT_MARKER: &str = "SideEffect";

/// One event from a workflow execution history
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEvent {
    pub event_type: EventType,
    #[serde(default)]
    pub marker_recorded_event_attributes: Option<MarkerRecordedAttributes>,
}

impl HistoryEvent {
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            marker_recorded_event_attributes: None,
        }
    }

    pub fn marker(name: impl Into<String>) -> Self {
        Self {
            event_type: EventType::MarkerRecorded,
            marker_recorded_event_attributes: Some(MarkerRecordedAttributes {
                marker_name: name.into(),
            }),
        }
    }

    /// Name of the recorded marker, for marker events only
    pub fn marker_name(&self) -> Option<&str> {
        self.marker_recorded_event_attributes
            .as_ref()
            .map(|attrs| attrs.marker_name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerRecordedAttributes {
    #[serde(default)]
    pub marker_name: String,
}

/// History event kinds relevant to action billing.
///
/// Both the enum spelling (`EVENT_TYPE_TIMER_STARTED`) and the short
/// spelling (`TimerStarted`) are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EventType {
    #[serde(
        rename = "EVENT_TYPE_WORKFLOW_EXECUTION_STARTED",
        alias = "WorkflowExecutionStarted"
    )]
    WorkflowExecutionStarted,
    #[serde(rename = "EVENT_TYPE_TIMER_STARTED", alias = "TimerStarted")]
    TimerStarted,
    #[serde(
        rename = "EVENT_TYPE_WORKFLOW_EXECUTION_SIGNALED",
        alias = "WorkflowExecutionSignaled"
    )]
    WorkflowExecutionSignaled,
    #[serde(
        rename = "EVENT_TYPE_UPSERT_WORKFLOW_SEARCH_ATTRIBUTES",
        alias = "UpsertWorkflowSearchAttributes"
    )]
    UpsertWorkflowSearchAttributes,
    #[serde(
        rename = "EVENT_TYPE_WORKFLOW_EXECUTION_UPDATE_ACCEPTED",
        alias = "WorkflowExecutionUpdateAccepted"
    )]
    WorkflowExecutionUpdateAccepted,
    #[serde(
        rename = "EVENT_TYPE_ACTIVITY_TASK_SCHEDULED",
        alias = "ActivityTaskScheduled"
    )]
    ActivityTaskScheduled,
    #[serde(
        rename = "EVENT_TYPE_START_CHILD_WORKFLOW_EXECUTION_INITIATED",
        alias = "StartChildWorkflowExecutionInitiated"
    )]
    StartChildWorkflowExecutionInitiated,
    #[serde(rename = "EVENT_TYPE_MARKER_RECORDED", alias = "MarkerRecorded")]
    MarkerRecorded,
    /// Every other event kind; not billable
    #[serde(other)]
    Unrecognized,
}
