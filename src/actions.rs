//! Billable action counting over a workflow execution history.
//!
//! Follows the published cloud billing model for actions, with one known
//! approximation: only markers named exactly `SideEffect` are counted as
//! side effects, so SDKs recording side effects under other marker names
//! are undercounted.

use crate::types::{ActionCount, EventType, HistoryEvent, SIDE_EFFECT_MARKER};

/// Incremental counter fed one history event at a time
#[derive(Debug, Default)]
pub struct ActionCounter {
    count: ActionCount,
}

impl ActionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: &HistoryEvent) {
        let count = &mut self.count;
        match event.event_type {
            EventType::WorkflowExecutionStarted => count.workflow_starts += 1,
            EventType::TimerStarted => count.timers += 1,
            EventType::WorkflowExecutionSignaled => count.signals += 1,
            EventType::UpsertWorkflowSearchAttributes => count.search_attr_upserts += 1,
            // Only accepted updates are billed
            EventType::WorkflowExecutionUpdateAccepted => count.updates += 1,
            // Every schedule counts, retries included
            EventType::ActivityTaskScheduled => count.activities += 1,
            EventType::StartChildWorkflowExecutionInitiated => count.child_workflows += 1,
            EventType::MarkerRecorded => {
                if event.marker_name() == Some(SIDE_EFFECT_MARKER) {
                    count.side_effects += 1;
                }
            }
            EventType::Unrecognized => {}
        }
    }

    /// Final breakdown with the weighted total filled in
    pub fn finish(self) -> ActionCount {
        let mut count = self.count;
        count.total = count.weighted_total();
        count
    }
}

/// Count actions over a complete event stream.
///
/// The stream is consumed to the end; the first error is returned as-is
/// and the partial count is discarded.
pub fn count_actions<I, E>(events: I) -> Result<ActionCount, E>
where
    I: IntoIterator<Item = Result<HistoryEvent, E>>,
{
    let mut counter = ActionCounter::new();
    for event in events {
        counter.record(&event?);
    }
    Ok(counter.finish())
}
