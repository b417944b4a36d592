use super::ast::{FilterCondition, FilterPipeline};
use crate::models::TranscriptEntry;

impl FilterPipeline {
    /// True when the entry satisfies every condition
    pub fn accepts(&self, entry: &TranscriptEntry) -> bool {
        self.conditions.iter().all(|condition| evaluate_condition(entry, *condition))
    }
}

/// Keep the positioned entries accepted by the pipeline, preserving their order
pub fn apply_filters(
    entries: Vec<(usize, TranscriptEntry)>,
    pipeline: &FilterPipeline,
) -> Vec<(usize, TranscriptEntry)> {
    if pipeline.is_empty() {
        return entries;
    }

    entries.into_iter().filter(|(_, entry)| pipeline.accepts(entry)).collect()
}

fn evaluate_condition(entry: &TranscriptEntry, condition: FilterCondition) -> bool {
    match condition {
        FilterCondition::ExcludeMeta => !entry.is_meta(),
        FilterCondition::Role(role) => entry.role() == role,
        FilterCondition::Conversational => entry.role().is_conversational(),
    }
}
