use crate::model::SidebarState;
use crate::msg::Effect;
use gitcompare_core::domain::{CommitId, ComparisonState, ScrollWindow};
use gitcompare_core::error::Error;

pub(super) fn scrolled(state: &mut SidebarState, window: ScrollWindow) -> Vec<Effect> {
    // A comparison's commit set is computed whole; only plain history is paginated.
    match state.comparison {
        ComparisonState::Comparing { .. } => return Vec::new(),
        ComparisonState::None => {}
    }

    let remaining = state.commit_ids.len().saturating_sub(window.last_visible);
    if remaining > state.history_load_threshold || state.history_batch_requested {
        return Vec::new();
    }

    state.history_batch_requested = true;
    vec![Effect::LoadNextHistoryBatch]
}

/// Releases the pagination guard whatever the outcome, so an empty or failed batch does not stop
/// later scrolls from asking again.
pub(super) fn history_batch_finished(
    state: &mut SidebarState,
    result: Result<(), Error>,
) -> Vec<Effect> {
    state.history_batch_requested = false;
    if let Err(error) = result {
        tracing::warn!(%error, "loading the next history batch failed");
    }
    Vec::new()
}

pub(super) fn commit_selected(state: &mut SidebarState, commit_id: CommitId) -> Vec<Effect> {
    if state.interaction.selected_commit.as_ref() == Some(&commit_id) {
        return Vec::new();
    }

    state.interaction.selected_commit = Some(commit_id.clone());
    vec![
        Effect::ChangeCommitSelection { commit_id },
        Effect::LoadChangedFilesForSelection,
    ]
}
