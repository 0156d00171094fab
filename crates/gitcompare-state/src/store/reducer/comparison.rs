use crate::model::{ComparisonSnapshot, InteractionState, SidebarState};
use crate::msg::Effect;
use gitcompare_core::domain::{CompareAction, ComparisonMode, ComparisonState};
use gitcompare_core::error::Error;

/// Reconciles local interaction state with a comparison state pushed by the coordinator.
///
/// - Moving between plain history and a comparison, either way, clears the filter text and the
///   focused branch.
/// - Switching to a different comparison branch shows that branch's name in the filter.
/// - A change of direction or counts on the same branch leaves the interaction state alone.
pub fn reconcile(
    interaction: &InteractionState,
    old: &ComparisonState,
    new: &ComparisonState,
) -> InteractionState {
    let mut next = interaction.clone();

    match (old, new) {
        (ComparisonState::None, ComparisonState::None) => {}
        (ComparisonState::Comparing { .. }, ComparisonState::None)
        | (ComparisonState::None, ComparisonState::Comparing { .. }) => {
            next.filter_text.clear();
            next.focused_branch = None;
        }
        (
            ComparisonState::Comparing {
                branch: old_branch, ..
            },
            ComparisonState::Comparing { branch, .. },
        ) => {
            if old_branch.name != branch.name {
                next.filter_text = branch.name.clone();
            }
        }
    }

    next
}

pub(super) fn activate(state: &mut SidebarState) -> Vec<Effect> {
    if state.activated {
        tracing::debug!("sidebar already activated");
        return Vec::new();
    }

    state.activated = true;
    tracing::info!(workdir = %state.repo.workdir.display(), "initializing comparison sidebar");
    vec![Effect::InitializeComparison]
}

pub(super) fn snapshot_pushed(state: &mut SidebarState, snapshot: ComparisonSnapshot) -> Vec<Effect> {
    let ComparisonSnapshot {
        comparison,
        current_branch,
        branches,
        commit_ids,
        commits,
        ahead_behind,
    } = snapshot;

    state.interaction = reconcile(&state.interaction, &state.comparison, &comparison);

    let kind_changed = state.comparison.is_comparing() != comparison.is_comparing();
    if kind_changed || commit_ids.len() != state.commit_ids.len() {
        state.history_batch_requested = false;
    }

    state.comparison = comparison;
    state.current_branch = current_branch;
    state.branches = branches;
    state.commit_ids = commit_ids;
    state.commits = commits;
    state.ahead_behind = ahead_behind;

    Vec::new()
}

pub(super) fn tab_clicked(state: &mut SidebarState, index: usize) -> Vec<Effect> {
    let ComparisonState::Comparing { branch, .. } = &state.comparison else {
        tracing::warn!(index, "tab click while viewing history; ignoring");
        return Vec::new();
    };
    let Some(mode) = ComparisonMode::from_tab_index(index) else {
        tracing::warn!(index, "tab index out of range; ignoring");
        return Vec::new();
    };

    vec![Effect::ExecuteComparison(CompareAction::Branch {
        branch: branch.clone(),
        mode,
    })]
}

pub(super) fn merge_clicked(state: &mut SidebarState) -> Vec<Effect> {
    let ComparisonState::Comparing { branch, .. } = &state.comparison else {
        tracing::warn!("merge requested while viewing history; ignoring");
        return Vec::new();
    };
    if let Some(pending) = &state.merge_in_flight {
        tracing::debug!(branch = %pending, "merge already in flight");
        return Vec::new();
    }

    let branch = branch.name.clone();
    tracing::info!(%branch, "merging comparison branch into current branch");
    state.merge_in_flight = Some(branch.clone());
    vec![Effect::MergeBranch { branch }]
}

/// The sidebar returns to history whether or not the merge succeeded; reporting the outcome is
/// the coordinator's job.
pub(super) fn merge_finished(
    state: &mut SidebarState,
    branch: String,
    result: Result<(), Error>,
) -> Vec<Effect> {
    state.merge_in_flight = None;
    match result {
        Ok(()) => tracing::info!(%branch, "merge finished"),
        Err(error) => tracing::warn!(%branch, %error, "merge failed"),
    }

    state.interaction.filter_text.clear();
    vec![Effect::ExecuteComparison(CompareAction::History)]
}
