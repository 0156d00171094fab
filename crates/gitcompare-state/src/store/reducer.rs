use crate::model::SidebarState;
use crate::msg::{Effect, Msg};

mod commit_list;
mod comparison;
mod filter_selection;
mod panel;

pub use comparison::reconcile;

pub(super) fn reduce(state: &mut SidebarState, msg: Msg) -> Vec<Effect> {
    if state.torn_down {
        tracing::debug!(?msg, "ignoring message after teardown");
        return Vec::new();
    }

    match msg {
        Msg::Activated => comparison::activate(state),
        Msg::Teardown => panel::teardown(state),

        Msg::FilterTextChanged(text) => filter_selection::filter_text_changed(state, text),
        Msg::SelectionChanged { branch, source } => {
            filter_selection::selection_changed(state, branch, source)
        }
        Msg::KeyDown(key) => filter_selection::key_down(state, key),

        Msg::InputFocused => panel::input_focused(state),
        Msg::InputBlurred => panel::input_blurred(state),
        Msg::InputAttached(handle) => panel::input_attached(state, handle),
        Msg::InputDetached => panel::input_detached(state),

        Msg::TabClicked(index) => comparison::tab_clicked(state, index),
        Msg::MergeClicked => comparison::merge_clicked(state),
        Msg::MergeFinished { branch, result } => comparison::merge_finished(state, branch, result),
        Msg::ComparisonSnapshotPushed(snapshot) => comparison::snapshot_pushed(state, *snapshot),

        Msg::Scrolled(window) => commit_list::scrolled(state, window),
        Msg::HistoryBatchFinished(result) => commit_list::history_batch_finished(state, result),
        Msg::CommitSelected(commit_id) => commit_list::commit_selected(state, commit_id),
    }
}
