use crate::model::{InputHandle, SidebarState};
use crate::msg::Effect;

pub(super) fn input_focused(state: &mut SidebarState) -> Vec<Effect> {
    state.interaction.panel_visible = true;
    state.filter_input.focus_pending = true;
    transfer_pending_focus(state)
}

pub(super) fn input_blurred(state: &mut SidebarState) -> Vec<Effect> {
    state.interaction.panel_visible = false;
    state.filter_input.focus_pending = false;
    Vec::new()
}

pub(super) fn input_attached(state: &mut SidebarState, handle: InputHandle) -> Vec<Effect> {
    state.filter_input.handle = Some(handle);
    transfer_pending_focus(state)
}

pub(super) fn input_detached(state: &mut SidebarState) -> Vec<Effect> {
    state.filter_input.handle = None;
    Vec::new()
}

pub(super) fn teardown(state: &mut SidebarState) -> Vec<Effect> {
    state.filter_input.handle = None;
    state.filter_input.focus_pending = false;
    state.torn_down = true;
    tracing::info!(workdir = %state.repo.workdir.display(), "comparison sidebar torn down");
    vec![Effect::DisposeScheduler]
}

/// Focus moves to the filter input once the picker is visible and its handle is attached,
/// whichever happens last.
fn transfer_pending_focus(state: &mut SidebarState) -> Vec<Effect> {
    if !state.filter_input.focus_pending || !state.interaction.panel_visible {
        return Vec::new();
    }
    let Some(handle) = state.filter_input.handle else {
        return Vec::new();
    };

    state.filter_input.focus_pending = false;
    vec![Effect::FocusFilterInput { handle }]
}
