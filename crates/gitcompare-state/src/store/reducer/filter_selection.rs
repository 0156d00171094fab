use crate::model::SidebarState;
use crate::msg::{Effect, Key, SelectionSource};
use gitcompare_core::domain::{Branch, CompareAction, ComparisonMode};

pub(super) fn filter_text_changed(state: &mut SidebarState, text: String) -> Vec<Effect> {
    state.interaction.filter_text = text;
    Vec::new()
}

pub(super) fn selection_changed(
    state: &mut SidebarState,
    branch: Option<Branch>,
    source: SelectionSource,
) -> Vec<Effect> {
    let Some(branch) = branch else {
        state.interaction.focused_branch = None;
        return Vec::new();
    };

    match source {
        SelectionSource::Filter => {
            state.interaction.focused_branch = Some(branch);
            Vec::new()
        }
        SelectionSource::Pointer => compare_with(state, branch),
    }
}

pub(super) fn key_down(state: &mut SidebarState, key: Key) -> Vec<Effect> {
    match key {
        Key::Enter => {
            let mut effects = if state.interaction.filter_text.is_empty() {
                clear_filter_state(state)
            } else {
                match state.interaction.focused_branch.clone() {
                    // Typed text that matches nothing cannot name a comparison.
                    None => vec![Effect::ExecuteComparison(CompareAction::History)],
                    Some(branch) => compare_with(state, branch),
                }
            };
            effects.push(Effect::BlurFilterInput);
            effects
        }
        Key::Escape => {
            let mut effects = clear_filter_state(state);
            effects.push(Effect::BlurFilterInput);
            effects
        }
        Key::ArrowDown | Key::ArrowUp if state.interaction.panel_visible => {
            let delta = if key == Key::ArrowDown { 1 } else { -1 };
            vec![Effect::MoveBranchListSelection { delta }]
        }
        Key::ArrowDown | Key::ArrowUp | Key::Other => Vec::new(),
    }
}

fn compare_with(state: &mut SidebarState, branch: Branch) -> Vec<Effect> {
    state.interaction.filter_text = branch.name.clone();
    state.interaction.focused_branch = Some(branch.clone());
    vec![Effect::ExecuteComparison(CompareAction::Branch {
        branch,
        mode: ComparisonMode::Behind,
    })]
}

fn clear_filter_state(state: &mut SidebarState) -> Vec<Effect> {
    state.interaction.filter_text.clear();
    state.interaction.focused_branch = None;
    vec![Effect::ExecuteComparison(CompareAction::History)]
}
