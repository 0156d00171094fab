//! Toolkit-independent render contract for the comparison sidebar.
//!
//! The view layer draws whatever [`project`] returns; it holds no state of its own beyond the
//! text box handle it registers with the store.

use crate::model::SidebarState;
use gitcompare_core::domain::{AheadBehind, Branch, CommitId, ComparisonMode, ComparisonState};
use rustc_hash::FxHashSet;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SidebarView {
    BranchPicker(BranchPickerView),
    CommitList(CommitListView),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BranchPickerView {
    pub filter_text: String,
    pub focused_branch: Option<String>,
    pub groups: Vec<BranchGroup>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BranchGroupKind {
    Default,
    Recent,
    Other,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BranchGroup {
    pub kind: BranchGroupKind,
    pub rows: Vec<BranchRow>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BranchRow {
    pub name: String,
    pub focused: bool,
    pub counts: Option<AheadBehind>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommitListView {
    pub filter_text: String,
    pub tabs: Option<TabBar>,
    pub rows: Vec<CommitRow>,
    pub empty_message: Option<String>,
    pub merge: Option<MergeCallToAction>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TabBar {
    pub labels: [String; 2],
    pub active: usize,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommitRow {
    pub id: CommitId,
    pub short_id: String,
    pub summary: String,
    pub author: String,
    pub selected: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MergeCallToAction {
    pub button_label: String,
    pub description: String,
    pub enabled: bool,
}

pub fn project(state: &SidebarState) -> SidebarView {
    if state.interaction.panel_visible {
        SidebarView::BranchPicker(branch_picker(state))
    } else {
        SidebarView::CommitList(commit_list(state))
    }
}

fn branch_picker(state: &SidebarState) -> BranchPickerView {
    let focused = state
        .interaction
        .focused_branch
        .as_ref()
        .map(|b| b.name.as_str());

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    if let Some(current) = state.current_branch.as_deref() {
        seen.insert(current);
    }

    let mut groups = Vec::new();
    let sources: [(BranchGroupKind, Vec<&Branch>); 3] = [
        (
            BranchGroupKind::Default,
            state.branches.default_branch.iter().collect(),
        ),
        (BranchGroupKind::Recent, state.branches.recent.iter().collect()),
        (BranchGroupKind::Other, state.branches.all.iter().collect()),
    ];
    for (kind, branches) in sources {
        let rows: Vec<BranchRow> = branches
            .into_iter()
            .filter(|&b| seen.insert(b.name.as_str()))
            .map(|b| BranchRow {
                name: b.name.clone(),
                focused: focused == Some(b.name.as_str()),
                counts: state.ahead_behind_for(b),
            })
            .collect();
        if !rows.is_empty() {
            groups.push(BranchGroup { kind, rows });
        }
    }

    BranchPickerView {
        filter_text: state.interaction.filter_text.clone(),
        focused_branch: focused.map(str::to_string),
        groups,
    }
}

fn commit_list(state: &SidebarState) -> CommitListView {
    let selected = state.interaction.selected_commit.as_ref();
    let rows: Vec<CommitRow> = state
        .commit_ids
        .iter()
        .filter_map(|id| state.commits.get(id))
        .map(|commit| CommitRow {
            id: commit.id.clone(),
            short_id: commit.id.short().to_string(),
            summary: commit.summary.clone(),
            author: commit.author.clone(),
            selected: selected == Some(&commit.id),
        })
        .collect();

    let current = state.current_branch.as_deref().unwrap_or("HEAD");
    let (tabs, empty, merge) = match &state.comparison {
        ComparisonState::None => (None, "No history".to_string(), None),
        ComparisonState::Comparing {
            branch,
            mode,
            counts,
        } => {
            let tabs = TabBar {
                labels: [
                    format!("Behind ({})", counts.behind),
                    format!("Ahead ({})", counts.ahead),
                ],
                active: mode.tab_index(),
            };
            let empty = match mode {
                ComparisonMode::Behind => format!("{current} is up to date with {}", branch.name),
                ComparisonMode::Ahead => format!("{current} is not ahead of {}", branch.name),
            };
            let merge = match mode {
                ComparisonMode::Behind => Some(merge_call_to_action(
                    current,
                    &branch.name,
                    counts.behind,
                    state.merge_in_flight.is_none(),
                )),
                ComparisonMode::Ahead => None,
            };
            (Some(tabs), empty, merge)
        }
    };

    CommitListView {
        filter_text: state.interaction.filter_text.clone(),
        tabs,
        empty_message: rows.is_empty().then_some(empty),
        rows,
        merge,
    }
}

fn merge_call_to_action(
    current: &str,
    branch: &str,
    behind: usize,
    idle: bool,
) -> MergeCallToAction {
    let description = if behind == 0 {
        format!("{current} is already up to date with {branch}")
    } else {
        let plural = if behind == 1 { "commit" } else { "commits" };
        format!("This will merge {behind} {plural} from {branch} into {current}")
    };

    MergeCallToAction {
        button_label: format!("Merge into {current}"),
        description,
        enabled: behind > 0 && idle,
    }
}
