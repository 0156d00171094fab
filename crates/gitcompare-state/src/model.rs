use crate::settings::SidebarSettings;
use gitcompare_core::domain::*;
use rustc_hash::FxHashMap;

#[derive(Clone, Debug)]
pub struct SidebarState {
    pub repo: RepoSpec,
    pub activated: bool,
    pub torn_down: bool,

    pub comparison: ComparisonState,
    pub interaction: InteractionState,
    pub filter_input: FilterInput,

    pub current_branch: Option<String>,
    pub branches: BranchSets,
    pub commit_ids: Vec<CommitId>,
    pub commits: FxHashMap<CommitId, Commit>,
    pub ahead_behind: FxHashMap<CommitId, AheadBehind>,

    pub history_load_threshold: usize,
    pub history_batch_requested: bool,
    pub merge_in_flight: Option<String>,
}

impl SidebarState {
    pub fn new(repo: RepoSpec, settings: &SidebarSettings) -> Self {
        Self {
            repo,
            activated: false,
            torn_down: false,
            comparison: ComparisonState::None,
            interaction: InteractionState::default(),
            filter_input: FilterInput::default(),
            current_branch: None,
            branches: BranchSets::default(),
            commit_ids: Vec::new(),
            commits: FxHashMap::default(),
            ahead_behind: FxHashMap::default(),
            history_load_threshold: settings.history_load_threshold,
            history_batch_requested: false,
            merge_in_flight: None,
        }
    }

    pub fn ahead_behind_for(&self, branch: &Branch) -> Option<AheadBehind> {
        self.ahead_behind.get(&branch.tip).copied()
    }
}

/// Interaction state owned by the sidebar itself.
///
/// `focused_branch` and `selected_commit` are lookup keys into collections owned by the
/// coordinator; the sidebar never creates or drops the entities they name.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InteractionState {
    pub focused_branch: Option<Branch>,
    pub filter_text: String,
    pub panel_visible: bool,
    pub selected_commit: Option<CommitId>,
}

/// Opaque handle to the branch filter text box, issued by the view layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct InputHandle(pub u64);

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FilterInput {
    pub handle: Option<InputHandle>,
    pub focus_pending: bool,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BranchSets {
    pub default_branch: Option<Branch>,
    pub recent: Vec<Branch>,
    pub all: Vec<Branch>,
}

/// Everything the coordinator pushes in after recomputing a comparison or loading history.
#[derive(Clone, Debug, Default)]
pub struct ComparisonSnapshot {
    pub comparison: ComparisonState,
    pub current_branch: Option<String>,
    pub branches: BranchSets,
    pub commit_ids: Vec<CommitId>,
    pub commits: FxHashMap<CommitId, Commit>,
    pub ahead_behind: FxHashMap<CommitId, AheadBehind>,
}
