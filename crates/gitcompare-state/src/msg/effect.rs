use crate::model::InputHandle;
use gitcompare_core::domain::{CommitId, CompareAction};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Effect {
    InitializeComparison,
    ExecuteComparison(CompareAction),
    MergeBranch {
        branch: String,
    },
    LoadNextHistoryBatch,
    ChangeCommitSelection {
        commit_id: CommitId,
    },
    /// Routed through the throttled scheduler rather than run immediately.
    LoadChangedFilesForSelection,

    FocusFilterInput {
        handle: InputHandle,
    },
    BlurFilterInput,
    MoveBranchListSelection {
        delta: isize,
    },

    DisposeScheduler,
}
