use crate::model::{ComparisonSnapshot, InputHandle};
use gitcompare_core::domain::{Branch, CommitId, ScrollWindow};
use gitcompare_core::error::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectionSource {
    /// Keyboard navigation through the filtered branch list.
    Filter,
    /// An explicit click on a branch row.
    Pointer,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    Enter,
    Escape,
    ArrowUp,
    ArrowDown,
    Other,
}

#[derive(Debug)]
pub enum Msg {
    Activated,
    Teardown,

    FilterTextChanged(String),
    SelectionChanged {
        branch: Option<Branch>,
        source: SelectionSource,
    },
    KeyDown(Key),

    InputFocused,
    InputBlurred,
    InputAttached(InputHandle),
    InputDetached,

    TabClicked(usize),
    MergeClicked,
    MergeFinished {
        branch: String,
        result: Result<(), Error>,
    },
    ComparisonSnapshotPushed(Box<ComparisonSnapshot>),

    Scrolled(ScrollWindow),
    HistoryBatchFinished(Result<(), Error>),
    CommitSelected(CommitId),
}
