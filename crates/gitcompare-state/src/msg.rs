mod effect;
mod message;

pub use effect::Effect;
pub use message::{Key, Msg, SelectionSource};

use crate::model::InputHandle;

/// Notifications from the store to the view layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StoreEvent {
    StateChanged,
    FocusFilterInput { handle: InputHandle },
    BlurFilterInput,
    MoveBranchListSelection { delta: isize },
}
