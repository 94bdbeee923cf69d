use std::time::Duration;

use super::state::HideToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Dispatch `Action::DropdownHideElapsed(token)` once `after` has passed.
    ScheduleDropdownHide { token: HideToken, after: Duration },
    CancelDropdownHide { token: HideToken },
    Quit,
}
