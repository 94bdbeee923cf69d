use super::Workbench;
use crate::kernel::{Action, HideToken};
use std::time::Instant;

impl Workbench {
    /// Fire timers that are due at `now` (called by the main loop).
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        changed |= self.poll_hide_timers(now);
        changed
    }

    /// Earliest pending timer deadline, so the main loop can bound its poll.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.hide_timers.iter().map(|(_, at)| *at).min()
    }

    fn poll_hide_timers(&mut self, now: Instant) -> bool {
        if self.hide_timers.is_empty() {
            return false;
        }

        let mut due: Vec<HideToken> = Vec::new();
        self.hide_timers.retain(|(token, at)| {
            if *at <= now {
                due.push(*token);
                false
            } else {
                true
            }
        });

        let mut changed = false;
        for token in due {
            changed |= self.dispatch_kernel(Action::DropdownHideElapsed(token));
        }
        changed
    }
}
