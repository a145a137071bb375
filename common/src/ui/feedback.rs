//! Confirmation state of the copy button.

use super::sequence::{RequestSequence, Ticket};

/// How long the copy button shows its confirmation.
pub const COPY_FEEDBACK_MS: u32 = 2_000;

/// Whether the copy button currently shows its confirmation. Each copy
/// restarts the timer; only the newest timer may clear it.
#[derive(Clone, Debug, Default)]
pub struct CopyFeedback {
    copied: bool,
    timers: RequestSequence,
}

impl CopyFeedback {
    /// Shows the confirmation and returns the ticket of its reset timer.
    pub fn confirm(&mut self) -> Ticket {
        self.copied = true;
        self.timers.issue()
    }

    /// A reset timer fired. Returns true when the label changed.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        if !self.timers.is_current(ticket) || !self.copied {
            return false;
        }
        self.copied = false;
        true
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }
}
