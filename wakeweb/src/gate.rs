// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

/// What to do with a request to turn the wake lock on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Decision {
    /// Show the warning first, and only go ahead once it is confirmed.
    AskFirst,
    Proceed,
}

/// Shows a warning the first time in a session that the user turns the wake lock on.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConfirmationGate {
    warning_shown: bool,
    pending: bool,
    processing: bool,
}

impl ConfirmationGate {
    /// Handles a request to turn the wake lock on.
    pub fn request(&mut self) -> Decision {
        if self.warning_shown {
            Decision::Proceed
        } else {
            self.pending = true;
            Decision::AskFirst
        }
    }

    /// Returns whether the warning dialog should be visible.
    pub fn is_visible(&self) -> bool {
        self.pending
    }

    /// Returns whether a confirmed request is still in progress.
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Handles the user confirming the warning.
    ///
    /// Returns true if the pending request should now go ahead, in which case `finish` must be
    /// called once it completes.
    pub fn confirm(&mut self) -> bool {
        if !self.pending || self.processing {
            return false;
        }
        self.warning_shown = true;
        self.processing = true;
        true
    }

    /// Hides the dialog after a confirmed request has completed, whether or not it succeeded.
    pub fn finish(&mut self) {
        self.processing = false;
        self.pending = false;
    }

    /// Handles the user dismissing the warning without confirming it.
    pub fn close(&mut self) {
        if !self.processing {
            self.pending = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asks_first_time_only() {
        let mut gate = ConfirmationGate::default();
        assert!(!gate.is_visible());

        assert_eq!(gate.request(), Decision::AskFirst);
        assert!(gate.is_visible());
        assert!(!gate.is_processing());

        assert!(gate.confirm());
        assert!(gate.is_visible());
        assert!(gate.is_processing());
        gate.finish();
        assert!(!gate.is_visible());
        assert!(!gate.is_processing());

        assert_eq!(gate.request(), Decision::Proceed);
        assert!(!gate.is_visible());
    }

    #[test]
    fn confirm_only_once_while_processing() {
        let mut gate = ConfirmationGate::default();
        gate.request();
        assert!(gate.confirm());
        assert!(!gate.confirm());
        gate.finish();
        assert!(!gate.confirm());
    }

    #[test]
    fn close_discards_pending_request() {
        let mut gate = ConfirmationGate::default();
        gate.request();
        gate.close();
        assert!(!gate.is_visible());
        assert!(!gate.confirm());

        // Closing doesn't count as having seen the warning.
        assert_eq!(gate.request(), Decision::AskFirst);
    }

    #[test]
    fn close_ignored_while_processing() {
        let mut gate = ConfirmationGate::default();
        gate.request();
        gate.confirm();
        gate.close();
        assert!(gate.is_visible());
        assert!(gate.is_processing());
    }
}
