//! Visibility lifecycle for the order details panel.
//!
//! The panel distinguishes being *open* (the requested visibility) from
//! being *mounted* (still part of the frame output). On close the panel
//! stays mounted for [`EXIT_DELAY`] so the exit animation can finish, then
//! unmounts. Re-opening within the delay cancels the pending unmount.
//!
//! The clock is always passed in by the caller, so the machine runs the
//! same under test as in the frame loop.

use std::time::{Duration, Instant};

/// How long a closed panel stays mounted while the exit animation plays.
pub const EXIT_DELAY: Duration = Duration::from_millis(320);

/// Two-flag visibility machine with a cancellable deferred unmount.
///
/// Invariant: `open` implies `mounted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLifecycle {
    open: bool,
    mounted: bool,
    unmount_at: Option<Instant>,
}

impl Default for PanelLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelLifecycle {
    /// A closed, unmounted panel.
    pub fn new() -> Self {
        Self {
            open: false,
            mounted: false,
            unmount_at: None,
        }
    }

    /// The requested visibility.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the panel is part of the frame output at all.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Apply an open/close request.
    ///
    /// Opening mounts immediately and cancels any pending unmount. Closing
    /// keeps the panel mounted and arms the unmount deadline. Repeated
    /// requests for the current state are no-ops, so a second close never
    /// extends the deadline.
    pub fn set_open(&mut self, open: bool, now: Instant) {
        if open == self.open {
            return;
        }
        self.open = open;
        if open {
            self.mounted = true;
            self.unmount_at = None;
        } else {
            self.unmount_at = Some(now + EXIT_DELAY);
        }
    }

    /// Advance the machine to `now`.
    ///
    /// Returns `true` if the panel unmounted on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.open {
            return false;
        }
        match self.unmount_at {
            Some(deadline) if now >= deadline => {
                self.mounted = false;
                self.unmount_at = None;
                true
            }
            _ => false,
        }
    }

    /// Time remaining until the pending unmount, if one is armed.
    pub fn time_until_unmount(&self, now: Instant) -> Option<Duration> {
        self.unmount_at
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
