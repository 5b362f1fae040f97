//! Cancellable deferred callbacks.
//!
//! Each deferred behavior in the chrome (auto-close after a mobile
//! navigation, the initial scroll-to-fragment, the debounced resize) owns
//! its own slot, so a superseding action cancels the stale callback instead
//! of letting it fire over newer state.

use gloo::timers::callback::Timeout;

/// A single-purpose timer. Scheduling replaces (and cancels) whatever was
/// pending in the slot.
#[derive(Default)]
pub struct TimerSlot {
    pending: Option<Timeout>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        self.cancel();
        self.pending = Some(Timeout::new(delay_ms, callback));
    }

    /// Cancels the pending callback. Cancelling an already-fired timeout is
    /// a no-op.
    pub fn cancel(&mut self) {
        if let Some(timeout) = self.pending.take() {
            timeout.cancel();
        }
    }
}

/// Coalesces rapid repeated triggers: only the last call within the window
/// runs. Wired to the window resize listener.
pub struct Debounce {
    delay_ms: u32,
    slot: TimerSlot,
}

impl Debounce {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            slot: TimerSlot::new(),
        }
    }

    pub fn trigger(&mut self, callback: impl FnOnce() + 'static) {
        self.slot.schedule(self.delay_ms, callback);
    }
}
