//! Cancellable debounce primitive for the tag search box.
//!
//! DESIGN
//! ======
//! The gate is a monotonically increasing token counter: arming it hands out
//! a fresh token and invalidates every earlier one. The async scheduler
//! sleeps, then fires only if its token is still current — so of all the
//! keystrokes in a burst, only the last one's search runs. Keeping the token
//! logic separate from the timer makes the cancel semantics testable without
//! waiting on real time.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Quiet period after the last keystroke before a search is issued.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Shared cancellation gate. Cloning yields another handle to the same gate.
#[derive(Clone, Default)]
pub struct DebounceGate {
    current: Arc<AtomicU64>,
}

impl DebounceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate all outstanding tokens and hand out a fresh one.
    pub fn arm(&self) -> u64 {
        self.current.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Invalidate all outstanding tokens without issuing a new one.
    pub fn cancel(&self) {
        self.current.fetch_add(1, Ordering::Relaxed);
    }

    /// Whether `token` is still the most recently armed one.
    pub fn is_current(&self, token: u64) -> bool {
        self.current.load(Ordering::Relaxed) == token
    }

    /// Run `action` if `token` is still current, reporting whether it fired.
    /// This is the step a timer performs when its quiet period expires; each
    /// armed token is given to exactly one timer, so at most one action runs
    /// per keystroke burst.
    pub fn try_fire(&self, token: u64, action: impl FnOnce()) -> bool {
        if self.is_current(token) {
            action();
            true
        } else {
            false
        }
    }
}

/// Run `action` after `delay_ms` of quiet, unless the gate is re-armed or
/// cancelled first.
#[cfg(feature = "hydrate")]
pub fn schedule(gate: &DebounceGate, delay_ms: u64, action: impl FnOnce() + 'static) {
    let token = gate.arm();
    let gate = gate.clone();
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(delay_ms)).await;
        gate.try_fire(token, action);
    });
}

/// Server-side stub: there is no browser event loop, so nothing ever fires.
#[cfg(not(feature = "hydrate"))]
pub fn schedule(gate: &DebounceGate, _delay_ms: u64, _action: impl FnOnce() + 'static) {
    let _ = gate.arm();
}
