//! Cancellable debounce for search inputs.
//!
//! Each call to [`Debouncer::schedule`] bumps a generation counter and sleeps
//! for the delay; the action runs only if its generation is still current
//! when the timer fires. Newer input or an explicit `cancel` (wired to page
//! teardown via `on_cleanup`) therefore invalidates every pending timer, so
//! at most one refetch is pending per filter field.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Delay between the last keystroke and the query update.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Clone, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` after `delay` unless a newer schedule or a cancel
    /// supersedes it first.
    pub fn schedule(&self, delay: Duration, action: impl FnOnce() + 'static) {
        let scheduled = self.begin();
        #[cfg(feature = "csr")]
        {
            let debouncer = self.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                if debouncer.is_current(scheduled) {
                    action();
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (delay, action, scheduled);
        }
    }

    /// Invalidate every pending timer.
    pub fn cancel(&self) {
        self.begin();
    }

    /// Start a new generation, superseding all earlier ones.
    fn begin(&self) -> u64 {
        let next = self.generation.load(Ordering::Relaxed) + 1;
        self.generation.store(next, Ordering::Relaxed);
        next
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::Relaxed) == generation
    }
}
