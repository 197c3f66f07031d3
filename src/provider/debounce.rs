//! Trailing-edge debounce over the timer capability
//!
//! Schedule-with-replace: each call cancels the pending task and starts the
//! settle window over, so a burst of viewport notifications collapses into
//! one trailing recompute. Without a timer capability the debouncer degrades
//! to running tasks synchronously.

use std::rc::Rc;

use crate::host::TaskTimer;

/// Settle window for viewport-resize recomputes
pub const RESIZE_DEBOUNCE_MS: u32 = 150;

#[derive(Clone)]
pub struct Debouncer {
    timer: Option<Rc<dyn TaskTimer>>,
    delay_ms: u32,
}

impl Debouncer {
    pub fn new(timer: Option<Rc<dyn TaskTimer>>, delay_ms: u32) -> Self {
        Self { timer, delay_ms }
    }

    /// Schedule `task` after the settle window, replacing any pending task
    pub fn schedule(&self, task: Box<dyn FnOnce()>) {
        match &self.timer {
            Some(timer) => timer.schedule(self.delay_ms, task),
            None => task(),
        }
    }

    /// Cancel the pending task, if any
    pub fn cancel(&self) {
        if let Some(timer) = &self.timer {
            timer.cancel();
        }
    }
}
