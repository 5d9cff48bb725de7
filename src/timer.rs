//! Cancellable delayed deadlines driven by explicit timestamps.
//!
//! Event handlers feed in `performance.now()` (or any monotonic ms clock).
//! Nothing here reads a clock itself, so timing logic is fully testable.
//! Scheduling again replaces the pending deadline (last write wins).

#[derive(Debug, Clone, Default)]
pub struct Cooldown {
    /// Absolute ms timestamp at which the pending deadline fires.
    deadline: Option<f64>,
}

impl Cooldown {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Start (or restart) the window: pending until `now_ms + delay_ms`.
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64) {
        self.deadline = Some(now_ms + delay_ms.max(0.0));
    }

    #[cfg(test)]
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True while the window is open.
    pub fn is_pending(&self, now_ms: f64) -> bool {
        self.deadline.is_some_and(|d| now_ms < d)
    }

    #[cfg(test)]
    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }
}
