//! Entrance animation trigger that fires once per section.

/// Visible fraction at which a section counts as in view.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOnce {
    threshold: f64,
    revealed: bool,
}

impl Default for RevealOnce {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl RevealOnce {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Reports a new intersection ratio.  Returns `true` only for the
    /// observation that first reaches the threshold.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        if self.revealed || visible_fraction < self.threshold {
            return false;
        }
        self.revealed = true;
        true
    }
}
