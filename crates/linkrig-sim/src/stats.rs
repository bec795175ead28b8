//! Simulation statistics tracking.
//!
//! [`SimStats`] records cumulative counters across ticks: joint solves,
//! unreachable-target failures, and the worst yaw search error seen.

use crate::mechanism::Mechanism;

/// Cumulative statistics across simulation ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct SimStats {
    /// Ticks recorded.
    pub ticks: u64,
    /// Joint solves attempted by the mechanism.
    pub solves: u64,
    /// Ticks on which a servo target was unreachable.
    pub failed_solves: u64,
    /// Largest yaw search error observed, if any yaw solve ran.
    pub worst_yaw_error: Option<f64>,
}

impl Default for SimStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SimStats {
    /// Create empty stats.
    pub const fn new() -> Self {
        Self {
            ticks: 0,
            solves: 0,
            failed_solves: 0,
            worst_yaw_error: None,
        }
    }

    /// Fraction of attempted solves that failed, if any ran.
    pub fn failure_rate(&self) -> Option<f64> {
        if self.solves == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        Some(self.failed_solves as f64 / self.solves as f64)
    }

    /// Record the mechanism's state after one tick.
    pub fn record(&mut self, mechanism: &Mechanism) {
        self.ticks += 1;
        self.solves = mechanism.solves();
        self.failed_solves = mechanism.failed_solves();
        if let Some(result) = mechanism.last_yaw_solve() {
            let worst = self.worst_yaw_error.get_or_insert(result.error);
            if result.error > *worst {
                *worst = result.error;
            }
        }
    }

    /// Reset all statistics.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
