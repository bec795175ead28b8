//! Headless simulation driver.
//!
//! A three-state machine selects which mechanism update runs each tick.
//! Idle performs no mechanism update, `SimulateMotion` runs the scripted
//! sweep, `TrackTarget` steers toward the last externally set target. After
//! branching, the generic animate step always runs.

use nalgebra::Vector3;

use crate::mechanism::Mechanism;
use crate::stats::SimStats;

/// What the mechanism should do on each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulationMode {
    /// No mechanism update; the platform holds its orientation.
    #[default]
    Idle,
    /// Scripted sinusoidal motion.
    SimulateMotion,
    /// Steer toward the last set target position.
    TrackTarget,
}

/// Headless simulation stepping one mechanism per animation tick.
///
/// Owns the mode flag and the last-known target; invoked cooperatively,
/// once per external tick.
#[derive(Debug)]
pub struct HeadlessSimulation {
    mechanism: Mechanism,
    mode: SimulationMode,
    target: Vector3<f64>,
    stats: SimStats,
}

impl HeadlessSimulation {
    /// Wrap a mechanism, starting in [`SimulationMode::Idle`] with a reset
    /// orientation.
    pub fn new(mut mechanism: Mechanism) -> Self {
        mechanism.set_orientation(0.0, 0.0, 0.0);
        Self {
            mechanism,
            mode: SimulationMode::Idle,
            target: Vector3::zeros(),
            stats: SimStats::new(),
        }
    }

    pub fn set_mode(&mut self, mode: SimulationMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> SimulationMode {
        self.mode
    }

    /// Set the world-frame position tracked in [`SimulationMode::TrackTarget`].
    pub fn set_target_position(&mut self, target: Vector3<f64>) {
        self.target = target;
    }

    pub fn target_position(&self) -> Vector3<f64> {
        self.target
    }

    /// Snap the mechanism back to the neutral orientation.
    pub fn reset_orientation(&mut self) {
        self.mechanism.set_orientation(0.0, 0.0, 0.0);
    }

    pub fn mechanism(&self) -> &Mechanism {
        &self.mechanism
    }

    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Advance the simulation by one tick of `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        match self.mode {
            SimulationMode::Idle => {}
            SimulationMode::SimulateMotion => self.mechanism.simulate_motion(),
            SimulationMode::TrackTarget => {
                let target = self.target;
                self.mechanism.track_target(&target);
            }
        }

        self.mechanism.animate(dt);
        self.stats.record(&self.mechanism);
    }
}
