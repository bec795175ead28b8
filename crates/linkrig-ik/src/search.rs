//! Coarse-to-fine angular search for the plane-constrained two-link case.
//!
//! The first joint rotates only within a fixed plane while the second link
//! swings freely in 3D; no closed form is assumed. The solver sweeps evenly
//! spaced candidate angles over a window that shrinks around the best
//! estimate each iteration, minimizing the rod-length mismatch.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use linkrig_core::error::ConfigError;
use linkrig_core::math::linspace;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_tolerance() -> f64 {
    1e-5
}
const fn default_samples() -> usize {
    100
}
const fn default_max_iterations() -> u32 {
    10
}
const fn default_shrink() -> f64 {
    4.0
}

// ---------------------------------------------------------------------------
// SearchConfig
// ---------------------------------------------------------------------------

/// Configuration for the coarse-to-fine search.
///
/// Defaults reproduce the tuning this solver has always shipped with
/// (tolerance 1e-5, 100 samples, 10 iterations, shrink 4); none of them is
/// known to be optimal, so they stay adjustable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Stop once the best length mismatch drops to this value (default 1e-5).
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Candidate angles evaluated per refinement sweep (default 100).
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Maximum refinement sweeps (default 10).
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Window shrink factor applied after each sweep (default 4).
    #[serde(default = "default_shrink")]
    pub shrink: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            samples: default_samples(),
            max_iterations: default_max_iterations(),
            shrink: default_shrink(),
        }
    }
}

impl SearchConfig {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        if self.samples < 2 {
            return Err(ConfigError::InvalidSamples(self.samples));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidIterationCap);
        }
        if self.shrink <= 1.0 {
            return Err(ConfigError::InvalidShrink(self.shrink));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SearchResult
// ---------------------------------------------------------------------------

/// Outcome of one constrained-plane solve.
///
/// The solve is best effort: `angle` and `error` are always populated, and
/// `converged` tells the caller whether `error` reached the tolerance within
/// the iteration budget. Callers needing a reachability guarantee must
/// inspect `error`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Best first-joint angle found, radians.
    pub angle: f64,
    /// Achieved length mismatch `|l - distance|` at `angle`.
    pub error: f64,
    /// Refinement sweeps performed.
    pub iterations: u32,
    /// Whether `error <= tolerance`.
    pub converged: bool,
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Solve the constrained first-joint angle so that a free link of length `l`
/// spans from the constrained link's tip to `v`.
///
/// `v` is the target relative to the linkage origin, `h` the length of the
/// link confined to its rotation plane. Input axes are permuted into the
/// solver's internal convention (`(v.z, v.x, v.y)`); the constrained tip
/// traces `(h cos(theta), h sin(theta), 0)` for `theta` in `[0, pi]`.
///
/// Deterministic: uniform sampling, no randomness. Cost is bounded by
/// `max_iterations * samples` distance evaluations.
#[must_use]
pub fn solve_two_joint_planar_3d(
    v: &Vector3<f64>,
    h: f64,
    l: f64,
    config: &SearchConfig,
) -> SearchResult {
    let a = Vector3::new(v.z, v.x, v.y);

    let min_angle = 0.0;
    let max_angle = std::f64::consts::PI;

    let mut best_angle = max_angle;
    let mut window = max_angle - min_angle;
    let mut best_error = f64::INFINITY;
    let mut iterations = 0;

    while best_error > config.tolerance && iterations < config.max_iterations {
        let lo = (best_angle - window).max(min_angle);
        let hi = (best_angle + window).min(max_angle);

        for theta in linspace(lo, hi, config.samples, false) {
            let tip = Vector3::new(h * theta.cos(), h * theta.sin(), 0.0);
            let error = (l - (a - tip).norm()).abs();
            if error < best_error {
                best_angle = theta;
                best_error = error;
            }
        }

        window /= config.shrink;
        iterations += 1;
    }

    SearchResult {
        angle: best_angle,
        error: best_error,
        iterations,
        converged: best_error <= config.tolerance,
    }
}
