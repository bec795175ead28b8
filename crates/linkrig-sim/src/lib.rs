//! Mechanism model and headless simulation driver.
//!
//! [`Mechanism`] owns the linkage geometry of a pitch/roll/yaw parallel
//! mechanism (two horn-and-rod servos plus a plane-constrained yaw linkage)
//! and calls into `linkrig-ik` once per joint per tick. [`HeadlessSimulation`]
//! is the mode-dispatching driver stepping a mechanism once per animation
//! tick without any rendering attached.

pub mod config;
pub mod driver;
mod headless;
pub mod mechanism;
pub mod stats;

pub use config::MechanismConfig;
pub use driver::{HeadlessSimulation, SimulationMode};
pub use mechanism::{JointAngles, Mechanism};
pub use stats::SimStats;
