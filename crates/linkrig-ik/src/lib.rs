//! Inverse kinematics solvers for servo-horn linkages.
//!
//! Three independent, stateless geometric solvers convert Cartesian targets
//! into joint angles under different kinematic constraints:
//!
//! - [`calc_servo_angle`]: closed-form angle for a single servo horn driving
//!   a connecting rod to a 3D target.
//! - [`solve_two_joint_planar`]: closed-form two-link planar arm, returning
//!   both elbow branches.
//! - [`solve_two_joint_planar_3d`]: first joint constrained to a plane,
//!   second link free in 3D; solved by a coarse-to-fine angular search.
//!
//! # Architecture
//!
//! ```text
//! target point ──► solver ──► joint angle(s) or IkError
//! ```
//!
//! Every solver is a pure mapping from its arguments to a result: no caching,
//! no shared state, and identical inputs always produce identical outputs.
//! Callers (the mechanism layer) own all geometry across ticks.

pub mod planar;
pub mod search;
pub mod servo;

pub use planar::{solve_two_joint_planar, PlanarSolution};
pub use search::{solve_two_joint_planar_3d, SearchConfig, SearchResult};
pub use servo::{calc_servo_angle, ServoGeometry};
