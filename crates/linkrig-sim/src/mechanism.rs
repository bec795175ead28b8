//! 3-DOF pitch/roll/yaw parallel mechanism.
//!
//! Two mirrored horn-and-rod servos drive the platform's pitch and roll; a
//! plane-constrained yaw linkage drives its heading. The mechanism owns all
//! geometry and orientation state and calls into the stateless `linkrig-ik`
//! solvers once per joint per tick.

use nalgebra::{Rotation3, Vector3};

use linkrig_core::error::{ConfigError, IkError};
use linkrig_core::math::{lerp_vector, sin_between_vectors};
use linkrig_ik::{calc_servo_angle, solve_two_joint_planar_3d, SearchResult, ServoGeometry};

use crate::config::MechanismConfig;

/// Solved servo/joint angles for one tick, radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JointAngles {
    /// Left pitch/roll servo horn angle.
    pub left: f64,
    /// Right pitch/roll servo horn angle.
    pub right: f64,
    /// Constrained yaw joint angle.
    pub yaw: f64,
}

/// A 3-DOF parallel mechanism with cached geometry and orientation state.
///
/// Orientation vectors hold `(pitch, roll, yaw)` Euler angles in radians;
/// the platform rotation applied to anchors is `Rz(yaw) Ry(pitch) Rx(roll)`.
#[derive(Debug, Clone)]
pub struct Mechanism {
    config: MechanismConfig,
    left_servo: ServoGeometry,
    right_servo: ServoGeometry,
    yaw_pivot: Vector3<f64>,

    /// Orientation the mechanism is steering toward.
    commanded: Vector3<f64>,
    /// Orientation the platform currently holds.
    current: Vector3<f64>,
    clock: f64,

    angles: JointAngles,
    last_yaw_solve: Option<SearchResult>,
    last_failure: Option<IkError>,
    solves: u64,
    failed_solves: u64,
}

impl Mechanism {
    /// Build a mechanism from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configuration is invalid.
    pub fn new(config: MechanismConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let left_servo = ServoGeometry {
            pivot: Vector3::new(0.0, config.servo_offset, 0.0),
            horn_length: config.horn_length,
            rod_length: config.rod_length,
            horn_plane_angle: 0.0,
        };
        let right_servo = ServoGeometry {
            pivot: Vector3::new(0.0, -config.servo_offset, 0.0),
            horn_length: config.horn_length,
            rod_length: config.rod_length,
            horn_plane_angle: std::f64::consts::PI,
        };
        let yaw_pivot = Vector3::new(config.yaw_anchor_offset, 0.0, 0.0);

        Ok(Self {
            config,
            left_servo,
            right_servo,
            yaw_pivot,
            commanded: Vector3::zeros(),
            current: Vector3::zeros(),
            clock: 0.0,
            angles: JointAngles::default(),
            last_yaw_solve: None,
            last_failure: None,
            solves: 0,
            failed_solves: 0,
        })
    }

    /// Snap both the commanded and current orientation to the given
    /// `(pitch, roll, yaw)` angles.
    pub fn set_orientation(&mut self, pitch: f64, roll: f64, yaw: f64) {
        self.commanded = Vector3::new(pitch, roll, yaw);
        self.current = self.commanded;
    }

    /// Current platform orientation `(pitch, roll, yaw)`.
    pub fn orientation(&self) -> Vector3<f64> {
        self.current
    }

    /// Orientation the mechanism is steering toward.
    pub fn commanded_orientation(&self) -> Vector3<f64> {
        self.commanded
    }

    /// Most recently solved joint angles.
    pub fn joint_angles(&self) -> JointAngles {
        self.angles
    }

    /// Outcome of the latest yaw search, if any tick has run.
    pub fn last_yaw_solve(&self) -> Option<SearchResult> {
        self.last_yaw_solve
    }

    /// Failure of the latest servo solve, if the last tick was unreachable.
    pub fn last_failure(&self) -> Option<IkError> {
        self.last_failure
    }

    /// Ticks on which a full joint solve was attempted.
    pub fn solves(&self) -> u64 {
        self.solves
    }

    /// Ticks on which a servo target was unreachable and angles were frozen.
    pub fn failed_solves(&self) -> u64 {
        self.failed_solves
    }

    /// Geometry configuration the mechanism was built from.
    pub fn config(&self) -> &MechanismConfig {
        &self.config
    }

    /// Scripted motion: command a sinusoidal orientation sweep driven by the
    /// internal clock.
    pub fn simulate_motion(&mut self) {
        let amp = Vector3::from(self.config.motion_amplitude);
        self.commanded = sin_between_vectors(&-amp, &amp, self.clock, self.config.motion_speed);
    }

    /// Target tracking: command the orientation that points the platform's
    /// forward axis at `target` (world frame, z up). A pure look-at carries
    /// no roll.
    pub fn track_target(&mut self, target: &Vector3<f64>) {
        let planar = target.x.hypot(target.y);
        let pitch = -(target.z - self.config.platform_height).atan2(planar);
        let yaw = target.y.atan2(target.x);
        self.commanded = Vector3::new(pitch, 0.0, yaw);
    }

    /// Generic per-tick update: advance the clock, ease the current
    /// orientation toward the commanded one, and re-solve all joints.
    ///
    /// When a servo target is unreachable the previous valid angles are kept
    /// and the failure is recorded; tracking a momentarily out-of-reach
    /// target is an expected transient, not a fatal error.
    pub fn animate(&mut self, dt: f64) {
        self.clock += dt;
        self.current = lerp_vector(&self.current, &self.commanded, self.config.smoothing);
        self.solve_joints();
    }

    /// Solve all three joints for the current orientation.
    fn solve_joints(&mut self) {
        self.solves += 1;

        let rotation = Rotation3::from_euler_angles(
            self.current.y, // roll
            self.current.x, // pitch
            self.current.z, // yaw
        );

        let w = self.config.servo_offset;
        let z0 = self.config.platform_height;
        let left_anchor = rotation * Vector3::new(0.0, w, z0);
        let right_anchor = rotation * Vector3::new(0.0, -w, z0);
        let yaw_anchor = rotation * Vector3::new(self.config.yaw_anchor_offset, 0.0, z0);

        let solved = calc_servo_angle(&left_anchor, &self.left_servo).and_then(|left| {
            calc_servo_angle(&right_anchor, &self.right_servo).map(|right| (left, right))
        });

        let (left, right) = match solved {
            Ok(pair) => pair,
            Err(err) => {
                // Freeze the last valid angles and surface the failure.
                self.failed_solves += 1;
                self.last_failure = Some(err);
                return;
            }
        };

        let yaw_result = solve_two_joint_planar_3d(
            &(yaw_anchor - self.yaw_pivot),
            self.config.yaw_arm_length,
            self.config.yaw_rod_length,
            &self.config.search,
        );

        self.angles = JointAngles {
            left,
            right,
            yaw: yaw_result.angle,
        };
        self.last_yaw_solve = Some(yaw_result);
        self.last_failure = None;
    }
}
