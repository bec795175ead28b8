//! Mechanism geometry and motion configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use linkrig_core::error::ConfigError;
use linkrig_ik::SearchConfig;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_servo_offset() -> f64 {
    1.0
}
const fn default_platform_height() -> f64 {
    2.0
}
const fn default_horn_length() -> f64 {
    1.0
}
const fn default_rod_length() -> f64 {
    2.0
}
const fn default_yaw_anchor_offset() -> f64 {
    1.0
}
const fn default_yaw_arm_length() -> f64 {
    1.0
}
fn default_yaw_rod_length() -> f64 {
    // Spans the yaw linkage exactly at the neutral orientation with the
    // default geometry: sqrt(platform_height^2 + yaw_arm_length^2).
    5.0_f64.sqrt()
}
const fn default_smoothing() -> f64 {
    0.25
}
const fn default_motion_amplitude() -> [f64; 3] {
    [0.3, 0.2, 0.4]
}
const fn default_motion_speed() -> f64 {
    1.0
}

// ---------------------------------------------------------------------------
// MechanismConfig
// ---------------------------------------------------------------------------

/// Static geometry and motion parameters for a 3-DOF mechanism.
///
/// All lengths share one unit; angles are radians. The pitch/roll servos sit
/// mirrored at `(0, +-servo_offset, 0)` with their rod anchors directly above
/// on the moving platform; the yaw linkage pivot sits at
/// `(yaw_anchor_offset, 0, 0)` below its platform anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MechanismConfig {
    /// Lateral distance of each pitch/roll servo pivot from the center line.
    #[serde(default = "default_servo_offset")]
    pub servo_offset: f64,

    /// Height of the moving platform above the servo plane at rest.
    #[serde(default = "default_platform_height")]
    pub platform_height: f64,

    /// Servo horn arm length.
    #[serde(default = "default_horn_length")]
    pub horn_length: f64,

    /// Connecting rod length for the pitch/roll servos.
    #[serde(default = "default_rod_length")]
    pub rod_length: f64,

    /// Forward offset of the yaw rod anchor on the platform.
    #[serde(default = "default_yaw_anchor_offset")]
    pub yaw_anchor_offset: f64,

    /// Length of the yaw link constrained to its rotation plane.
    #[serde(default = "default_yaw_arm_length")]
    pub yaw_arm_length: f64,

    /// Length of the free yaw connecting rod.
    #[serde(default = "default_yaw_rod_length")]
    pub yaw_rod_length: f64,

    /// Per-tick interpolation factor toward the commanded orientation,
    /// in `(0, 1]`. `1.0` snaps immediately.
    #[serde(default = "default_smoothing")]
    pub smoothing: f64,

    /// Scripted-motion amplitude per axis `[pitch, roll, yaw]`, radians.
    #[serde(default = "default_motion_amplitude")]
    pub motion_amplitude: [f64; 3],

    /// Scripted-motion angular speed multiplier.
    #[serde(default = "default_motion_speed")]
    pub motion_speed: f64,

    /// Yaw search parameters.
    #[serde(default)]
    pub search: SearchConfig,
}

impl Default for MechanismConfig {
    fn default() -> Self {
        Self {
            servo_offset: default_servo_offset(),
            platform_height: default_platform_height(),
            horn_length: default_horn_length(),
            rod_length: default_rod_length(),
            yaw_anchor_offset: default_yaw_anchor_offset(),
            yaw_arm_length: default_yaw_arm_length(),
            yaw_rod_length: default_yaw_rod_length(),
            smoothing: default_smoothing(),
            motion_amplitude: default_motion_amplitude(),
            motion_speed: default_motion_speed(),
            search: SearchConfig::default(),
        }
    }
}

impl MechanismConfig {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("servo_offset", self.servo_offset),
            ("platform_height", self.platform_height),
            ("horn_length", self.horn_length),
            ("rod_length", self.rod_length),
            ("yaw_anchor_offset", self.yaw_anchor_offset),
            ("yaw_arm_length", self.yaw_arm_length),
            ("yaw_rod_length", self.yaw_rod_length),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    message: format!("must be > 0, got {value}"),
                });
            }
        }

        if self.smoothing <= 0.0 || self.smoothing > 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "smoothing".into(),
                message: format!("must be in (0, 1], got {}", self.smoothing),
            });
        }

        if self.motion_amplitude.iter().any(|a| *a < 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "motion_amplitude".into(),
                message: "amplitudes must be >= 0".into(),
            });
        }

        self.search.validate()
    }

    /// Load and validate a configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}
