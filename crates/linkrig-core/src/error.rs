use thiserror::Error;

/// Top-level error type for the linkrig workspace.
#[derive(Debug, Error)]
pub enum LinkrigError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Kinematics error: {0}")]
    Kinematics(#[from] IkError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid tolerance: {0} (must be > 0)")]
    InvalidTolerance(f64),

    #[error("Invalid sample count: {0} (must be >= 2)")]
    InvalidSamples(usize),

    #[error("Invalid iteration cap: must be >= 1")]
    InvalidIterationCap,

    #[error("Invalid shrink factor: {0} (must be > 1)")]
    InvalidShrink(f64),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Inverse-kinematics solver errors.
///
/// Copy + static messages for cheap propagation in hot paths.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IkError {
    /// An inverse trigonometric argument fell outside `[-1, 1]`: the target
    /// lies outside the linkage workspace. Carries the function whose domain
    /// was violated and the offending argument.
    #[error("Target out of reach: {function} argument {argument} outside [-1, 1]")]
    UnreachableTarget {
        function: &'static str,
        argument: f64,
    },

    /// A denominator that the closed form divides by is zero (coincident
    /// pivot and target, zero-length arm). Detected before the division.
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),
}
