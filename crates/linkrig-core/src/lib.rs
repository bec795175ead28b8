// linkrig-core: Errors and math utilities for the linkrig mechanism stack.

pub mod error;
pub mod math;

pub use error::{ConfigError, IkError, LinkrigError};
