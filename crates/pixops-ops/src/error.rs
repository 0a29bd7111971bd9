//! Error types for pixel operations.

use pixops_core::Error as CoreError;
use thiserror::Error;

/// Error type for pixel operations.
///
/// Every variant is a caller-input error, raised before the output buffer is
/// allocated. No operation returns a partially written buffer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    /// Mask buffer is wider or taller than the base buffer.
    #[error(
        "dimension mismatch: mask {mask_width}x{mask_height} exceeds base {base_width}x{base_height}"
    )]
    DimensionMismatch {
        /// Base width
        base_width: u32,
        /// Base height
        base_height: u32,
        /// Mask width
        mask_width: u32,
        /// Mask height
        mask_height: u32,
    },

    /// Tint and pixel are both fully transparent, so the blend has no weight.
    #[error("divide by zero: combined alpha is 0 at pixel ({x}, {y})")]
    DivideByZero {
        /// X of the first offending pixel
        x: u32,
        /// Y of the first offending pixel
        y: u32,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Output dimensions cannot be represented.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Other data-model error.
    #[error(transparent)]
    Core(CoreError),
}

impl From<CoreError> for OpsError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidParameter {
                name,
                value,
                reason,
            } => Self::InvalidParameter(format!("{name} = {value}: {reason}")),
            CoreError::InvalidDimensions {
                width,
                height,
                reason,
            } => Self::InvalidDimensions(format!("{width}x{height} ({reason})")),
            other => Self::Core(other),
        }
    }
}

/// Result type for pixel operations.
pub type OpsResult<T> = Result<T, OpsError>;
