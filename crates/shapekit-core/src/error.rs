//! Error handling for ShapeKit units
//!
//! Path generation itself never fails. The only core failure is turning
//! text or serialized values into an [`crate::Angle`].

use thiserror::Error;

/// Unit error type
///
/// Represents failures while parsing or converting a measured value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// The numeric part of the value could not be parsed
    #[error("Invalid number '{input}'")]
    InvalidNumber {
        /// The offending input.
        input: String,
    },

    /// The unit suffix is not recognised
    #[error("Unknown angle unit '{unit}' (expected deg or rad)")]
    UnknownUnit {
        /// The offending unit suffix.
        unit: String,
    },

    /// The value is NaN or infinite
    #[error("Value must be finite, got {value}")]
    NotFinite {
        /// The rejected value.
        value: f64,
    },
}
