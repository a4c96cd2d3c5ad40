//! Error types for mesh generation and light slot management.

use thiserror::Error;

/// Rejected generator parameters.
///
/// Every generator validates its input before producing any vertex data, so
/// a caller either gets a complete mesh or one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("{shape} needs at least {min} stacks, got {got}")]
    TooFewStacks {
        shape: &'static str,
        min: usize,
        got: usize,
    },

    #[error("{shape} needs at least {min} slices, got {got}")]
    TooFewSlices {
        shape: &'static str,
        min: usize,
        got: usize,
    },

    #[error("{shape}: {name} must be a positive finite number, got {value}")]
    NonPositiveDimension {
        shape: &'static str,
        name: &'static str,
        value: f64,
    },

    #[error("torus inner radius {inner} must be smaller than its outer radius {outer}")]
    InvalidTorusRadii { inner: f64, outer: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LightError {
    #[error("light slot {index} is out of range (the shader holds {capacity} lights)")]
    SlotOutOfRange { index: usize, capacity: usize },
}

/// Check that a dimension is strictly positive and finite.
pub(crate) fn positive(
    shape: &'static str,
    name: &'static str,
    value: f64,
) -> Result<f64, GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::NonPositiveDimension { shape, name, value })
    }
}
