// src/error.rs

use thiserror::Error;

use crate::geometry::Point2;

/// Errors raised while generating a polar grid.
///
/// No partial geometry is ever returned alongside an error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GridError {
    /// The requested grid is invalid or degenerate (zero sectors, fewer
    /// samples than sectors, non-positive radius).
    #[error("invalid grid configuration: {field} = {value} ({reason})")]
    Configuration {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// An input or a derived coordinate is NaN or infinite.
    #[error("non-finite value for {field}: {value}")]
    Arithmetic { field: &'static str, value: f64 },

    /// Sector rings came out with different lengths. This is a defect in the
    /// generator, not a problem with the input.
    #[error("sector {id} has {actual} vertices, expected {expected}")]
    Assembly {
        id: u32,
        expected: usize,
        actual: usize,
    },
}

impl GridError {
    pub(crate) fn configuration(
        field: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        Self::Configuration {
            field,
            value: value.to_string(),
            reason,
        }
    }

    /// Fails with [`GridError::Arithmetic`] unless `value` is finite.
    pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::Arithmetic { field, value })
        }
    }

    /// Fails with [`GridError::Arithmetic`] carrying the first non-finite
    /// coordinate of `p`.
    pub(crate) fn check_finite_point(field: &'static str, p: Point2) -> Result<Point2, Self> {
        if p.is_finite() {
            return Ok(p);
        }
        let value = if p.x.is_finite() { p.y } else { p.x };
        Err(Self::Arithmetic { field, value })
    }
}
