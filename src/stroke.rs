//! Stroke parameters handed over by a drawing-surface producer
//!
//! Graphics APIs describe dashes as alternating dash/space lengths in device
//! space, starting with a dash. DXF wants the same pattern in drawing units,
//! with spaces as negative lengths. The conversion scales every length by
//! the average of the transform's absolute X and Y scale and negates the
//! odd positions.

use nalgebra::Affine2;

use crate::error::{DxfError, Result};
use crate::tables::DashPattern;

/// Stroke style as seen by the producer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeStyle {
    /// Pen width in device units
    pub width: f32,
    /// Alternating dash/space lengths; `None` for a solid stroke
    pub dash_array: Option<Vec<f32>>,
}

impl StrokeStyle {
    /// A solid stroke
    pub fn solid(width: f32) -> Self {
        StrokeStyle {
            width,
            dash_array: None,
        }
    }

    /// A dashed stroke
    pub fn dashed(width: f32, dash_array: Vec<f32>) -> Self {
        StrokeStyle {
            width,
            dash_array: Some(dash_array),
        }
    }

    /// Whether the stroke has a dash pattern
    pub fn is_solid(&self) -> bool {
        self.dash_array.is_none()
    }
}

/// Average of the absolute X and Y scale components of a transform
pub fn scale_factor(transform: &Affine2<f64>) -> f64 {
    let m = transform.matrix();
    (m[(0, 0)].abs() + m[(1, 1)].abs()) / 2.0
}

/// Convert device-space dash lengths into a DXF dash pattern
///
/// Fails with [`DxfError::InvalidGeometry`] for a non-finite or zero scale
/// and with [`DxfError::InvalidPattern`] for an empty pattern or elements
/// that scale to zero or non-finite lengths.
pub fn derive_dash_pattern(dashes: &[f32], scale: f64) -> Result<DashPattern> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(DxfError::InvalidGeometry(format!(
            "dash scale factor must be positive and finite, got {}",
            scale
        )));
    }

    let lengths = dashes
        .iter()
        .enumerate()
        .map(|(i, &length)| {
            let scaled = scale * length as f64;
            if i % 2 == 1 {
                -scaled
            } else {
                scaled
            }
        })
        .collect();

    DashPattern::new(lengths)
}

/// Dash pattern for a stroke drawn under `transform`
///
/// Solid strokes yield `None`, which maps to a continuous line type.
pub fn stroke_dash_pattern(
    stroke: &StrokeStyle,
    transform: &Affine2<f64>,
) -> Result<Option<DashPattern>> {
    match &stroke.dash_array {
        None => Ok(None),
        Some(dashes) => derive_dash_pattern(dashes, scale_factor(transform)).map(Some),
    }
}
