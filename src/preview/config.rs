use crate::error::{ParameterError, Result};
use crate::geometry::LineKind;

use super::host::ToolId;

/// Angle slider range offered by the editor UI, in degrees.
pub const ANGLE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=360.0;

/// Spacing slider range offered by the editor UI.
pub const SPACING_RANGE: std::ops::RangeInclusive<f64> = 0.5..=20.0;

/// Smallest spacing the controller passes to the fill engine.
pub const MIN_SPACING: f64 = 0.1;

/// User-adjustable fill parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillParams {
    /// Fill direction in degrees.
    pub angle_degrees: f64,
    /// Distance between strokes.
    pub spacing: f64,
    /// Kind assigned to generated lines.
    pub line_kind: LineKind,
}

impl Default for FillParams {
    fn default() -> Self {
        Self {
            angle_degrees: 0.0,
            spacing: 2.0,
            line_kind: LineKind::Scenery,
        }
    }
}

impl FillParams {
    /// Sets the fill angle.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::NonFiniteAngle` if `angle_degrees` is NaN or infinite.
    pub fn set_angle(&mut self, angle_degrees: f64) -> Result<()> {
        if !angle_degrees.is_finite() {
            return Err(ParameterError::NonFiniteAngle(angle_degrees).into());
        }
        self.angle_degrees = angle_degrees;
        Ok(())
    }

    /// Sets the spacing, raising it to `min_spacing` when smaller.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::NonFiniteSpacing` if `spacing` is NaN or infinite.
    pub fn set_spacing(&mut self, spacing: f64, min_spacing: f64) -> Result<()> {
        if !spacing.is_finite() {
            return Err(ParameterError::NonFiniteSpacing(spacing).into());
        }
        self.spacing = spacing.max(min_spacing);
        Ok(())
    }
}

/// Configuration of the live-preview controller.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewConfig {
    /// Parameters in effect when the controller is created.
    pub initial: FillParams,
    /// Floor applied to user-supplied spacing.
    pub min_spacing: f64,
    /// Name attached to every `AddSegments` command.
    pub tag: String,
    /// Tool switched to on activation.
    pub select_tool: ToolId,
    /// Treat selections made outside multi-select mode as unusable.
    pub require_multi_select: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            initial: FillParams::default(),
            min_spacing: MIN_SPACING,
            tag: "FILL".to_owned(),
            select_tool: ToolId::select(),
            require_multi_select: false,
        }
    }
}
