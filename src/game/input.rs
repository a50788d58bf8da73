//! Steering Input
//!
//! The gesture estimator reduces a webcam frame to one normalized horizontal
//! position: 0 = full left, 1 = full right, 0.5 = neutral. This module is the
//! boundary where that scalar enters the deterministic simulation.
//!
//! The primary constructor takes the estimator's raw integers (detected pixel
//! column and frame width) so the conversion is exact. A float constructor
//! exists for sources that only have a normalized value; it is the single
//! place floating point touches the input path.

use serde::{Deserialize, Serialize};

use crate::core::fixed::{
    fixed_abs, fixed_clamp, to_float, Fixed, DEAD_ZONE_HIGH, DEAD_ZONE_LOW, FIXED_HALF, FIXED_ONE,
    FIXED_SCALE,
};

/// Which way an input steers, after dead-zone classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SteerDirection {
    /// Input below the dead zone: move left.
    Left,
    /// Input inside the dead zone: no movement.
    Neutral,
    /// Input above the dead zone: move right.
    Right,
}

/// Normalized horizontal hand position, Q16.16 in [0, 1].
///
/// Produced once per tick by the steering source, consumed immediately by the
/// steering mapper, not retained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SteeringInput(Fixed);

impl SteeringInput {
    /// Neutral input (0.5). Sources return this when no hand is detected;
    /// it is indistinguishable from an intentionally centered hand.
    pub const NEUTRAL: Self = Self(FIXED_HALF);

    /// Full-left input (0.0).
    pub const FULL_LEFT: Self = Self(0);

    /// Full-right input (1.0).
    pub const FULL_RIGHT: Self = Self(FIXED_ONE);

    /// Create from a raw fixed-point value, clamped to [0, 1].
    #[inline]
    pub fn from_raw(raw: Fixed) -> Self {
        Self(fixed_clamp(raw, 0, FIXED_ONE))
    }

    /// Create from a detected pixel column and the frame width.
    ///
    /// This is the exact form of the estimator output (hand bounding-box
    /// center divided by frame width) with no float in between.
    /// A zero-width frame yields neutral.
    #[inline]
    pub fn from_ratio(column: u32, frame_width: u32) -> Self {
        if frame_width == 0 {
            return Self::NEUTRAL;
        }
        let raw = (((column as u64) << FIXED_SCALE) / frame_width as u64) as Fixed;
        Self::from_raw(raw)
    }

    /// Create from a normalized float.
    ///
    /// Boundary use only: quantizes to Q16.16 (truncating) and clamps to
    /// [0, 1]. Non-finite values map to neutral.
    #[inline]
    pub fn from_normalized(value: f32) -> Self {
        if !value.is_finite() {
            return Self::NEUTRAL;
        }
        Self::from_raw((value as f64 * FIXED_ONE as f64) as Fixed)
    }

    /// Raw fixed-point value in [0, FIXED_ONE].
    #[inline]
    pub const fn raw(self) -> Fixed {
        self.0
    }

    /// Classify against the dead zone.
    ///
    /// The bounds are inclusive: 0.4 and 0.6 themselves are neutral.
    #[inline]
    pub fn direction(self) -> SteerDirection {
        if self.0 < DEAD_ZONE_LOW {
            SteerDirection::Left
        } else if self.0 > DEAD_ZONE_HIGH {
            SteerDirection::Right
        } else {
            SteerDirection::Neutral
        }
    }

    /// Distance from center, |s - 0.5|, in [0, FIXED_HALF].
    #[inline]
    pub fn magnitude(self) -> Fixed {
        fixed_abs(self.0 - FIXED_HALF)
    }

    /// Float view for logging only.
    #[inline]
    pub fn to_float(self) -> f32 {
        to_float(self.0)
    }
}

impl Default for SteeringInput {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixed::to_fixed;

    #[test]
    fn test_from_ratio_exact() {
        assert_eq!(SteeringInput::from_ratio(0, 800).raw(), 0);
        assert_eq!(SteeringInput::from_ratio(400, 800).raw(), FIXED_HALF);
        assert_eq!(SteeringInput::from_ratio(800, 800).raw(), FIXED_ONE);
        // 320/800 = 0.4 exactly in Q16.16 floor division
        assert_eq!(SteeringInput::from_ratio(320, 800).raw(), DEAD_ZONE_LOW);
    }

    #[test]
    fn test_from_ratio_degenerate_frame() {
        assert_eq!(SteeringInput::from_ratio(123, 0), SteeringInput::NEUTRAL);
        // Column beyond frame width clamps to full right
        assert_eq!(SteeringInput::from_ratio(900, 800), SteeringInput::FULL_RIGHT);
    }

    #[test]
    fn test_from_normalized_clamps() {
        assert_eq!(SteeringInput::from_normalized(-0.3), SteeringInput::FULL_LEFT);
        assert_eq!(SteeringInput::from_normalized(1.7), SteeringInput::FULL_RIGHT);
        assert_eq!(SteeringInput::from_normalized(0.5), SteeringInput::NEUTRAL);
        assert_eq!(SteeringInput::from_normalized(f32::NAN), SteeringInput::NEUTRAL);
    }

    #[test]
    fn test_dead_zone_classification() {
        // Inside, including both bounds
        assert_eq!(SteeringInput::from_raw(DEAD_ZONE_LOW).direction(), SteerDirection::Neutral);
        assert_eq!(SteeringInput::NEUTRAL.direction(), SteerDirection::Neutral);
        assert_eq!(SteeringInput::from_raw(DEAD_ZONE_HIGH).direction(), SteerDirection::Neutral);

        // Just outside
        assert_eq!(
            SteeringInput::from_raw(DEAD_ZONE_LOW - 1).direction(),
            SteerDirection::Left
        );
        assert_eq!(
            SteeringInput::from_raw(DEAD_ZONE_HIGH + 1).direction(),
            SteerDirection::Right
        );

        // Extremes
        assert_eq!(SteeringInput::FULL_LEFT.direction(), SteerDirection::Left);
        assert_eq!(SteeringInput::FULL_RIGHT.direction(), SteerDirection::Right);
    }

    #[test]
    fn test_magnitude_symmetric() {
        let left = SteeringInput::from_raw(to_fixed(0.25));
        let right = SteeringInput::from_raw(to_fixed(0.75));
        assert_eq!(left.magnitude(), right.magnitude());
        assert_eq!(left.magnitude(), to_fixed(0.25));

        assert_eq!(SteeringInput::NEUTRAL.magnitude(), 0);
        assert_eq!(SteeringInput::FULL_LEFT.magnitude(), FIXED_HALF);
        assert_eq!(SteeringInput::FULL_RIGHT.magnitude(), FIXED_HALF);
    }
}
