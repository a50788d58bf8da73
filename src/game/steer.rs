//! Steering Mapper
//!
//! Converts the normalized hand position into a signed horizontal
//! displacement for the car. Pure function of input, position, and the
//! current steer speed each tick; no state machine.

use crate::core::fixed::{fixed_round, STEER_GAIN};
use crate::core::rect::Rect;
use crate::game::input::{SteerDirection, SteeringInput};

/// Signed horizontal displacement for one tick.
///
/// Dead-zone inputs produce 0. Otherwise the car moves
/// `steer_speed + round(STEER_GAIN * |s - 0.5|)` pixels toward the side the
/// input indicates, so a hand held further from center steers harder.
#[inline]
pub fn displacement(input: SteeringInput, steer_speed: i32) -> i32 {
    match input.direction() {
        SteerDirection::Neutral => 0,
        SteerDirection::Left => -(steer_speed + gain_bonus(input)),
        SteerDirection::Right => steer_speed + gain_bonus(input),
    }
}

/// Extra pixels from the input's distance to center, 0..=STEER_GAIN/2.
#[inline]
fn gain_bonus(input: SteeringInput) -> i32 {
    fixed_round(input.magnitude().wrapping_mul(STEER_GAIN))
}

/// Apply one tick of steering to the car.
///
/// The horizontal position is clamped to `[0, max_x]` so the car never
/// leaves the visible bounds.
pub fn apply_steering(car: &mut Rect, input: SteeringInput, steer_speed: i32, max_x: i32) {
    car.x += displacement(input, steer_speed);
    car.clamp_x(0, max_x);
}

// =============================================================================
// TESTS
// =============================================================================
