//! Difficulty Ramp
//!
//! Every `ramp_interval` score points, both the fall speed and the steering
//! base speed step up by one pixel per tick, permanently for the remainder
//! of the round. One-way, exactly once per threshold crossing.

use crate::game::events::RoundEvent;
use crate::game::state::RoundState;
use crate::game::tick::RoundConfig;

/// Step both speeds up if the score just reached a ramp threshold.
///
/// Must be called exactly once per score increment; the score advances by one
/// per tick, so each multiple of the interval is crossed exactly once.
/// Returns whether a ramp fired.
pub fn maybe_ramp(state: &mut RoundState, config: &RoundConfig) -> bool {
    if config.ramp_interval == 0 {
        return false;
    }
    if state.score == 0 || !state.score.is_multiple_of(config.ramp_interval) {
        return false;
    }

    state.fall_speed += 1;
    state.steer_speed += 1;
    state.push_event(RoundEvent::speed_ramped(
        state.tick,
        state.score,
        state.fall_speed,
        state.steer_speed,
    ));
    true
}

// =============================================================================
// TESTS
// =============================================================================
