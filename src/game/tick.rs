//! Per-Frame Simulation Step
//!
//! The core game loop body. Each tick: steering update, obstacle
//! advancement, collision check, scoring, difficulty ramp, background
//! scroll. 100% deterministic given the state and the input.

use serde::{Deserialize, Serialize};

use crate::game::collision::first_car_hit;
use crate::game::difficulty::maybe_ramp;
use crate::game::events::RoundEvent;
use crate::game::input::SteeringInput;
use crate::game::obstacle::advance_obstacles;
use crate::game::state::{RoundOutcome, RoundPhase, RoundState};
use crate::game::steer::apply_steering;
use crate::COUNTDOWN_TICKS;

/// Result of a tick.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Events generated this tick
    pub events: Vec<RoundEvent>,
    /// Whether the round ended this tick (or was already over)
    pub round_over: bool,
    /// Why the round ended (set when `round_over`)
    pub outcome: Option<RoundOutcome>,
}

/// Round geometry and tuning.
///
/// Everything here is in screen pixels, ticks, or score points.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Visible width in pixels
    pub screen_width: i32,
    /// Visible height in pixels
    pub screen_height: i32,
    /// Car sprite width
    pub car_width: i32,
    /// Car sprite height
    pub car_height: i32,
    /// Car spawn distance from the bottom edge (top of the car)
    pub car_spawn_from_bottom: i32,
    /// Obstacle sprite edge length (obstacles are square)
    pub obstacle_size: i32,
    /// Fixed number of obstacles in the field
    pub obstacle_count: usize,
    /// Starting fall and steer speed, pixels per tick
    pub base_speed: i32,
    /// Score points between speed ramps (0 disables the ramp)
    pub ramp_interval: u32,
    /// Minimum initial spawn depth above the top edge
    pub spawn_depth_min: i32,
    /// Maximum initial spawn depth above the top edge
    pub spawn_depth_max: i32,
    /// Respawn depth above the top edge when recycled
    pub respawn_depth: i32,
    /// Background scroll speed, pixels per tick
    pub background_speed: i32,
    /// Countdown length in ticks
    pub countdown_ticks: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            car_width: 50,
            car_height: 100,
            car_spawn_from_bottom: 150,
            obstacle_size: 50,
            obstacle_count: 5,
            base_speed: 5,
            ramp_interval: 300, // every 10 seconds at 30 Hz
            spawn_depth_min: 50,
            spawn_depth_max: 200,
            respawn_depth: 50,
            background_speed: 5,
            countdown_ticks: COUNTDOWN_TICKS,
        }
    }
}

/// Run one simulation tick.
///
/// # Arguments
///
/// * `state` - The round state (will be mutated)
/// * `input` - The steering input sampled for this tick
/// * `config` - Round configuration
///
/// # Determinism
///
/// This function is 100% deterministic: integer math only, all randomness
/// from `state.rng`, no system calls.
pub fn tick(state: &mut RoundState, input: SteeringInput, config: &RoundConfig) -> TickResult {
    let mut result = TickResult::default();

    // Phase-specific logic
    match state.phase {
        RoundPhase::Countdown { ticks_remaining } => {
            if ticks_remaining == 0 {
                state.phase = RoundPhase::Playing;
                state.push_event(RoundEvent::round_live(state.tick));
            } else {
                state.phase = RoundPhase::Countdown {
                    ticks_remaining: ticks_remaining - 1,
                };
            }
            result.events = state.take_events();
            return result;
        }
        RoundPhase::Ended => {
            result.round_over = true;
            result.outcome = state.outcome;
            // Drain anything queued by an external abort
            result.events = state.take_events();
            return result;
        }
        RoundPhase::Playing => {
            // Continue with main simulation
        }
    }

    // 0. Advance tick counter
    state.tick += 1;

    // 1. Apply steering
    apply_steering(
        &mut state.car,
        input,
        state.steer_speed,
        config.screen_width - config.car_width,
    );

    // 2. Advance and recycle obstacles
    advance_obstacles(state, config);

    // 3. Collision check; any hit is terminal
    if let Some(slot) = first_car_hit(state) {
        state.push_event(RoundEvent::collision(state.tick, slot));
        end_round(state, &mut result, RoundOutcome::Collision);
    } else {
        // 4. Score and difficulty ramp (the round survived this tick)
        state.score += 1;
        maybe_ramp(state, config);
    }

    // 5. Background scroll (presentation state only)
    state.bg_scroll = (state.bg_scroll + config.background_speed) % config.screen_height;

    // Collect events
    result.events = state.take_events();

    result
}

/// End the round from inside the tick.
fn end_round(state: &mut RoundState, result: &mut TickResult, outcome: RoundOutcome) {
    state.phase = RoundPhase::Ended;
    state.outcome = Some(outcome);
    result.round_over = true;
    result.outcome = Some(outcome);
    state.push_event(RoundEvent::round_ended(state.tick, outcome, state.score));
}

/// Replay a round from a recorded steering trace.
///
/// Skips the countdown and feeds one input per tick until the trace runs out
/// or the round ends. Returns the final state and all events; equality with
/// the original run is checked via `RoundState::compute_hash`.
pub fn replay_round(
    rng_seed: u64,
    inputs: &[SteeringInput],
    config: &RoundConfig,
) -> (RoundState, Vec<RoundEvent>) {
    let mut state = RoundState::new(rng_seed, config);
    state.phase = RoundPhase::Playing;

    let mut all_events = Vec::new();
    for input in inputs {
        let result = tick(&mut state, *input, config);
        all_events.extend(result.events);

        if result.round_over {
            break;
        }
    }

    (state, all_events)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rect::Rect;
    use crate::game::events::RoundEventData;

    fn live_state(seed: u64, config: &RoundConfig) -> RoundState {
        let mut state = RoundState::new(seed, config);
        state.phase = RoundPhase::Playing;
        state
    }

    /// Park the whole field far above the screen so nothing collides.
    fn clear_field(state: &mut RoundState) {
        for obstacle in &mut state.obstacles {
            obstacle.rect.y = -100_000;
        }
    }

    #[test]
    fn test_countdown_burns_ticks_without_simulating() {
        let config = RoundConfig {
            countdown_ticks: 3,
            ..RoundConfig::default()
        };
        let mut state = RoundState::new(1, &config);
        let car = state.car;

        // Three decrements plus the transition call
        for _ in 0..3 {
            let result = tick(&mut state, SteeringInput::FULL_RIGHT, &config);
            assert!(!result.round_over);
            assert_eq!(state.car, car, "countdown must not move the car");
            assert_eq!(state.score, 0);
        }
        let result = tick(&mut state, SteeringInput::FULL_RIGHT, &config);
        assert!(result
            .events
            .iter()
            .any(|e| matches!(e.data, RoundEventData::RoundLive)));
        assert_eq!(state.phase, RoundPhase::Playing);
        assert_eq!(state.tick, 0);
    }

    #[test]
    fn test_score_increments_once_per_tick() {
        let config = RoundConfig::default();
        let mut state = live_state(1, &config);
        clear_field(&mut state);

        for expected in 1..=100u32 {
            let result = tick(&mut state, SteeringInput::NEUTRAL, &config);
            assert!(!result.round_over);
            assert_eq!(state.score, expected);
        }
    }

    #[test]
    fn test_ramp_fires_exactly_once_per_threshold() {
        let config = RoundConfig {
            ramp_interval: 10,
            ..RoundConfig::default()
        };
        let mut state = live_state(1, &config);
        clear_field(&mut state);

        let mut ramp_events = 0;
        for _ in 0..35 {
            let result = tick(&mut state, SteeringInput::NEUTRAL, &config);
            ramp_events += result
                .events
                .iter()
                .filter(|e| matches!(e.data, RoundEventData::SpeedRamped { .. }))
                .count();
        }

        // Thresholds crossed at scores 10, 20, 30
        assert_eq!(ramp_events, 3);
        assert_eq!(state.fall_speed, config.base_speed + 3);
        assert_eq!(state.steer_speed, config.base_speed + 3);
    }

    #[test]
    fn test_collision_ends_round_and_freezes_score() {
        let config = RoundConfig::default();
        let mut state = live_state(1, &config);
        clear_field(&mut state);

        // Run a few clean ticks, then drop an obstacle onto the car
        for _ in 0..5 {
            tick(&mut state, SteeringInput::NEUTRAL, &config);
        }
        let score_before = state.score;
        state.obstacles[0].rect = Rect::new(state.car.x, state.car.y, 50, 50);

        let result = tick(&mut state, SteeringInput::NEUTRAL, &config);
        assert!(result.round_over);
        assert_eq!(result.outcome, Some(RoundOutcome::Collision));
        assert_eq!(state.score, score_before, "ending tick does not score");
        assert!(state.is_ended());

        // Ended phase is absorbing
        let result = tick(&mut state, SteeringInput::NEUTRAL, &config);
        assert!(result.round_over);
        assert_eq!(result.outcome, Some(RoundOutcome::Collision));
        assert_eq!(state.score, score_before);
    }

    #[test]
    fn test_collision_event_names_first_slot() {
        let config = RoundConfig::default();
        let mut state = live_state(1, &config);
        clear_field(&mut state);

        let on_car = Rect::new(state.car.x, state.car.y + 20, 50, 50);
        state.obstacles[2].rect = on_car;
        state.obstacles[4].rect = on_car;

        let result = tick(&mut state, SteeringInput::NEUTRAL, &config);
        assert!(result
            .events
            .iter()
            .any(|e| matches!(e.data, RoundEventData::Collision { slot: 2 })));
    }

    #[test]
    fn test_background_wraps_at_screen_height() {
        let config = RoundConfig::default();
        let mut state = live_state(1, &config);
        clear_field(&mut state);

        let wrap_ticks = (config.screen_height / config.background_speed) as u32;
        for _ in 0..wrap_ticks {
            tick(&mut state, SteeringInput::NEUTRAL, &config);
        }
        assert_eq!(state.bg_scroll, 0);
        assert!(state.bg_scroll < config.screen_height);
    }

    #[test]
    fn test_tick_determinism() {
        let config = RoundConfig::default();
        let mut state1 = live_state(4242, &config);
        let mut state2 = live_state(4242, &config);

        for t in 0..1000u32 {
            // A weaving input pattern, same for both states
            let input = SteeringInput::from_ratio(t % 800, 800);
            let r1 = tick(&mut state1, input, &config);
            let r2 = tick(&mut state2, input, &config);
            assert_eq!(r1.round_over, r2.round_over);
            if r1.round_over {
                break;
            }
        }

        assert_eq!(state1.compute_hash(), state2.compute_hash());
        assert_eq!(state1.car, state2.car);
        assert_eq!(state1.score, state2.score);
    }

    #[test]
    fn test_replay_reproduces_state_hash() {
        let config = RoundConfig::default();
        let seed = 9001u64;

        let trace: Vec<SteeringInput> = (0..2000u32)
            .map(|t| SteeringInput::from_ratio((t * 7) % 800, 800))
            .collect();

        // Live run
        let mut live = live_state(seed, &config);
        for input in &trace {
            if tick(&mut live, *input, &config).round_over {
                break;
            }
        }

        // Replay from the same seed and trace
        let (replayed, _) = replay_round(seed, &trace, &config);

        assert_eq!(live.compute_hash(), replayed.compute_hash());
        assert_eq!(live.score, replayed.score);
        assert_eq!(live.outcome, replayed.outcome);
    }
}
