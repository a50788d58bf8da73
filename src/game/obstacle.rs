//! Obstacle Field
//!
//! A fixed-cardinality set of falling rectangles. Obstacles that leave the
//! bottom of the screen are recycled to the top with a fresh uniform
//! horizontal offset and a freshly chosen display asset.

use crate::core::rect::Rect;
use crate::core::rng::DeterministicRng;
use crate::game::events::RoundEvent;
use crate::game::state::{ObstacleState, RoundState, SpriteKind};
use crate::game::tick::RoundConfig;

/// Spawn the initial obstacle field.
///
/// Vertical positions are staggered above the top edge so obstacles do not
/// arrive in one wave.
pub fn spawn_field(rng: &mut DeterministicRng, config: &RoundConfig) -> Vec<ObstacleState> {
    (0..config.obstacle_count)
        .map(|_| {
            let x = spawn_x(rng, config);
            let depth = rng.next_int_range(config.spawn_depth_min, config.spawn_depth_max);
            let rect = Rect::new(x, -depth, config.obstacle_size, config.obstacle_size);
            ObstacleState::new(rect, random_sprite(rng))
        })
        .collect()
}

/// Uniform horizontal offset keeping the obstacle fully on screen.
fn spawn_x(rng: &mut DeterministicRng, config: &RoundConfig) -> i32 {
    rng.next_int_range(0, config.screen_width - config.obstacle_size)
}

/// Uniformly choose a display asset.
fn random_sprite(rng: &mut DeterministicRng) -> SpriteKind {
    match rng.next_int(SpriteKind::COUNT as u32) {
        0 => SpriteKind::Barrier,
        1 => SpriteKind::Barrel,
        2 => SpriteKind::Cone,
        3 => SpriteKind::Wreck,
        _ => unreachable!(),
    }
}

/// Advance every obstacle by the current fall speed and recycle the ones
/// whose top edge has passed the visible height.
pub fn advance_obstacles(state: &mut RoundState, config: &RoundConfig) {
    for slot in 0..state.obstacles.len() {
        state.obstacles[slot].rect.y += state.fall_speed;

        if state.obstacles[slot].rect.top() > config.screen_height {
            let x = spawn_x(&mut state.rng, config);
            let sprite = random_sprite(&mut state.rng);

            let obstacle = &mut state.obstacles[slot];
            obstacle.rect.x = x;
            obstacle.rect.y = -config.respawn_depth;
            obstacle.sprite = sprite;

            state.push_event(RoundEvent::obstacle_recycled(state.tick, slot, sprite, x));
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
