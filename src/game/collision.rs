//! Collision Detection
//!
//! Car-vs-obstacle intersection. Any hit ends the round, so only the first
//! intersection found matters.

use crate::game::state::RoundState;

/// Find the first obstacle the car intersects, in field order.
///
/// Returns the obstacle's slot index, or `None` if the car is clear.
pub fn first_car_hit(state: &RoundState) -> Option<usize> {
    state
        .obstacles
        .iter()
        .position(|obstacle| state.car.intersects(&obstacle.rect))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rect::Rect;
    use crate::game::state::SpriteKind;
    use crate::game::tick::RoundConfig;

    fn state_with_clear_field() -> (RoundState, RoundConfig) {
        let config = RoundConfig::default();
        let mut state = RoundState::new(1, &config);
        // Move every obstacle well away from the car
        for obstacle in &mut state.obstacles {
            obstacle.rect.y = -1000;
        }
        (state, config)
    }

    #[test]
    fn test_clear_field_no_hit() {
        let (state, _) = state_with_clear_field();
        assert_eq!(first_car_hit(&state), None);
    }

    #[test]
    fn test_overlap_is_reported() {
        let (mut state, _) = state_with_clear_field();
        state.obstacles[3].rect = Rect::new(state.car.x + 10, state.car.y + 10, 50, 50);
        assert_eq!(first_car_hit(&state), Some(3));
    }

    #[test]
    fn test_first_hit_wins() {
        let (mut state, _) = state_with_clear_field();
        let on_car = Rect::new(state.car.x, state.car.y, 50, 50);
        state.obstacles[1].rect = on_car;
        state.obstacles[4].rect = on_car;
        assert_eq!(first_car_hit(&state), Some(1));
    }

    #[test]
    fn test_touching_edge_is_not_a_hit() {
        let (mut state, _) = state_with_clear_field();
        // Obstacle bottom flush against the car's top edge
        state.obstacles[0] = crate::game::state::ObstacleState::new(
            Rect::new(state.car.x, state.car.y - 50, 50, 50),
            SpriteKind::Cone,
        );
        assert_eq!(first_car_hit(&state), None);
    }
}
