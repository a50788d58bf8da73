//! Round Events
//!
//! Events generated during simulation, drained once per tick for logging and
//! presentation.

use serde::{Deserialize, Serialize};

use crate::game::state::{RoundOutcome, SpriteKind};

/// Round event data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum RoundEventData {
    /// Countdown reached zero and the round went live.
    RoundLive,

    /// Both speeds stepped up at a score threshold.
    SpeedRamped {
        /// Score at which the ramp fired
        score: u32,
        /// Fall speed after the ramp
        fall_speed: i32,
        /// Steer speed after the ramp
        steer_speed: i32,
    },

    /// An obstacle left the bottom of the screen and was recycled to the top.
    ObstacleRecycled {
        /// Index of the obstacle in the field
        slot: usize,
        /// Freshly chosen display asset
        sprite: SpriteKind,
        /// New horizontal offset
        x: i32,
    },

    /// The car hit an obstacle.
    Collision {
        /// Index of the obstacle hit first
        slot: usize,
    },

    /// The round ended.
    RoundEnded {
        /// Why it ended
        outcome: RoundOutcome,
        /// Final score
        score: u32,
    },
}

/// A round event with the tick it occurred on.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundEvent {
    /// Tick when the event occurred
    pub tick: u32,
    /// Event data
    pub data: RoundEventData,
}

impl RoundEvent {
    /// Create a new event.
    pub fn new(tick: u32, data: RoundEventData) -> Self {
        Self { tick, data }
    }

    /// Create a round-live event.
    pub fn round_live(tick: u32) -> Self {
        Self::new(tick, RoundEventData::RoundLive)
    }

    /// Create a speed-ramp event.
    pub fn speed_ramped(tick: u32, score: u32, fall_speed: i32, steer_speed: i32) -> Self {
        Self::new(
            tick,
            RoundEventData::SpeedRamped {
                score,
                fall_speed,
                steer_speed,
            },
        )
    }

    /// Create an obstacle-recycled event.
    pub fn obstacle_recycled(tick: u32, slot: usize, sprite: SpriteKind, x: i32) -> Self {
        Self::new(tick, RoundEventData::ObstacleRecycled { slot, sprite, x })
    }

    /// Create a collision event.
    pub fn collision(tick: u32, slot: usize) -> Self {
        Self::new(tick, RoundEventData::Collision { slot })
    }

    /// Create a round-ended event.
    pub fn round_ended(tick: u32, outcome: RoundOutcome, score: u32) -> Self {
        Self::new(tick, RoundEventData::RoundEnded { outcome, score })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_carry_tick() {
        let event = RoundEvent::collision(42, 3);
        assert_eq!(event.tick, 42);
        assert!(matches!(event.data, RoundEventData::Collision { slot: 3 }));

        let event = RoundEvent::speed_ramped(300, 300, 6, 6);
        assert!(matches!(
            event.data,
            RoundEventData::SpeedRamped {
                score: 300,
                fall_speed: 6,
                steer_speed: 6
            }
        ));
    }
}
