//! Round State Definitions
//!
//! All state for a single round lives in one explicit struct mutated by the
//! tick function. No globals.

use serde::{Deserialize, Serialize};

use crate::core::hash::{compute_state_hash, StateHash};
use crate::core::rect::Rect;
use crate::core::rng::DeterministicRng;
use crate::game::events::RoundEvent;
use crate::game::obstacle::spawn_field;
use crate::game::tick::RoundConfig;

// =============================================================================
// SPRITE KIND
// =============================================================================

/// Display asset attached to an obstacle, chosen uniformly at (re)spawn.
///
/// The simulation only carries the reference; loading and drawing the asset
/// is the presenter's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SpriteKind {
    /// Striped road barrier
    Barrier = 0,
    /// Oil barrel
    Barrel = 1,
    /// Traffic cone
    Cone = 2,
    /// Wrecked car
    Wreck = 3,
}

impl SpriteKind {
    /// Number of sprite kinds.
    pub const COUNT: u8 = 4;

    /// Get from index (0-3).
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(SpriteKind::Barrier),
            1 => Some(SpriteKind::Barrel),
            2 => Some(SpriteKind::Cone),
            3 => Some(SpriteKind::Wreck),
            _ => None,
        }
    }

    /// Relative path of the image asset for this kind.
    pub fn asset(self) -> &'static str {
        match self {
            SpriteKind::Barrier => "assets/barrier.png",
            SpriteKind::Barrel => "assets/barrel.png",
            SpriteKind::Cone => "assets/cone.png",
            SpriteKind::Wreck => "assets/wreck.png",
        }
    }
}

// =============================================================================
// OBSTACLE STATE
// =============================================================================

/// One falling obstacle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleState {
    /// Position and size in screen pixels
    pub rect: Rect,
    /// Display asset chosen at the most recent (re)spawn
    pub sprite: SpriteKind,
}

impl ObstacleState {
    /// Create a new obstacle.
    pub const fn new(rect: Rect, sprite: SpriteKind) -> Self {
        Self { rect, sprite }
    }
}

// =============================================================================
// ROUND PHASE / OUTCOME
// =============================================================================

/// Current phase of the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Countdown before the round goes live
    Countdown {
        /// Ticks until live
        ticks_remaining: u32,
    },
    /// Active gameplay
    Playing,
    /// Round over
    Ended,
}

/// Why a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum RoundOutcome {
    /// The car hit an obstacle.
    Collision = 0,
    /// The player quit mid-round.
    Quit = 1,
}

// =============================================================================
// ROUND STATE
// =============================================================================

/// Complete state of one round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundState {
    /// Current tick (advances only while playing)
    pub tick: u32,

    /// Current phase
    pub phase: RoundPhase,

    /// RNG seed (for replay)
    pub rng_seed: u64,

    /// Deterministic RNG state
    #[serde(skip)]
    pub rng: DeterministicRng,

    /// The player's car
    pub car: Rect,

    /// The obstacle field (fixed cardinality for the whole round)
    pub obstacles: Vec<ObstacleState>,

    /// Score: +1 per tick while the round is active
    pub score: u32,

    /// Current obstacle fall speed (pixels per tick)
    pub fall_speed: i32,

    /// Current steering base speed (pixels per tick)
    pub steer_speed: i32,

    /// Background scroll offset in [0, screen_height)
    pub bg_scroll: i32,

    /// Why the round ended (set once, with phase = Ended)
    pub outcome: Option<RoundOutcome>,

    /// Events generated this tick (drained each tick)
    #[serde(skip)]
    pub pending_events: Vec<RoundEvent>,
}

impl RoundState {
    /// Create a new round in countdown phase.
    ///
    /// The car spawns centered near the bottom; obstacle vertical positions
    /// are staggered above the top edge so they do not arrive all at once.
    pub fn new(rng_seed: u64, config: &RoundConfig) -> Self {
        let mut rng = DeterministicRng::new(rng_seed);

        let car = Rect::new(
            (config.screen_width - config.car_width) / 2,
            config.screen_height - config.car_spawn_from_bottom,
            config.car_width,
            config.car_height,
        );

        let obstacles = spawn_field(&mut rng, config);

        Self {
            tick: 0,
            phase: RoundPhase::Countdown {
                ticks_remaining: config.countdown_ticks,
            },
            rng_seed,
            rng,
            car,
            obstacles,
            score: 0,
            fall_speed: config.base_speed,
            steer_speed: config.base_speed,
            bg_scroll: 0,
            outcome: None,
            pending_events: Vec::new(),
        }
    }

    /// Check if the round has ended.
    pub fn is_ended(&self) -> bool {
        matches!(self.phase, RoundPhase::Ended)
    }

    /// End the round from outside the tick function (quit).
    ///
    /// No-op once the round is already over.
    pub fn abort(&mut self, outcome: RoundOutcome) {
        if self.is_ended() {
            return;
        }
        self.phase = RoundPhase::Ended;
        self.outcome = Some(outcome);
        self.push_event(RoundEvent::round_ended(self.tick, outcome, self.score));
    }

    /// Push a round event.
    pub fn push_event(&mut self, event: RoundEvent) {
        self.pending_events.push(event);
    }

    /// Take pending events (consumes them).
    pub fn take_events(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Compute the hash of the current state for replay verification.
    pub fn compute_hash(&self) -> StateHash {
        compute_state_hash(self.tick, self.rng_seed, |hasher| {
            // Phase
            match self.phase {
                RoundPhase::Countdown { ticks_remaining } => {
                    hasher.update_u8(0);
                    hasher.update_u32(ticks_remaining);
                }
                RoundPhase::Playing => hasher.update_u8(1),
                RoundPhase::Ended => hasher.update_u8(2),
            }

            // Car and obstacles in field order
            hasher.update_rect(self.car);
            for obstacle in &self.obstacles {
                hasher.update_rect(obstacle.rect);
                hasher.update_u8(obstacle.sprite as u8);
            }

            // Scalars
            hasher.update_u32(self.score);
            hasher.update_i32(self.fall_speed);
            hasher.update_i32(self.steer_speed);
            hasher.update_i32(self.bg_scroll);

            // Outcome
            match self.outcome {
                None => hasher.update_u8(0),
                Some(outcome) => {
                    hasher.update_u8(1);
                    hasher.update_u8(outcome as u8);
                }
            }
        })
    }

    /// Build the per-tick renderable view.
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            tick: self.tick,
            countdown: match self.phase {
                RoundPhase::Countdown { ticks_remaining } => Some(ticks_remaining),
                _ => None,
            },
            score: self.score,
            fall_speed: self.fall_speed,
            steer_speed: self.steer_speed,
            car: self.car,
            obstacles: self.obstacles.clone(),
            bg_scroll: self.bg_scroll,
        }
    }
}

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Renderable view of the round, handed to the presenter once per tick.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// Current tick
    pub tick: u32,
    /// Ticks remaining in countdown, if counting down
    pub countdown: Option<u32>,
    /// Current score
    pub score: u32,
    /// Current fall speed
    pub fall_speed: i32,
    /// Current steer speed
    pub steer_speed: i32,
    /// The car rectangle
    pub car: Rect,
    /// The obstacle field
    pub obstacles: Vec<ObstacleState>,
    /// Background scroll offset
    pub bg_scroll: i32,
}

// =============================================================================
// TESTS
// =============================================================================
