//! Round Simulation
//!
//! All game logic. 100% deterministic.
//!
//! ## Module Structure
//!
//! - `input`: normalized steering input and dead-zone classification
//! - `state`: round state, car, obstacles, snapshots
//! - `steer`: the steering mapper
//! - `obstacle`: obstacle fall and recycling
//! - `collision`: car-vs-obstacle intersection
//! - `difficulty`: one-way speed ramp
//! - `tick`: per-frame simulation step
//! - `events`: round events for logging/presentation

pub mod collision;
pub mod difficulty;
pub mod events;
pub mod input;
pub mod obstacle;
pub mod state;
pub mod steer;
pub mod tick;

// Re-export key types
pub use events::{RoundEvent, RoundEventData};
pub use input::{SteerDirection, SteeringInput};
pub use state::{ObstacleState, RoundOutcome, RoundPhase, RoundSnapshot, RoundState, SpriteKind};
pub use tick::{replay_round, tick, RoundConfig, TickResult};
