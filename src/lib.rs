//! # Palm Racer
//!
//! Deterministic core for a hand-gesture-steered "lane-dodge" arcade game:
//! an external gesture estimator reduces each webcam frame to one normalized
//! horizontal position, which steers a car sprite to dodge falling obstacles.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       PALM RACER                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── fixed.rs    - Q16.16 fixed-point steering domain        │
//! │  ├── rect.rs     - Pixel-space axis-aligned rectangles       │
//! │  ├── rng.rs      - Deterministic Xorshift128+ PRNG           │
//! │  └── hash.rs     - State hashing for replay verification     │
//! │                                                              │
//! │  game/           - Round simulation (deterministic)          │
//! │  ├── input.rs    - Normalized steering input                 │
//! │  ├── state.rs    - Round state, car, obstacles               │
//! │  ├── steer.rs    - Steering mapper (dead zone + gain)        │
//! │  ├── obstacle.rs - Obstacle fall and recycling               │
//! │  ├── collision.rs- Car-vs-obstacle intersection              │
//! │  ├── difficulty.rs - One-way speed ramp                      │
//! │  └── tick.rs     - Per-frame simulation step                 │
//! │                                                              │
//! │  app/            - Shell (non-deterministic)                 │
//! │  ├── source.rs   - Steering source seam (camera side)        │
//! │  ├── controls.rs - Control source seam (keyboard side)       │
//! │  ├── present.rs  - Frame presentation seam (display side)    │
//! │  ├── highscore.rs- Persisted high score                      │
//! │  └── session.rs  - Menu / round / game-over loop             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! The `core/` and `game/` modules are **100% deterministic**:
//! - Integer arithmetic only; floats appear solely at the estimator boundary
//! - All randomness from a seeded Xorshift128+
//! - No system time dependencies
//!
//! Given the same RNG seed and the same per-tick steering inputs, a round
//! replays to an identical state hash on any platform.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod app;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use core::fixed::{Fixed, FIXED_HALF, FIXED_ONE, FIXED_SCALE};
pub use core::rect::Rect;
pub use core::rng::DeterministicRng;
pub use game::input::{SteerDirection, SteeringInput};
pub use game::state::{RoundOutcome, RoundPhase, RoundSnapshot, RoundState};
pub use game::tick::{replay_round, tick, RoundConfig, TickResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulation tick rate (Hz)
pub const TICK_RATE: u32 = 30;

/// Countdown length before a round goes live (3 seconds * 30 Hz)
pub const COUNTDOWN_TICKS: u32 = 90;
