//! Core deterministic primitives.
//!
//! Everything in this module is integer-only and produces identical results
//! on every platform. The game simulation is built entirely on top of it.

pub mod fixed;
pub mod hash;
pub mod rect;
pub mod rng;

// Re-export core types
pub use fixed::{Fixed, FIXED_HALF, FIXED_ONE, FIXED_SCALE};
pub use hash::compute_state_hash;
pub use rect::Rect;
pub use rng::DeterministicRng;
