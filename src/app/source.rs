//! Steering Source Seam
//!
//! The camera side of the system. A steering source produces one
//! `SteeringInput` per tick, blocking until a frame has been analyzed.
//! Image acquisition and hand extraction happen behind this trait; the
//! simulation only ever sees the normalized scalar.

use thiserror::Error;

use crate::game::input::SteeringInput;

/// Errors from a steering source. All of them are fatal to the round.
#[derive(Debug, Error)]
pub enum SteeringSourceError {
    /// The capture device returned no frame.
    #[error("could not read frame from capture device")]
    FrameRead,

    /// The capture device is gone.
    #[error("capture device closed")]
    Closed,
}

/// Per-tick blocking producer of steering inputs.
///
/// Implementations return [`SteeringInput::NEUTRAL`] when no hand is
/// detected; the simulation cannot (and does not try to) distinguish that
/// from an intentionally centered hand.
pub trait SteeringSource {
    /// Sample one steering input. Blocks until a frame has been analyzed.
    fn sample(&mut self) -> Result<SteeringInput, SteeringSourceError>;
}

/// Closures are steering sources; this is the hook for wiring in a real
/// capture pipeline without a newtype.
impl<F> SteeringSource for F
where
    F: FnMut() -> Result<SteeringInput, SteeringSourceError>,
{
    fn sample(&mut self) -> Result<SteeringInput, SteeringSourceError> {
        self()
    }
}

/// Source that always reports the same position. Useful for tests and idle
/// demos.
#[derive(Clone, Copy, Debug)]
pub struct ConstantSteering(pub SteeringInput);

impl SteeringSource for ConstantSteering {
    fn sample(&mut self) -> Result<SteeringInput, SteeringSourceError> {
        Ok(self.0)
    }
}

/// Source replaying a prerecorded trace, one input per sample.
///
/// Once the trace is exhausted the source keeps reporting neutral, as a
/// camera with no hand in view would.
#[derive(Clone, Debug)]
pub struct ScriptedSteering {
    frames: Vec<SteeringInput>,
    cursor: usize,
}

impl ScriptedSteering {
    /// Create from a recorded trace.
    pub fn new(frames: Vec<SteeringInput>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Number of scripted inputs left.
    pub fn remaining(&self) -> usize {
        self.frames.len().saturating_sub(self.cursor)
    }
}

impl SteeringSource for ScriptedSteering {
    fn sample(&mut self) -> Result<SteeringInput, SteeringSourceError> {
        let input = self
            .frames
            .get(self.cursor)
            .copied()
            .unwrap_or(SteeringInput::NEUTRAL);
        self.cursor = self.cursor.saturating_add(1);
        Ok(input)
    }
}

// =============================================================================
// TESTS
// =============================================================================
