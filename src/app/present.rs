//! Presentation Seam
//!
//! The display side of the system. Sprite rendering and audio are external;
//! the application hands a `RoundSnapshot` per tick (and the menu/game-over
//! screens) to whatever presenter is plugged in.

use tracing::{debug, info};

use crate::game::state::RoundSnapshot;

/// Per-tick consumer of renderable state.
pub trait Presenter {
    /// Show the main menu.
    fn menu(&mut self, high_score: u32);

    /// Present one frame of an active round.
    fn frame(&mut self, snapshot: &RoundSnapshot);

    /// Show the game-over screen.
    fn game_over(&mut self, score: u32, high_score: u32, beaten: bool);
}

/// Presenter that discards everything. For tests and benchmarks.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn menu(&mut self, _high_score: u32) {}

    fn frame(&mut self, _snapshot: &RoundSnapshot) {}

    fn game_over(&mut self, _score: u32, _high_score: u32, _beaten: bool) {}
}

/// Presenter that narrates through `tracing`, throttling frame output.
#[derive(Clone, Copy, Debug)]
pub struct LogPresenter {
    /// Log one frame out of this many (0 silences frames entirely)
    every: u32,
}

impl LogPresenter {
    /// Create a presenter logging every `every`-th frame.
    pub fn new(every: u32) -> Self {
        Self { every }
    }
}

impl Default for LogPresenter {
    fn default() -> Self {
        // One report per second at 30 Hz
        Self::new(30)
    }
}

impl Presenter for LogPresenter {
    fn menu(&mut self, high_score: u32) {
        info!(high_score, "=== Main Menu ===");
    }

    fn frame(&mut self, snapshot: &RoundSnapshot) {
        if let Some(remaining) = snapshot.countdown {
            if remaining % 30 == 0 {
                info!(remaining, "countdown");
            }
            return;
        }
        if self.every != 0 && snapshot.tick % self.every == 0 {
            debug!(
                tick = snapshot.tick,
                score = snapshot.score,
                car_x = snapshot.car.x,
                fall_speed = snapshot.fall_speed,
                "frame"
            );
        }
    }

    fn game_over(&mut self, score: u32, high_score: u32, beaten: bool) {
        if beaten {
            info!(score, "=== Game Over: new high score! ===");
        } else {
            info!(score, high_score, "=== Game Over ===");
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::RoundState;
    use crate::game::tick::RoundConfig;

    #[test]
    fn test_presenters_accept_snapshots() {
        let state = RoundState::new(1, &RoundConfig::default());
        let snapshot = state.snapshot();

        let mut null = NullPresenter;
        null.menu(0);
        null.frame(&snapshot);
        null.game_over(10, 20, false);

        let mut log = LogPresenter::default();
        log.menu(0);
        log.frame(&snapshot);
        log.game_over(30, 20, true);
    }
}
