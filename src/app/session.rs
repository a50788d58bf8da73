//! Application Session
//!
//! The outer state machine: menu → countdown → round → game over, as one
//! explicit loop with a restart condition. Runs single-threaded at a fixed
//! tick rate; the only blocking call per tick is the steering sample.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::app::controls::{Control, ControlSource, Screen};
use crate::app::highscore::{HighScoreError, HighScoreStore};
use crate::app::present::Presenter;
use crate::app::source::{SteeringSource, SteeringSourceError};
use crate::core::rng::DeterministicRng;
use crate::game::events::{RoundEvent, RoundEventData};
use crate::game::state::{RoundOutcome, RoundState};
use crate::game::tick::{tick, RoundConfig};
use crate::TICK_RATE;

/// Errors that abort the application loop.
#[derive(Debug, Error)]
pub enum AppError {
    /// The steering source failed; fatal to the round and the loop.
    #[error("steering source failed")]
    Steering(#[from] SteeringSourceError),

    /// The high-score store failed.
    #[error("high score storage failed")]
    HighScore(#[from] HighScoreError),
}

/// Errors loading a round configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Could not read the file.
    #[error("could not read config file: {0}")]
    Io(#[from] io::Error),

    /// The file is not valid JSON for a round configuration.
    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load a round configuration from a JSON file.
pub fn load_round_config(path: &Path) -> Result<RoundConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Application configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Round geometry and tuning
    pub round: RoundConfig,
    /// Tick rate in Hz; 0 runs unpaced (tests, replays)
    pub tick_rate: u32,
    /// Path of the high-score file
    pub high_score_path: PathBuf,
    /// Base seed; each round derives its own seed from this
    pub seed: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            round: RoundConfig::default(),
            tick_rate: TICK_RATE,
            high_score_path: PathBuf::from("highscore.txt"),
            seed: 0,
        }
    }
}

/// What a finished application session did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSummary {
    /// Rounds played to any outcome
    pub rounds_played: u32,
    /// Best score across those rounds
    pub best_score: u32,
}

/// The assembled application: simulation plus its three seams.
pub struct App<S, C, P> {
    config: AppConfig,
    source: S,
    controls: C,
    presenter: P,
    store: HighScoreStore,
    seed_rng: DeterministicRng,
    tick_period: Duration,
}

impl<S, C, P> App<S, C, P>
where
    S: SteeringSource,
    C: ControlSource,
    P: Presenter,
{
    /// Assemble an application from its configuration and seams.
    pub fn new(config: AppConfig, source: S, controls: C, presenter: P) -> Self {
        let store = HighScoreStore::new(&config.high_score_path);
        let seed_rng = DeterministicRng::new(config.seed);
        let tick_period = if config.tick_rate == 0 {
            Duration::ZERO
        } else {
            Duration::from_micros(1_000_000 / config.tick_rate as u64)
        };

        Self {
            config,
            source,
            controls,
            presenter,
            store,
            seed_rng,
            tick_period,
        }
    }

    /// Run the application until the player quits or a seam fails.
    pub fn run(&mut self) -> Result<AppSummary, AppError> {
        let mut high_score = self.store.load()?;
        let mut summary = AppSummary::default();
        let mut retrying = false;

        info!(high_score, "session starting");

        'session: loop {
            // Menu, unless the player asked for an immediate retry
            if !retrying {
                self.presenter.menu(high_score);
                loop {
                    let started = Instant::now();
                    match self.controls.poll(Screen::Menu) {
                        Some(Control::Start | Control::Retry) => break,
                        Some(Control::Quit) => break 'session,
                        None => {}
                    }
                    self.pace(started);
                }
            }
            retrying = false;

            // One round
            let seed = self.seed_rng.next_u64();
            let (outcome, score) = self.play_round(seed)?;
            summary.rounds_played += 1;
            summary.best_score = summary.best_score.max(score);

            match outcome {
                RoundOutcome::Quit => break 'session,
                RoundOutcome::Collision => {
                    let beaten = self.store.submit(score)?;
                    if beaten {
                        high_score = score;
                    }
                    self.presenter.game_over(score, high_score, beaten);

                    // Game-over screen: retry or quit
                    loop {
                        let started = Instant::now();
                        match self.controls.poll(Screen::GameOver) {
                            Some(Control::Retry | Control::Start) => {
                                retrying = true;
                                continue 'session;
                            }
                            Some(Control::Quit) => break 'session,
                            None => {}
                        }
                        self.pace(started);
                    }
                }
            }
        }

        info!(
            rounds = summary.rounds_played,
            best = summary.best_score,
            "session over"
        );
        Ok(summary)
    }

    /// Drive one round from countdown to its outcome.
    fn play_round(&mut self, seed: u64) -> Result<(RoundOutcome, u32), AppError> {
        let mut state = RoundState::new(seed, &self.config.round);
        info!(seed, "round starting");

        loop {
            let started = Instant::now();

            // User-initiated quit is the only cancellation
            if let Some(Control::Quit) = self.controls.poll(Screen::Playing) {
                state.abort(RoundOutcome::Quit);
            }

            // The blocking camera read; failure is fatal to the round
            let input = self.source.sample()?;

            let result = tick(&mut state, input, &self.config.round);
            for event in &result.events {
                log_event(event);
            }
            self.presenter.frame(&state.snapshot());

            if result.round_over {
                let outcome = result.outcome.unwrap_or(RoundOutcome::Quit);
                return Ok((outcome, state.score));
            }

            self.pace(started);
        }
    }

    /// Sleep out the remainder of the tick period.
    fn pace(&self, started: Instant) {
        if self.tick_period.is_zero() {
            return;
        }
        if let Some(remaining) = self.tick_period.checked_sub(started.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

/// Narrate a round event through `tracing`.
fn log_event(event: &RoundEvent) {
    match &event.data {
        RoundEventData::RoundLive => info!(tick = event.tick, "round live"),
        RoundEventData::SpeedRamped {
            score,
            fall_speed,
            steer_speed,
        } => info!(score, fall_speed, steer_speed, "speed ramped"),
        RoundEventData::ObstacleRecycled { slot, sprite, x } => {
            debug!(slot, ?sprite, x, "obstacle recycled")
        }
        RoundEventData::Collision { slot } => info!(tick = event.tick, slot, "collision"),
        RoundEventData::RoundEnded { outcome, score } => {
            info!(tick = event.tick, ?outcome, score, "round ended")
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
