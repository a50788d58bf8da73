//! Palm Racer Demo Binary
//!
//! Runs the simulation with a scripted steering trace (no camera needed),
//! verifies replay determinism, and then drives a full application session
//! through the menu / round / game-over loop.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use palm_racer::app::{
    load_round_config, App, AppConfig, Control, HighScoreStore, LogPresenter, ScriptedControls,
    ScriptedSteering,
};
use palm_racer::game::events::RoundEventData;
use palm_racer::{
    replay_round, tick, RoundConfig, RoundPhase, RoundState, SteeringInput, TICK_RATE, VERSION,
};

/// Length of the scripted steering trace.
const DEMO_TICKS: u32 = 5000;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Palm Racer v{}", VERSION);
    info!("Tick Rate: {} Hz", TICK_RATE);

    // Optional round config file as first argument
    let round_config = match std::env::args().nth(1) {
        Some(path) => load_round_config(Path::new(&path))
            .with_context(|| format!("loading round config from {path}"))?,
        None => RoundConfig::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let score = demo_round(&round_config, seed);

    // Persist the demo score like a real round would
    let store = HighScoreStore::new(high_score_path());
    let beaten = store
        .submit(score)
        .context("updating high score file")?;
    info!(score, beaten, path = %store.path().display(), "high score submitted");

    demo_session(&round_config, seed)?;

    Ok(())
}

/// High-score file location, overridable via environment.
fn high_score_path() -> PathBuf {
    std::env::var_os("PALM_RACER_SCORES")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("highscore.txt"))
}

/// Scripted steering: a triangle-wave sweep of the detected hand across the
/// frame, all integer math.
fn steering_trace(config: &RoundConfig, ticks: u32) -> Vec<SteeringInput> {
    let width = config.screen_width.max(1) as u32;
    let period = 240u32;
    let half = period / 2;

    (0..ticks)
        .map(|t| {
            let phase = t % period;
            let column = if phase < half {
                phase * width / half
            } else {
                (period - phase) * width / half
            };
            SteeringInput::from_ratio(column, width)
        })
        .collect()
}

/// Drive one round directly through the tick function and verify that a
/// replay of the same trace reproduces the state hash.
fn demo_round(config: &RoundConfig, seed: u64) -> u32 {
    info!("=== Demo Round ===");
    info!(seed, "RNG seed");

    let trace = steering_trace(config, DEMO_TICKS);

    let mut state = RoundState::new(seed, config);
    state.phase = RoundPhase::Playing;

    let mut total_events = 0;
    for input in &trace {
        let result = tick(&mut state, *input, config);
        total_events += result.events.len();

        for event in &result.events {
            match &event.data {
                RoundEventData::SpeedRamped {
                    score, fall_speed, ..
                } => {
                    info!(score, fall_speed, "speed ramped");
                }
                RoundEventData::Collision { slot } => {
                    info!(tick = event.tick, slot, "collision");
                }
                RoundEventData::RoundEnded { score, .. } => {
                    info!(tick = event.tick, score, "round ended");
                }
                _ => {}
            }
        }

        // Report every 10 seconds of simulated time
        if state.tick % (TICK_RATE * 10) == 0 {
            info!(
                tick = state.tick,
                score = state.score,
                car_x = state.car.x,
                "progress"
            );
        }

        if result.round_over {
            break;
        }
    }

    let hash = state.compute_hash();
    info!(score = state.score, events = total_events, "demo round finished");
    info!("Final State Hash: {}", hex::encode(hash));

    // Verify determinism by replaying
    let (replayed, _) = replay_round(seed, &trace, config);
    let replay_hash = replayed.compute_hash();
    info!("Replay State Hash: {}", hex::encode(replay_hash));

    if hash == replay_hash {
        info!("DETERMINISM VERIFIED: hashes match");
    } else {
        info!("DETERMINISM FAILURE: hashes differ");
    }

    state.score
}

/// Run a scripted application session: menu, one round, game over, quit.
fn demo_session(config: &RoundConfig, seed: u64) -> anyhow::Result<()> {
    info!("=== Demo Session ===");

    let app_config = AppConfig {
        round: config.clone(),
        tick_rate: 0, // unpaced: this is a scripted replay, not a live game
        high_score_path: high_score_path(),
        seed,
    };

    let steering = ScriptedSteering::new(steering_trace(config, DEMO_TICKS));
    let controls = ScriptedControls::new(vec![Control::Start], vec![Control::Quit]);

    let mut app = App::new(app_config, steering, controls, LogPresenter::default());
    let summary = app.run().context("running demo session")?;

    info!(
        rounds = summary.rounds_played,
        best = summary.best_score,
        "demo session summary"
    );
    Ok(())
}
