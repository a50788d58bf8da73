//! Application Shell
//!
//! Everything non-deterministic lives here: the seams toward the camera,
//! keyboard, and display, the persisted high score, and the explicit
//! menu / countdown / round / game-over loop.

pub mod controls;
pub mod highscore;
pub mod present;
pub mod session;
pub mod source;

// Re-export key types
pub use controls::{Control, ControlSource, Screen, ScriptedControls};
pub use highscore::{HighScoreError, HighScoreStore};
pub use present::{LogPresenter, NullPresenter, Presenter};
pub use session::{load_round_config, App, AppConfig, AppError, AppSummary, ConfigError};
pub use source::{ConstantSteering, ScriptedSteering, SteeringSource, SteeringSourceError};
