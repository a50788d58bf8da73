//! Control Source Seam
//!
//! The keyboard side of the system. Controls are screen-scoped: a real
//! frontend maps different keys on the menu, mid-round, and on the game-over
//! screen, so the seam carries the screen being shown when polling.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Which screen the application is showing when polling for controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Main menu
    Menu,
    /// Active round
    Playing,
    /// Game-over screen
    GameOver,
}

/// A navigation control event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    /// Start a round from the menu.
    Start,
    /// Start another round from the game-over screen.
    Retry,
    /// Leave the current screen / the application.
    Quit,
}

/// Non-blocking per-tick producer of control events.
pub trait ControlSource {
    /// Poll for the next control, given the screen currently shown.
    /// Returns `None` when no event is pending.
    fn poll(&mut self, screen: Screen) -> Option<Control>;
}

/// Scripted controls with one queue per screen.
///
/// Each poll pops the next queued control for that screen, which makes whole
/// application runs scriptable without knowing round lengths in advance.
#[derive(Clone, Debug, Default)]
pub struct ScriptedControls {
    menu: VecDeque<Control>,
    playing: VecDeque<Control>,
    game_over: VecDeque<Control>,
}

impl ScriptedControls {
    /// Script with only menu and game-over inputs (the common case).
    pub fn new(menu: Vec<Control>, game_over: Vec<Control>) -> Self {
        Self {
            menu: menu.into(),
            playing: VecDeque::new(),
            game_over: game_over.into(),
        }
    }

    /// Queue a control for the mid-round screen.
    pub fn push_playing(&mut self, control: Control) {
        self.playing.push_back(control);
    }
}

impl ControlSource for ScriptedControls {
    fn poll(&mut self, screen: Screen) -> Option<Control> {
        match screen {
            Screen::Menu => self.menu.pop_front(),
            Screen::Playing => self.playing.pop_front(),
            Screen::GameOver => self.game_over.pop_front(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queues_are_screen_scoped() {
        let mut controls =
            ScriptedControls::new(vec![Control::Start], vec![Control::Retry, Control::Quit]);
        controls.push_playing(Control::Quit);

        // Menu queue
        assert_eq!(controls.poll(Screen::Menu), Some(Control::Start));
        assert_eq!(controls.poll(Screen::Menu), None);

        // Playing queue untouched by the menu polls
        assert_eq!(controls.poll(Screen::Playing), Some(Control::Quit));
        assert_eq!(controls.poll(Screen::Playing), None);

        // Game-over queue drains in order
        assert_eq!(controls.poll(Screen::GameOver), Some(Control::Retry));
        assert_eq!(controls.poll(Screen::GameOver), Some(Control::Quit));
        assert_eq!(controls.poll(Screen::GameOver), None);
    }
}
