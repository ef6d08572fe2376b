//! Grab policy.
//!
//! Decides, once per tick, whether the pointer should be captured. The
//! application mode is read-only input supplied by the caller.

/// Top level application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Playing a level.
    Level,
    /// Between levels.
    Intermission,
    /// End of episode text or cast.
    Finale,
    /// Title screen or attract loop.
    #[default]
    DemoScreen,
    /// Fullscreen console, e.g. while connecting.
    FullConsole,
}

impl GameState {
    /// States in which the player is actively controlling the game.
    pub fn is_playing(&self) -> bool {
        matches!(self, GameState::Level | GameState::Intermission)
    }
}

/// Application mode flags consulted by the grab policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppState {
    /// A menu is open.
    pub menu_active: bool,
    /// The drop-down console is open.
    pub console_open: bool,
    /// The game is paused.
    pub paused: bool,
    /// Current top level state.
    pub game_state: GameState,
    /// A recorded demo is playing back.
    pub demo_playback: bool,
}

impl AppState {
    /// Plain gameplay: in a level, nothing open, not paused.
    pub fn playing() -> Self {
        Self {
            game_state: GameState::Level,
            ..Self::default()
        }
    }
}

/// Whether the pointer should be captured.
///
/// Never without focus. Always in fullscreen. Otherwise only while the
/// pointer is enabled, no menu, console or pause screen is up, and the
/// player is in a level or intermission that is not a demo playback.
pub fn should_grab(focused: bool, fullscreen: bool, pointer_disabled: bool, app: &AppState) -> bool {
    if !focused {
        return false;
    }
    if fullscreen {
        return true;
    }
    if pointer_disabled {
        return false;
    }
    if app.menu_active || app.console_open || app.paused {
        return false;
    }
    app.game_state.is_playing() && !app.demo_playback
}
