//! Session configuration.

use crate::command::SessionOption;

/// Knobs adjustable at runtime via `set` commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Speech rate in words per minute, passed to the speaker.
    pub speech_rate: u32,
    /// Filler words removed from a phrase before it is read as a move.
    pub connectors: Vec<String>,
    /// Show the board after every applied move.
    pub echo_board: bool,
}

impl SessionConfig {
    /// Default speech rate in words per minute.
    pub const DEFAULT_SPEECH_RATE: u32 = 150;

    /// Apply a parsed `set` command.
    pub fn apply(&mut self, option: SessionOption) {
        match option {
            SessionOption::Rate(wpm) => self.speech_rate = wpm,
            SessionOption::Echo(on) => self.echo_board = on,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            speech_rate: Self::DEFAULT_SPEECH_RATE,
            connectors: vec!["to".to_string()],
            echo_board: true,
        }
    }
}
