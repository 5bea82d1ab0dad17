//! The listen / apply / announce loop around a single board.

use tracing::{debug, info, warn};

use handsfree_core::Board;

use crate::command::{Command, SessionOption, parse_command};
use crate::config::SessionConfig;
use crate::error::{ListenError, SessionError};
use crate::feedback;
use crate::speech::{Heard, Listener, Speaker};

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Moves the board accepted.
    pub applied: u32,
    /// Moves the board rejected.
    pub rejected: u32,
    /// Phrases that could not be recognized or parsed.
    pub unrecognized: u32,
}

/// One game session: a board plus the listener and speaker that drive it.
///
/// The board is owned by the session and lives exactly as long as it does.
pub struct Session<L, S> {
    board: Board,
    config: SessionConfig,
    listener: L,
    speaker: S,
    summary: SessionSummary,
}

impl<L: Listener, S: Speaker> Session<L, S> {
    /// Create a session on the starting position.
    pub fn new(listener: L, speaker: S, config: SessionConfig) -> Self {
        Self {
            board: Board::starting_position(),
            config,
            listener,
            speaker,
            summary: SessionSummary::default(),
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The speaker, e.g. to inspect what was said.
    pub fn speaker(&self) -> &S {
        &self.speaker
    }

    /// Run until the player quits or the listener closes.
    ///
    /// Rejected moves and unrecognized phrases are announced and the loop
    /// keeps listening; only I/O failures end it early.
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        self.speaker.set_rate(self.config.speech_rate);
        self.speaker.say(feedback::WELCOME)?;
        self.speaker.show(&self.board)?;

        loop {
            debug!("listening for a move");
            let phrase = match self.listener.listen() {
                Ok(Heard::Phrase(phrase)) => phrase,
                Ok(Heard::Closed) => break,
                Err(ListenError::Unrecognized) => {
                    self.summary.unrecognized += 1;
                    self.speaker.say(feedback::NOT_UNDERSTOOD)?;
                    continue;
                }
                Err(ListenError::ServiceUnavailable) => {
                    warn!("speech service unavailable");
                    self.speaker.say(feedback::SERVICE_DOWN)?;
                    continue;
                }
                Err(ListenError::Io { source }) => return Err(source.into()),
            };
            info!(%phrase, "heard phrase");

            match parse_command(&phrase, &self.config.connectors) {
                Ok(Command::Move(text)) => self.handle_move(&text)?,
                Ok(Command::NewGame) => self.handle_new_game()?,
                Ok(Command::ShowBoard) => self.speaker.show(&self.board)?,
                Ok(Command::SetOption(option)) => self.handle_set_option(option)?,
                Ok(Command::Quit) => {
                    self.speaker.say(feedback::GOODBYE)?;
                    break;
                }
                Ok(Command::Empty) => {
                    self.summary.unrecognized += 1;
                    self.speaker.say(feedback::NOT_UNDERSTOOD)?;
                }
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    self.summary.unrecognized += 1;
                    self.speaker.say(feedback::NOT_UNDERSTOOD)?;
                }
            }
        }

        info!(
            applied = self.summary.applied,
            rejected = self.summary.rejected,
            unrecognized = self.summary.unrecognized,
            "session finished"
        );
        Ok(self.summary)
    }

    fn handle_move(&mut self, text: &str) -> Result<(), SessionError> {
        match self.board.apply(text) {
            Ok(applied) => {
                self.summary.applied += 1;
                self.speaker.say(&feedback::applied(&applied))?;
                if self.config.echo_board {
                    self.speaker.show(&self.board)?;
                }
            }
            Err(err) => {
                self.summary.rejected += 1;
                info!(input = text, error = %err, "move rejected");
                self.speaker.say(feedback::rejection(err.kind()))?;
                self.speaker.say(feedback::TRY_AGAIN)?;
            }
        }
        Ok(())
    }

    fn handle_new_game(&mut self) -> Result<(), SessionError> {
        self.board = Board::starting_position();
        self.speaker.say(feedback::NEW_GAME)?;
        self.speaker.show(&self.board)
    }

    fn handle_set_option(&mut self, option: SessionOption) -> Result<(), SessionError> {
        self.config.apply(option);
        match option {
            SessionOption::Rate(wpm) => {
                self.speaker.set_rate(wpm);
                self.speaker.say(&feedback::option_set("rate", wpm))
            }
            SessionOption::Echo(on) => {
                let value = if on { "on" } else { "off" };
                self.speaker.say(&feedback::option_set("echo", value))
            }
        }
    }
}
