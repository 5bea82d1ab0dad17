//! Input and output seams of a session.
//!
//! A session talks to the player only through a [`Listener`] and a
//! [`Speaker`] it owns. Speech recognition and text-to-speech backends plug
//! in here; the console implementations below read and write plain lines.

use std::io::{BufRead, Write};

use tracing::debug;

use handsfree_core::Board;

use crate::error::{ListenError, SessionError};

/// What a listener heard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Heard {
    /// A phrase, as recognized text.
    Phrase(String),
    /// The input is exhausted; the session should end.
    Closed,
}

/// Source of player phrases.
pub trait Listener {
    /// Wait for the next phrase.
    fn listen(&mut self) -> Result<Heard, ListenError>;
}

/// Sink for spoken feedback and board renders.
pub trait Speaker {
    /// Speak one utterance.
    fn say(&mut self, text: &str) -> Result<(), SessionError>;

    /// Present the board to the player.
    fn show(&mut self, board: &Board) -> Result<(), SessionError>;

    /// Change the speech rate in words per minute. Ignored by default.
    fn set_rate(&mut self, _words_per_minute: u32) {}
}

/// Reads one phrase per line from a buffered reader.
///
/// Blank lines and lines that are not valid UTF-8 count as speech that
/// was not understood.
pub struct LineListener<R> {
    reader: R,
    line: Vec<u8>,
}

impl<R: BufRead> LineListener<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
        }
    }
}

impl<R: BufRead> Listener for LineListener<R> {
    fn listen(&mut self) -> Result<Heard, ListenError> {
        self.line.clear();
        if self.reader.read_until(b'\n', &mut self.line)? == 0 {
            debug!("input closed");
            return Ok(Heard::Closed);
        }
        let Ok(text) = std::str::from_utf8(&self.line) else {
            debug!(len = self.line.len(), "discarding line that is not valid UTF-8");
            return Err(ListenError::Unrecognized);
        };
        let phrase = text.trim();
        if phrase.is_empty() {
            return Err(ListenError::Unrecognized);
        }
        Ok(Heard::Phrase(phrase.to_string()))
    }
}

/// Writes every utterance as a line of text, and boards as an 8x8 grid.
pub struct ConsoleSpeaker<W> {
    out: W,
    rate: u32,
}

impl<W: Write> ConsoleSpeaker<W> {
    pub fn new(out: W) -> Self {
        Self { out, rate: 0 }
    }

    /// Last speech rate requested by the session.
    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Speaker for ConsoleSpeaker<W> {
    fn say(&mut self, text: &str) -> Result<(), SessionError> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    fn show(&mut self, board: &Board) -> Result<(), SessionError> {
        writeln!(self.out, "{}", board.pretty())?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn set_rate(&mut self, words_per_minute: u32) {
        self.rate = words_per_minute;
    }
}
