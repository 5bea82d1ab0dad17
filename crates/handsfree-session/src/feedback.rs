//! Spoken feedback phrases.

use handsfree_core::{AppliedMove, ErrorKind};

pub const WELCOME: &str = "welcome to hands-free chess. please make your move.";
pub const NOT_UNDERSTOOD: &str = "sorry, i did not understand that.";
pub const SERVICE_DOWN: &str = "sorry, my speech service is down.";
pub const TRY_AGAIN: &str = "invalid move, please try again.";
pub const NEW_GAME: &str = "new game. please make your move.";
pub const GOODBYE: &str = "goodbye.";

/// Phrase explaining why a move was rejected.
pub fn rejection(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::MalformedMove => "invalid move format.",
        ErrorKind::EmptySource => "invalid move, no piece at the source.",
        ErrorKind::OutOfBounds => "invalid move, target out of bounds.",
        ErrorKind::OwnPieceCapture => "invalid move, cannot capture your own piece.",
        ErrorKind::IllegalPieceMove => "invalid move for the piece.",
    }
}

/// Confirmation for an applied move, mentioning any capture.
pub fn applied(applied: &AppliedMove) -> String {
    match applied.captured {
        Some(captured) => format!("move played: {}. captured {captured}.", applied.mv),
        None => format!("move played: {}", applied.mv),
    }
}

/// Confirmation for a changed option.
pub fn option_set(name: &str, value: impl std::fmt::Display) -> String {
    format!("{name} set to {value}.")
}
