//! Integration tests for the session loop.
//!
//! Drives a session with a scripted listener and records everything the
//! speaker is asked to say or show.

use std::collections::VecDeque;
use std::io::Cursor;

use handsfree_core::{Board, Piece, Square};
use handsfree_session::{
    ConsoleSpeaker, Heard, LineListener, ListenError, Listener, Session, SessionConfig,
    SessionError, SessionSummary, Speaker,
};

/// Plays back a fixed list of listen results, then reports closed input.
struct ScriptedListener {
    script: VecDeque<Result<Heard, ListenError>>,
}

impl ScriptedListener {
    fn phrases(phrases: &[&str]) -> Self {
        Self {
            script: phrases
                .iter()
                .map(|p| Ok(Heard::Phrase(p.to_string())))
                .collect(),
        }
    }

    fn push_error(mut self, err: ListenError) -> Self {
        self.script.push_back(Err(err));
        self
    }
}

impl Listener for ScriptedListener {
    fn listen(&mut self) -> Result<Heard, ListenError> {
        self.script.pop_front().unwrap_or(Ok(Heard::Closed))
    }
}

#[derive(Default)]
struct RecordingSpeaker {
    said: Vec<String>,
    shown: Vec<Board>,
    rate: Option<u32>,
}

impl Speaker for RecordingSpeaker {
    fn say(&mut self, text: &str) -> Result<(), SessionError> {
        self.said.push(text.to_string());
        Ok(())
    }

    fn show(&mut self, board: &Board) -> Result<(), SessionError> {
        self.shown.push(*board);
        Ok(())
    }

    fn set_rate(&mut self, words_per_minute: u32) {
        self.rate = Some(words_per_minute);
    }
}

fn run(listener: ScriptedListener) -> (SessionSummary, Session<ScriptedListener, RecordingSpeaker>) {
    let mut session = Session::new(listener, RecordingSpeaker::default(), SessionConfig::default());
    let summary = session.run().unwrap();
    (summary, session)
}

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

#[test]
fn welcome_then_board() {
    let (summary, session) = run(ScriptedListener::phrases(&[]));
    let speaker = session.speaker();
    assert_eq!(speaker.said, ["welcome to hands-free chess. please make your move."]);
    assert_eq!(speaker.shown, [Board::starting_position()]);
    assert_eq!(speaker.rate, Some(150));
    assert_eq!(summary, SessionSummary::default());
}

#[test]
fn spoken_move_is_normalized_and_applied() {
    let (summary, session) = run(ScriptedListener::phrases(&["E2 to E4"]));
    assert_eq!(summary.applied, 1);
    assert_eq!(session.board().at(sq("e4")), Some(Piece::WHITE_PAWN));
    let speaker = session.speaker();
    assert_eq!(speaker.said.last().unwrap(), "move played: e2e4");
    // Starting render plus the echo after the move.
    assert_eq!(speaker.shown.len(), 2);
}

#[test]
fn rejected_move_announces_reason_and_retry() {
    let (summary, session) = run(ScriptedListener::phrases(&["a1 to a3", "e2 to e4"]));
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.applied, 1);
    let said = &session.speaker().said;
    assert_eq!(said[1], "invalid move for the piece.");
    assert_eq!(said[2], "invalid move, please try again.");
    assert_eq!(said[3], "move played: e2e4");
}

#[test]
fn each_rejection_kind_has_its_phrase() {
    let (summary, session) = run(ScriptedListener::phrases(&["e4e5", "a1a2", "zz99"]));
    assert_eq!(summary.rejected, 3);
    let said = &session.speaker().said;
    assert_eq!(said[1], "invalid move, no piece at the source.");
    assert_eq!(said[3], "invalid move, cannot capture your own piece.");
    assert_eq!(said[5], "invalid move format.");
    assert_eq!(*session.board(), Board::starting_position());
}

#[test]
fn capture_is_announced() {
    let (_, session) = run(ScriptedListener::phrases(&["e2e4", "d7d5", "e4 to d5"]));
    assert_eq!(
        session.speaker().said.last().unwrap(),
        "move played: e4d5. captured black pawn."
    );
}

#[test]
fn recognition_failures_keep_listening() {
    let listener = ScriptedListener::phrases(&[])
        .push_error(ListenError::Unrecognized)
        .push_error(ListenError::ServiceUnavailable);
    let (summary, session) = run(listener);
    assert_eq!(summary.unrecognized, 1);
    let said = &session.speaker().said;
    assert_eq!(said[1], "sorry, i did not understand that.");
    assert_eq!(said[2], "sorry, my speech service is down.");
}

#[test]
fn quit_stops_before_remaining_phrases() {
    let (summary, session) = run(ScriptedListener::phrases(&["quit", "e2e4"]));
    assert_eq!(summary.applied, 0);
    assert_eq!(session.speaker().said.last().unwrap(), "goodbye.");
    assert_eq!(*session.board(), Board::starting_position());
}

#[test]
fn new_game_resets_board() {
    let (summary, session) = run(ScriptedListener::phrases(&["e2e4", "new game"]));
    assert_eq!(summary.applied, 1);
    assert_eq!(*session.board(), Board::starting_position());
    assert_eq!(session.speaker().shown.last(), Some(&Board::starting_position()));
}

#[test]
fn set_commands_update_config() {
    let (summary, session) = run(ScriptedListener::phrases(&[
        "set rate 200",
        "set echo off",
        "g1 to f3",
        "set colour blue",
    ]));
    assert_eq!(summary.applied, 1);
    assert_eq!(summary.unrecognized, 1);
    assert_eq!(session.config().speech_rate, 200);
    assert!(!session.config().echo_board);
    let speaker = session.speaker();
    assert_eq!(speaker.rate, Some(200));
    assert_eq!(speaker.said[1], "rate set to 200.");
    assert_eq!(speaker.said[2], "echo set to off.");
    // No echo render after the move.
    assert_eq!(speaker.shown.len(), 1);
}

#[test]
fn console_session_end_to_end() {
    let input = Cursor::new("e2 to e4\n\nshow board\nquit\n");
    let mut session = Session::new(
        LineListener::new(input),
        ConsoleSpeaker::new(Vec::new()),
        SessionConfig::default(),
    );
    let summary = session.run().unwrap();
    assert_eq!(summary.applied, 1);
    assert_eq!(summary.unrecognized, 1);

    let board = *session.board();
    assert_eq!(board.placement(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR");
    assert_eq!(session.speaker().rate(), 150);
}

#[test]
fn console_session_survives_invalid_utf8_line() {
    let input = Cursor::new(&b"\xff\xfe\ne2e4\nquit\n"[..]);
    let mut session = Session::new(
        LineListener::new(input),
        ConsoleSpeaker::new(Vec::new()),
        SessionConfig::default(),
    );
    let summary = session.run().unwrap();
    assert_eq!(summary.unrecognized, 1);
    assert_eq!(summary.applied, 1);
    assert_eq!(
        session.board().placement(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"
    );
}
