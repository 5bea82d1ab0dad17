//! Hands-free play loop: phrase parsing, spoken feedback, and the session
//! that drives a board from a listener to a speaker.

pub mod command;
pub mod config;
pub mod error;
pub mod feedback;
pub mod session;
pub mod speech;

pub use command::{Command, SessionOption};
pub use config::SessionConfig;
pub use error::{ListenError, SessionError};
pub use session::{Session, SessionSummary};
pub use speech::{ConsoleSpeaker, Heard, LineListener, Listener, Speaker};
