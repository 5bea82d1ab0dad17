//! Phrase parsing: session commands and move normalization.

use crate::error::SessionError;

/// An option changed by a `set` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// `set rate <words per minute>`
    Rate(u32),
    /// `set echo on|off`
    Echo(bool),
}

/// A parsed phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Anything that is not a session command, normalized into a move string.
    Move(String),
    /// `new game` / `reset` -- back to the starting position.
    NewGame,
    /// `board` / `show board` -- render the board again.
    ShowBoard,
    /// `set ...` -- change a session option.
    SetOption(SessionOption),
    /// `quit` / `exit` / `stop` -- end the session.
    Quit,
    /// Nothing left after normalization.
    Empty,
}

/// Parse one heard phrase into a [`Command`].
///
/// Session keywords are matched on the lowercased phrase with whitespace
/// collapsed. Everything else is treated as a move and normalized with
/// [`normalize_move`].
pub fn parse_command(phrase: &str, connectors: &[String]) -> Result<Command, SessionError> {
    let lowered = phrase.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Empty);
    }

    match tokens.as_slice() {
        ["new", "game"] | ["reset"] | ["restart"] => Ok(Command::NewGame),
        ["board"] | ["show", "board"] => Ok(Command::ShowBoard),
        ["quit"] | ["exit"] | ["stop"] => Ok(Command::Quit),
        ["set", rest @ ..] => parse_set(rest),
        _ => {
            let mv = normalize_move(phrase, connectors);
            if mv.is_empty() {
                Ok(Command::Empty)
            } else {
                Ok(Command::Move(mv))
            }
        }
    }
}

/// Turn a heard phrase into a bare move string.
///
/// Lowercases, drops all whitespace, then removes every connector word, so
/// `"E2 to E4"` becomes `"e2e4"`.
pub fn normalize_move(phrase: &str, connectors: &[String]) -> String {
    let mut mv: String = phrase
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    for connector in connectors.iter().filter(|c| !c.is_empty()) {
        mv = mv.replace(connector.to_lowercase().as_str(), "");
    }
    mv
}

/// Parse the arguments of a `set` command.
fn parse_set(tokens: &[&str]) -> Result<Command, SessionError> {
    let Some((&name, rest)) = tokens.split_first() else {
        return Err(SessionError::MissingOptionValue {
            name: String::new(),
        });
    };
    let value = rest.first().ok_or_else(|| SessionError::MissingOptionValue {
        name: name.to_string(),
    })?;
    let invalid = || SessionError::InvalidOptionValue {
        name: name.to_string(),
        value: value.to_string(),
    };

    let option = match name {
        "rate" => SessionOption::Rate(value.parse().map_err(|_| invalid())?),
        "echo" => match *value {
            "on" | "true" | "yes" => SessionOption::Echo(true),
            "off" | "false" | "no" => SessionOption::Echo(false),
            _ => return Err(invalid()),
        },
        _ => {
            return Err(SessionError::UnknownOption {
                name: name.to_string(),
            });
        }
    };
    Ok(Command::SetOption(option))
}
