//! Session errors.

/// Errors that end or interrupt a session.
///
/// Rejected moves are not errors at this level; they are reported to the
/// player and the session carries on.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A `set` command names an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as heard.
        name: String,
    },

    /// A `set` command carries a value that cannot be parsed for its option.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// A `set` command without a value.
    #[error("missing value for option {name}")]
    MissingOptionValue {
        /// The option name.
        name: String,
    },

    /// Writing feedback or reading input failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

/// Why a listener produced no phrase this time.
#[derive(Debug, thiserror::Error)]
pub enum ListenError {
    /// Something was heard but could not be turned into text.
    #[error("speech was not understood")]
    Unrecognized,

    /// The recognition backend could not be reached.
    #[error("speech recognition service unavailable")]
    ServiceUnavailable,

    /// Reading the underlying input failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
