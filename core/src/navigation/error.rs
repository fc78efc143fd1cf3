use crate::navigation::key::KeyChord;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewportError {
    #[error("origin row {row} is past the end of a {lines}-line buffer")]
    OriginOutOfRange { row: usize, lines: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("unknown panel '{0}'")]
    UnknownPanel(String),
    #[error("no previous view to return to")]
    EmptyHistory,
    #[error(
        "duplicate binding for '{chord}' in scope '{scope}': '{incoming}' conflicts with '{existing}'"
    )]
    DuplicateBinding {
        scope: String,
        chord: KeyChord,
        existing: String,
        incoming: String,
    },
    #[error("action '{action}' failed: {message}")]
    Handler { action: String, message: String },
    #[error("invalid navigation config: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Viewport(#[from] ViewportError),
}

impl NavError {
    pub fn handler(action: impl Into<String>, message: impl Into<String>) -> Self {
        NavError::Handler {
            action: action.into(),
            message: message.into(),
        }
    }
}
