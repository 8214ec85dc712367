//! Error taxonomy
//!
//! Exactly two failure kinds exist: storage problems and structurally
//! invalid game input. Both carry a stable machine-readable code alongside
//! the human-readable (Spanish) message shown to the player.

use thiserror::Error;

/// Stable machine-readable error codes.
pub mod codes {
    /// Storage unreachable, corrupt, or a required record missing.
    pub const DATABASE: &str = "palabros.databaseError";
    /// Structurally invalid input to the game logic.
    pub const GAME: &str = "palabros.gameError";
}

/// The closed set of domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The backing store failed or could not produce a required record.
    #[error("{0}")]
    Database(String),

    /// The caller supplied structurally invalid input (wrong word length).
    #[error("{0}")]
    Game(String),
}

impl Error {
    /// Get the stable code identifying this error kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Database(_) => codes::DATABASE,
            Self::Game(_) => codes::GAME,
        }
    }

    /// Get the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Database(message) | Self::Game(message) => message,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
