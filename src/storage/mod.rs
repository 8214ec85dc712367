//! SQLite persistence
//!
//! The [`Store`] holds only a database path. Every logical operation opens
//! its own connection, runs its statements, and drops the connection on
//! every exit path; nothing is cached between operations.
//!
//! Schema compatibility is gated on the `versions` table: a database
//! written by a different crate version is deleted and rebuilt from the
//! embedded dictionary.

pub mod queries;

use std::env;
use std::fs;
use std::path::PathBuf;

use rusqlite::{Connection, OptionalExtension, params};

use crate::error::{Error, Result};
use crate::wordlists;

/// Environment variable overriding the default database location.
pub const DB_PATH_ENV: &str = "PALABROS_DB_PATH";

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A persisted game row, before attempt reconstruction.
#[derive(Debug, Clone)]
pub struct GameRow {
    pub id: i64,
    pub word: String,
    pub date: String,
}

/// A persisted attempt row, before inspection derivation.
#[derive(Debug, Clone)]
pub struct AttemptRow {
    pub id: i64,
    pub word: String,
    pub matched: bool,
}

/// Handle to the on-disk game database.
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store for the given database file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the default location.
    ///
    /// Resolution order: `PALABROS_DB_PATH`, then `~/.palabros/games.db`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] when no home directory can be resolved.
    pub fn open_default() -> Result<Self> {
        let path = match env::var_os(DB_PATH_ENV) {
            Some(path) => PathBuf::from(path),
            None => env::home_dir()
                .ok_or_else(|| {
                    Error::Database(
                        "No se ha podido determinar el directorio del usuario".to_string(),
                    )
                })?
                .join(".palabros")
                .join("games.db"),
        };

        Ok(Self::new(path))
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.path).map_err(Into::into)
    }

    /// Initialize the database.
    ///
    /// Reuses an existing file when its recorded version matches the
    /// running crate version; otherwise deletes it and rebuilds the schema
    /// and the embedded dictionary from scratch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] on any filesystem or SQLite failure.
    pub fn init(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|err| Error::Database(err.to_string()))?;
        }

        if self.path.exists() {
            if self.schema_version()?.as_deref() == Some(VERSION) {
                return Ok(());
            }
            // Stale or pre-versioning database, rebuild it
            fs::remove_file(&self.path).map_err(|err| Error::Database(err.to_string()))?;
        }

        let conn = self.connect()?;
        conn.execute(queries::CREATE_VERSIONS_TABLE, [])?;
        conn.execute(queries::CREATE_WORDS_TABLE, [])?;
        conn.execute(queries::CREATE_GAMES_TABLE, [])?;
        conn.execute(queries::CREATE_ATTEMPTS_TABLE, [])?;
        conn.execute(queries::CREATE_GAMES_DATE_INDEX, [])?;
        conn.execute(queries::CREATE_VERSION, params![VERSION])?;
        drop(conn);

        self.populate_words(wordlists::WORDS)
    }

    /// Record version of an existing database, if any.
    fn schema_version(&self) -> Result<Option<String>> {
        let conn = self.connect()?;

        let tables: i64 =
            conn.query_row(queries::TABLE_EXISTS, params!["versions"], |row| row.get(0))?;
        if tables == 0 {
            return Ok(None);
        }

        conn.query_row(queries::GET_VERSION, [], |row| row.get(0))
            .optional()
            .map_err(Into::into)
    }

    /// Insert dictionary words, ignoring ones already present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] on SQLite failure.
    pub fn populate_words(&self, words: &[(&str, f64)]) -> Result<()> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(queries::INSERT_WORD)?;
            for &(word, frequency) in words {
                stmt.execute(params![word, frequency])?;
            }
        }
        tx.commit().map_err(Into::into)
    }

    /// Check dictionary membership. The caller normalizes the word first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] on SQLite failure.
    pub fn word_exists(&self, word: &str) -> Result<bool> {
        let conn = self.connect()?;
        let total: i64 = conn.query_row(queries::WORD_EXISTS, params![word], |row| row.get(0))?;
        Ok(total > 0)
    }

    /// Words never used as any game's target, most frequent first, at most
    /// `limit` of them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] on SQLite failure.
    pub fn unused_words(&self, limit: usize) -> Result<Vec<String>> {
        let conn = self.connect()?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut stmt = conn.prepare(queries::UNUSED_WORDS)?;
        let words = stmt
            .query_map(params![limit], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(words)
    }

    /// Look up the game for a calendar day key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] on SQLite failure.
    pub fn game_by_date(&self, date: &str) -> Result<Option<GameRow>> {
        let conn = self.connect()?;
        conn.query_row(queries::GET_GAME_BY_DATE, params![date], |row| {
            Ok(GameRow {
                id: row.get(0)?,
                word: row.get(1)?,
                date: row.get(2)?,
            })
        })
        .optional()
        .map_err(Into::into)
    }

    /// Insert a new game and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] on SQLite failure, including the
    /// unique-date violation when a game already exists for `date`.
    pub fn create_game(&self, word: &str, date: &str) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(queries::CREATE_GAME, params![word, date])?;
        Ok(conn.last_insert_rowid())
    }

    /// Attempts of a game in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] on SQLite failure.
    pub fn attempts_by_game(&self, game_id: i64) -> Result<Vec<AttemptRow>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(queries::GET_ATTEMPTS_BY_GAME)?;
        let attempts = stmt
            .query_map(params![game_id], |row| {
                Ok(AttemptRow {
                    id: row.get(0)?,
                    word: row.get(1)?,
                    matched: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<AttemptRow>>>()?;
        Ok(attempts)
    }

    /// Insert a new attempt and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] on SQLite failure.
    pub fn create_attempt(&self, game_id: i64, word: &str, matched: bool) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(queries::CREATE_ATTEMPT, params![game_id, word, matched])?;
        Ok(conn.last_insert_rowid())
    }
}
