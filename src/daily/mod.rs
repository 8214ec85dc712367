//! Daily game lifecycle
//!
//! Fetch-or-create of today's puzzle, guess submission, and target-word
//! selection. Inspections are never persisted: reconstructing a game
//! re-runs the inspector over the stored guesses.

use chrono::Local;
use rand::prelude::IndexedRandom;

use crate::core::{Attempt, Game, inspect, normalize};
use crate::error::{Error, Result};
use crate::storage::Store;

/// Target-word selection policy.
///
/// Candidates are the words never used as a previous day's target, ranked
/// by corpus frequency; the daily word is drawn uniformly from the top
/// `pool_size` of them.
#[derive(Debug, Clone, Copy)]
pub struct SelectionPolicy {
    /// Number of top-frequency unused words eligible for selection.
    pub pool_size: usize,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self { pool_size: 50 }
    }
}

/// Orchestrates one day's game against the store.
pub struct Daily<'a> {
    store: &'a Store,
    policy: SelectionPolicy,
}

impl<'a> Daily<'a> {
    /// Create a manager with the default selection policy.
    #[must_use]
    pub fn new(store: &'a Store) -> Self {
        Self::with_policy(store, SelectionPolicy::default())
    }

    /// Create a manager with an explicit selection policy.
    #[must_use]
    pub const fn with_policy(store: &'a Store, policy: SelectionPolicy) -> Self {
        Self { store, policy }
    }

    /// Today's game, created on first access.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] when the store fails or no target word
    /// can be selected for a new game.
    pub fn current_game(&self) -> Result<Game> {
        let today = Local::now().format("%Y%m%d").to_string();
        self.game_for_date(&today)
    }

    /// The game for a calendar day key, created if absent.
    ///
    /// A fresh game starts with zero attempts. An existing one is rebuilt
    /// from its persisted attempts in insertion order, re-running the
    /// inspector against the stored target for each.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] when the store fails or no target word
    /// can be selected.
    pub fn game_for_date(&self, date: &str) -> Result<Game> {
        let Some(row) = self.store.game_by_date(date)? else {
            let word = self.random_word()?;
            let id = self.store.create_game(&word, date)?;
            return Ok(Game::new(id, word, date.to_string()));
        };

        let mut game = Game::new(row.id, row.word, row.date);
        for attempt in self.store.attempts_by_game(game.id)? {
            let chars = inspect(&game.word, &attempt.word)?;
            game.attempts.push(Attempt {
                id: attempt.id,
                word: attempt.word,
                matched: attempt.matched,
                chars,
            });
        }

        Ok(game)
    }

    /// Submit a guess against an in-progress game.
    ///
    /// The caller has already verified that the game is in progress and
    /// that the guess is a dictionary word of the right length. The word is
    /// stored exactly as typed; only the computed `matched` flag joins it.
    /// The returned attempt is not appended to `game.attempts`; the
    /// caller owns that list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Game`] on a malformed word length and
    /// [`Error::Database`] when the attempt cannot be persisted.
    pub fn submit(&self, game: &Game, word: &str) -> Result<Attempt> {
        let chars = inspect(&game.word, word)?;
        let matched = chars.iter().all(|c| c.valid);

        let id = self.store.create_attempt(game.id, word, matched)?;

        Ok(Attempt {
            id,
            word: word.to_string(),
            matched,
            chars,
        })
    }

    /// Dictionary membership for a player-typed word.
    ///
    /// The word is normalized before the lookup, so accented input matches
    /// its canonical dictionary form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] on store failure.
    pub fn word_exists(&self, word: &str) -> Result<bool> {
        self.store.word_exists(&normalize(word))
    }

    /// Pick a target word for a new game.
    fn random_word(&self) -> Result<String> {
        let pool = self.store.unused_words(self.policy.pool_size)?;

        pool.choose(&mut rand::rng()).cloned().ok_or_else(|| {
            Error::Database("No se ha podido generar una palabra para el juego de hoy".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameStatus, MAX_ATTEMPTS, WORD_LENGTH};
    use crate::error::codes;
    use rusqlite::Connection;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("games.db"));
        store.init().unwrap();
        (dir, store)
    }

    #[test]
    fn game_for_date_creates_with_zero_attempts() {
        let (_dir, store) = test_store();
        let daily = Daily::new(&store);

        let game = daily.game_for_date("20260805").unwrap();

        assert!(game.attempts.is_empty());
        assert_eq!(game.date, "20260805");
        assert_eq!(game.max_attempts, MAX_ATTEMPTS);
        assert_eq!(game.word.chars().count(), WORD_LENGTH);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn game_for_date_is_idempotent() {
        let (_dir, store) = test_store();
        let daily = Daily::new(&store);

        let first = daily.game_for_date("20260805").unwrap();
        let second = daily.game_for_date("20260805").unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.word, second.word);
    }

    #[test]
    fn current_game_is_idempotent() {
        let (_dir, store) = test_store();
        let daily = Daily::new(&store);

        let first = daily.current_game().unwrap();
        let second = daily.current_game().unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.word, second.word);
    }

    #[test]
    fn submit_persists_and_returns_inspections() {
        let (_dir, store) = test_store();
        let daily = Daily::new(&store);

        let id = store.create_game("coche", "20260805").unwrap();
        let game = daily.game_for_date("20260805").unwrap();
        assert_eq!(game.id, id);

        let miss = daily.submit(&game, "leche").unwrap();
        assert!(!miss.matched);
        assert_eq!(miss.chars.len(), WORD_LENGTH);
        assert_eq!(miss.word, "leche");

        let hit = daily.submit(&game, "coche").unwrap();
        assert!(hit.matched);
        assert!(hit.chars.iter().all(|c| c.valid));
        assert!(miss.id < hit.id);
    }

    #[test]
    fn submit_keeps_the_word_as_typed() {
        let (_dir, store) = test_store();
        let daily = Daily::new(&store);

        store.create_game("coche", "20260805").unwrap();
        let game = daily.game_for_date("20260805").unwrap();

        let attempt = daily.submit(&game, "Cóche").unwrap();
        assert_eq!(attempt.word, "Cóche");
        assert!(attempt.matched);

        let reloaded = daily.game_for_date("20260805").unwrap();
        assert_eq!(reloaded.attempts[0].word, "Cóche");
    }

    #[test]
    fn reconstruction_rederives_identical_inspections() {
        let (_dir, store) = test_store();
        let daily = Daily::new(&store);

        store.create_game("coche", "20260805").unwrap();
        let game = daily.game_for_date("20260805").unwrap();

        let submitted = vec![
            daily.submit(&game, "leche").unwrap(),
            daily.submit(&game, "noche").unwrap(),
            daily.submit(&game, "coche").unwrap(),
        ];

        let reloaded = daily.game_for_date("20260805").unwrap();

        assert_eq!(reloaded.attempts, submitted);
        assert_eq!(reloaded.status(), GameStatus::Won);
    }

    #[test]
    fn selection_skips_used_targets() {
        let (_dir, store) = test_store();
        let policy = SelectionPolicy { pool_size: 3 };
        let daily = Daily::with_policy(&store, policy);

        let top = store.unused_words(3).unwrap();
        for (i, word) in top.iter().enumerate() {
            store.create_game(word, &format!("0000000{i}")).unwrap();
        }

        let next = store.unused_words(3).unwrap();
        for _ in 0..20 {
            let word = daily.random_word().unwrap();
            assert!(!top.contains(&word));
            assert!(next.contains(&word));
        }
    }

    #[test]
    fn selection_fails_on_empty_pool() {
        let (dir, store) = test_store();

        let conn = Connection::open(dir.path().join("games.db")).unwrap();
        conn.execute("DELETE FROM words;", []).unwrap();
        drop(conn);

        let daily = Daily::new(&store);
        let err = daily.game_for_date("20260805").unwrap_err();

        assert_eq!(err.code(), codes::DATABASE);
        assert!(err.message().contains("palabra para el juego de hoy"));
    }

    #[test]
    fn word_exists_normalizes_player_input() {
        let (_dir, store) = test_store();
        let daily = Daily::new(&store);

        assert!(daily.word_exists("coche").unwrap());
        assert!(daily.word_exists("cóche").unwrap());
        assert!(!daily.word_exists("xxxxx").unwrap());
    }
}
