//! Play command
//!
//! Submits a guess against today's puzzle. Structural checks on the guess
//! (length, dictionary membership) run before the game is touched, so a
//! rejected word never creates or mutates a game.

use super::CommandOutcome;
use crate::core::WORD_LENGTH;
use crate::daily::Daily;
use crate::error::Result;
use crate::output;
use crate::storage::Store;

/// Try to guess today's word.
///
/// Fetches or creates today's game, submits the guess when the game is
/// still in progress, and renders the resulting grid. Once the game is
/// terminal the guess is ignored and the final state is re-rendered.
///
/// # Errors
///
/// Returns [`Error::Database`](crate::error::Error::Database) on store
/// failure and [`Error::Game`](crate::error::Error::Game) on structurally
/// invalid input reaching the inspector.
pub fn run_play(store: &Store, word: &str) -> Result<CommandOutcome> {
    if word.chars().count() != WORD_LENGTH {
        output::print_error(&format!("La palabra tiene que tener {WORD_LENGTH} letras"));
        return Ok(CommandOutcome::Rejected);
    }

    let daily = Daily::new(store);

    if !daily.word_exists(word)? {
        output::print_error(&format!("La palabra {word} no existe en el diccionario"));
        return Ok(CommandOutcome::Rejected);
    }

    let mut game = daily.current_game()?;

    if !game.any_match() && game.any_attempt_left() {
        let attempt = daily.submit(&game, word)?;
        game.attempts.push(attempt);
    }

    output::print_result(&game);
    Ok(CommandOutcome::Completed)
}
