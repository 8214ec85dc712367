//! Display functions for game results

use chrono::Local;
use colored::Colorize;

use super::formatters::{format_countdown, format_grid};
use crate::core::Game;

/// Print an error message for the player.
pub fn print_error(message: &str) {
    println!("\n{message}\n");
}

/// Print the game grid followed by its status line.
///
/// The status line is one of: a win message with the countdown to the
/// next puzzle, an in-progress message with the remaining attempts, or a
/// final-loss message revealing the target word with the countdown.
pub fn print_result(game: &Game) {
    let message = status_line(game);

    println!("{}", format_grid(game));
    println!("\n{message}\n");
}

fn status_line(game: &Game) -> String {
    let countdown = format_countdown(Local::now().time());

    if game.any_match() {
        format!(
            "¡Bien hecho! Siguiente palabra en {}.",
            countdown.bold()
        )
    } else if game.any_attempt_left() {
        format!(
            "¡Has fallado! Te quedan {} intentos.",
            game.attempts_left().to_string().bold()
        )
    } else {
        format!(
            "¡Tenías que acertar {}! Siguiente palabra en {}.",
            game.word.to_uppercase().bold(),
            countdown.bold()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Attempt, MAX_ATTEMPTS, inspect};

    fn attempt_for(game: &Game, id: i64, word: &str) -> Attempt {
        let chars = inspect(&game.word, word).unwrap();
        let matched = chars.iter().all(|c| c.valid);
        Attempt {
            id,
            word: word.to_string(),
            matched,
            chars,
        }
    }

    fn new_game() -> Game {
        Game::new(1, "coche".to_string(), "20260805".to_string())
    }

    #[test]
    fn status_line_on_win() {
        colored::control::set_override(false);

        let mut game = new_game();
        let attempt = attempt_for(&game, 1, "coche");
        game.attempts.push(attempt);

        let message = status_line(&game);
        assert!(message.starts_with("¡Bien hecho!"));
        assert!(message.contains("Siguiente palabra en"));
    }

    #[test]
    fn status_line_in_progress_counts_remaining() {
        colored::control::set_override(false);

        let mut game = new_game();
        let attempt = attempt_for(&game, 1, "leche");
        game.attempts.push(attempt);

        let message = status_line(&game);
        assert!(message.starts_with("¡Has fallado!"));
        assert!(message.contains("5 intentos"));
    }

    #[test]
    fn status_line_on_loss_reveals_the_target() {
        colored::control::set_override(false);

        let mut game = new_game();
        for id in 0..MAX_ATTEMPTS {
            let attempt = attempt_for(&game, id as i64, "leche");
            game.attempts.push(attempt);
        }

        let message = status_line(&game);
        assert!(message.starts_with("¡Tenías que acertar COCHE!"));
        assert!(message.contains("Siguiente palabra en"));
    }
}
