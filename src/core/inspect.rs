//! Attempt inspection
//!
//! Scores a guess letter by letter against the target word. Each target
//! letter is credited at most once: the scan runs left to right over the
//! guess and consumes one occurrence from a remaining-count map per credit,
//! so repeated guess letters beyond the target's surplus come out absent.

use rustc_hash::FxHashMap;

use crate::core::normalize;
use crate::error::{Error, Result};

/// Number of letters in every target and guess word.
pub const WORD_LENGTH: usize = 5;

/// Classification of a single guess letter against the target.
///
/// `valid` and `misplaced` are never both true; a position with neither
/// flag set is an absent letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharInspection {
    /// The guessed letter, uppercased.
    pub char: char,
    /// 0-indexed slot in the guess.
    pub position: usize,
    /// The letter occupies this exact position in the target.
    pub valid: bool,
    /// The letter exists elsewhere in the target with an unclaimed occurrence.
    pub misplaced: bool,
}

/// Inspect every char of `guess` against the target word `seed`.
///
/// The guess is normalized before comparison; the seed is the canonical
/// target and is used as stored. Lengths are counted in characters, so a
/// word like `araña` is five letters.
///
/// # Errors
///
/// Returns [`Error::Game`] when `seed` or `guess` is not exactly
/// [`WORD_LENGTH`] characters long, naming the offending argument.
///
/// # Examples
/// ```
/// use palabros::core::inspect;
///
/// let chars = inspect("coche", "leche").unwrap();
/// assert!(chars[2].valid); // C
/// assert!(chars[1].misplaced); // first E
/// assert!(!chars[4].valid && !chars[4].misplaced); // second E, already claimed
/// ```
pub fn inspect(seed: &str, guess: &str) -> Result<Vec<CharInspection>> {
    if seed.chars().count() != WORD_LENGTH {
        return Err(Error::Game(format!(
            "La palabra semilla tiene que tener {WORD_LENGTH} letras"
        )));
    }

    if guess.chars().count() != WORD_LENGTH {
        return Err(Error::Game(format!(
            "La palabra tiene que tener {WORD_LENGTH} letras"
        )));
    }

    let seed: Vec<char> = seed.to_uppercase().chars().collect();
    let guess: Vec<char> = normalize(guess).to_uppercase().chars().collect();

    let mut remaining: FxHashMap<char, u8> = FxHashMap::default();
    for &c in &seed {
        *remaining.entry(c).or_insert(0) += 1;
    }

    let mut result = Vec::with_capacity(WORD_LENGTH);
    for (position, &c) in guess.iter().enumerate() {
        let mut valid = false;
        let mut misplaced = false;

        if let Some(count) = remaining.get_mut(&c)
            && *count > 0
        {
            if seed[position] == c {
                valid = true;
            } else {
                misplaced = true;
            }
            *count -= 1;
        }

        result.push(CharInspection {
            char: c,
            position,
            valid,
            misplaced,
        });
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::codes;

    #[test]
    fn inspect_rejects_bad_seed_length() {
        let err = inspect("seed-word-with-bad-length", "leche").unwrap_err();
        assert_eq!(err.code(), codes::GAME);
        assert!(err.message().contains("semilla"));
    }

    #[test]
    fn inspect_rejects_bad_guess_length() {
        let err = inspect("leche", "user-word-with-bad-length").unwrap_err();
        assert_eq!(err.code(), codes::GAME);
        assert!(!err.message().contains("semilla"));
    }

    #[test]
    fn inspect_credits_each_seed_occurrence_once() {
        // coche has a single E at position 4; the guess's first E claims it,
        // so the E actually sitting on position 4 comes out absent.
        let chars = inspect("coche", "leche").unwrap();
        assert_eq!(chars.len(), 5);

        let expected = [
            ('L', false, false),
            ('E', false, true),
            ('C', true, false),
            ('H', true, false),
            ('E', false, false),
        ];

        for (i, (ch, valid, misplaced)) in expected.into_iter().enumerate() {
            assert_eq!(chars[i].char, ch);
            assert_eq!(chars[i].position, i);
            assert_eq!(chars[i].valid, valid, "valid flag at position {i}");
            assert_eq!(chars[i].misplaced, misplaced, "misplaced flag at position {i}");
        }
    }

    #[test]
    fn inspect_exact_guess_is_all_valid() {
        let chars = inspect("coche", "coche").unwrap();
        assert!(chars.iter().all(|c| c.valid));
        assert!(chars.iter().all(|c| !c.misplaced));
    }

    #[test]
    fn inspect_normalizes_and_uppercases_the_guess() {
        for guess in ["cóche", "COCHE", "Coche"] {
            let chars = inspect("coche", guess).unwrap();
            assert!(chars.iter().all(|c| c.valid), "guess {guess} should match");
        }
    }

    #[test]
    fn inspect_handles_enye_words() {
        let chars = inspect("araña", "araña").unwrap();
        assert_eq!(chars.len(), 5);
        assert!(chars.iter().all(|c| c.valid));
        assert_eq!(chars[3].char, 'Ñ');
    }

    #[test]
    fn inspect_flags_are_mutually_exclusive() {
        let pairs = [
            ("coche", "leche"),
            ("salsa", "pasas"),
            ("perro", "error"),
            ("araña", "tapas"),
            ("coche", "hecho"),
        ];

        for (seed, guess) in pairs {
            let chars = inspect(seed, guess).unwrap();
            let credited = chars.iter().filter(|c| c.valid || c.misplaced).count();

            assert!(credited <= WORD_LENGTH);
            for c in &chars {
                assert!(!(c.valid && c.misplaced), "{seed}/{guess} at {}", c.position);
            }
        }
    }

    #[test]
    fn inspect_output_is_ordered_by_position() {
        let chars = inspect("coche", "leche").unwrap();
        for (i, c) in chars.iter().enumerate() {
            assert_eq!(c.position, i);
        }
    }
}
