//! Word list for the daily game
//!
//! Provides the embedded dictionary compiled into the binary. The store
//! copies it into the `words` table on first initialization.

mod embedded;

pub use embedded::WORDS;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_LENGTH;
    use std::collections::HashSet;

    #[test]
    fn words_are_five_letters_in_canonical_form() {
        for &(word, _) in WORDS {
            assert_eq!(
                word.chars().count(),
                WORD_LENGTH,
                "Word '{word}' is not {WORD_LENGTH} letters"
            );
            assert!(
                word.chars().all(|c| c == 'ñ' || c.is_ascii_lowercase()),
                "Word '{word}' is not canonical"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: HashSet<_> = WORDS.iter().map(|&(word, _)| word).collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn frequencies_are_positive_and_descending() {
        for pair in WORDS.windows(2) {
            assert!(pair[0].1 > pair[1].1, "'{}' out of order", pair[1].0);
        }
        assert!(WORDS.iter().all(|&(_, frequency)| frequency > 0.0));
    }

    #[test]
    fn known_members() {
        let words: HashSet<_> = WORDS.iter().map(|&(word, _)| word).collect();
        assert!(words.contains("coche"));
        assert!(words.contains("leche"));
        assert!(!words.contains("movil"));
    }
}
