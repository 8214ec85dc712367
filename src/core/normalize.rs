//! Diacritic normalization for guess comparison
//!
//! Player input may carry accents (`camión`) while the dictionary stores
//! accent-free words. Guesses are normalized before any comparison; target
//! words are already canonical and are never normalized.

/// Map accented vowels (and `ü`) to their unaccented counterparts.
///
/// Every other character passes through unchanged, in particular `ñ`,
/// which is a distinct letter, not a diacritic variant of `n`.
///
/// # Examples
/// ```
/// use palabros::core::normalize;
///
/// assert_eq!(normalize("ánfora"), "anfora");
/// assert_eq!(normalize("araña"), "araña");
/// ```
#[must_use]
pub fn normalize(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            other => other,
        })
        .collect()
}
