//! Passphrase synthesis and validation: dictionary words joined by a
//! separator, with optional capitalization and a single digit suffix.

use std::collections::HashSet;

use rand::Rng;

use crate::data;
use crate::error::FormatForgeError;
use crate::length::{self, Bound};
use crate::Result;

/// Admissible word counts.
pub const WORD_COUNT_BOUND: Bound = Bound::new(2, 128);

/// Generate a passphrase of `min_words..=max_words` words drawn uniformly
/// (with replacement) from the word list, joined by `separator`.
///
/// `capitalize` upper-cases the first letter of every word; `append_digit`
/// appends one decimal digit to exactly one randomly chosen word, the digit
/// drawn from those not already present in the separator. The default word
/// list applies when `word_list` is `None`.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    min_words: usize,
    max_words: usize,
    separator: &str,
    capitalize: bool,
    append_digit: bool,
    word_list: Option<&[&str]>,
) -> Result<String> {
    check_separator(separator)?;
    let words = word_list.unwrap_or(data::WORDS);
    if words.is_empty() {
        return Err(FormatForgeError::feasibility("word list must not be empty"));
    }

    let count = length::select(rng, min_words, max_words, WORD_COUNT_BOUND)?;

    let mut chosen: Vec<String> = (0..count)
        .map(|_| {
            let word = words[rng.gen_range(0..words.len())];
            if capitalize {
                capitalize_first(word)
            } else {
                word.to_string()
            }
        })
        .collect();

    if append_digit {
        let digits: Vec<char> = ('0'..='9').filter(|d| !separator.contains(*d)).collect();
        if digits.is_empty() {
            return Err(FormatForgeError::feasibility(
                "separator contains every decimal digit, no digit suffix possible",
            ));
        }
        let digit = digits[rng.gen_range(0..digits.len())];
        let index = rng.gen_range(0..chosen.len());
        chosen[index].push(digit);
    }

    Ok(chosen.join(separator))
}

/// Validate a passphrase against the same parameters it was generated with:
/// word count in range, every segment present in the word list after
/// undoing the optional capitalization and the single digit suffix.
pub fn validate(
    passphrase: &str,
    min_words: usize,
    max_words: usize,
    separator: &str,
    capitalize: bool,
    append_digit: bool,
    word_list: Option<&[&str]>,
) -> Result<()> {
    check_separator(separator)?;
    let words = word_list.unwrap_or(data::WORDS);
    let known: HashSet<&str> = words.iter().copied().collect();

    let segments: Vec<&str> = passphrase.split(separator).collect();
    length::check(
        segments.len(),
        min_words,
        max_words,
        WORD_COUNT_BOUND,
        "words",
    )?;

    let mut errors = Vec::new();
    let mut digit_suffixes = 0usize;

    for segment in &segments {
        let mut word = (*segment).to_string();

        if append_digit {
            if let Some(last) = word.chars().last() {
                if last.is_ascii_digit() {
                    word.pop();
                    digit_suffixes += 1;
                }
            }
        }

        if capitalize {
            match word.chars().next() {
                Some(first) if first.is_ascii_uppercase() => {
                    word = capitalize_undo(&word);
                }
                _ => {
                    errors.push(FormatForgeError::grammar(format!(
                        "word {segment:?} is not capitalized"
                    )));
                    continue;
                }
            }
        }

        if !known.contains(word.as_str()) {
            errors.push(FormatForgeError::grammar(format!(
                "word {segment:?} not found in the word list"
            )));
        }
    }

    if append_digit && digit_suffixes != 1 {
        errors.push(FormatForgeError::grammar(format!(
            "expected exactly one word with a digit suffix, found {digit_suffixes}"
        )));
    }

    FormatForgeError::join(errors)
}

fn check_separator(separator: &str) -> Result<()> {
    if separator.is_empty() {
        return Err(FormatForgeError::grammar("separator must not be empty"));
    }
    if separator.contains(' ') {
        return Err(FormatForgeError::grammar("separator cannot contain a space"));
    }
    Ok(())
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn capitalize_undo(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng;

    #[test]
    fn test_round_trip_plain() {
        let mut r = rng::seeded(61);
        for _ in 0..500 {
            let phrase = generate(&mut r, 3, 6, "-", false, false, None).unwrap();
            validate(&phrase, 3, 6, "-", false, false, None)
                .unwrap_or_else(|e| panic!("{phrase:?}: {e}"));
        }
    }

    #[test]
    fn test_round_trip_capitalized_with_digit() {
        let mut r = rng::seeded(62);
        for _ in 0..500 {
            let phrase = generate(&mut r, 2, 8, ".", true, true, None).unwrap();
            validate(&phrase, 2, 8, ".", true, true, None)
                .unwrap_or_else(|e| panic!("{phrase:?}: {e}"));
        }
    }

    #[test]
    fn test_custom_word_list() {
        let mut r = rng::seeded(63);
        let list = ["alpha", "bravo", "charlie"];
        let phrase = generate(&mut r, 4, 4, "_", false, false, Some(&list)).unwrap();
        assert_eq!(phrase.split('_').count(), 4);
        for word in phrase.split('_') {
            assert!(list.contains(&word));
        }
        validate(&phrase, 4, 4, "_", false, false, Some(&list)).unwrap();
    }

    #[test]
    fn test_digit_avoids_separator_collision() {
        let mut r = rng::seeded(64);
        for _ in 0..200 {
            let phrase = generate(&mut r, 3, 3, "7", false, true, None).unwrap();
            // Splitting on "7" must still yield exactly three segments, so
            // the appended digit can never be a 7.
            assert_eq!(phrase.split('7').count(), 3, "{phrase:?}");
        }
    }

    #[test]
    fn test_word_count_bounds() {
        let mut r = rng::seeded(65);
        assert!(generate(&mut r, 1, 4, "-", false, false, None).unwrap_err().is_range());
        assert!(generate(&mut r, 2, 129, "-", false, false, None).unwrap_err().is_range());
        assert!(generate(&mut r, 6, 3, "-", false, false, None).unwrap_err().is_range());
    }

    #[test]
    fn test_space_separator_rejected() {
        let mut r = rng::seeded(66);
        assert!(generate(&mut r, 2, 4, " ", false, false, None).unwrap_err().is_grammar());
        assert!(generate(&mut r, 2, 4, "a b", false, false, None).unwrap_err().is_grammar());
    }

    #[test]
    fn test_validate_rejects_foreign_word() {
        let list = ["alpha", "bravo"];
        let err = validate("alpha-delta", 2, 2, "-", false, false, Some(&list)).unwrap_err();
        assert!(err.to_string().contains("delta"));
    }

    #[test]
    fn test_validate_requires_exactly_one_digit() {
        let list = ["alpha", "bravo"];
        assert!(validate("alpha-bravo", 2, 2, "-", false, true, Some(&list)).is_err());
        assert!(validate("alpha3-bravo", 2, 2, "-", false, true, Some(&list)).is_ok());
        assert!(validate("alpha3-bravo5", 2, 2, "-", false, true, Some(&list)).is_err());
    }

    #[test]
    fn test_validate_capitalization() {
        let list = ["alpha", "bravo"];
        assert!(validate("Alpha-Bravo", 2, 2, "-", true, false, Some(&list)).is_ok());
        assert!(validate("alpha-Bravo", 2, 2, "-", true, false, Some(&list)).is_err());
    }
}
