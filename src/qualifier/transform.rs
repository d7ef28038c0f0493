//! # Transform Engine
//!
//! Pure functions turning a quote's raw text into its display text, one per
//! [`VariantMode`]:
//!
//! - [`normalify`]: identity.
//! - [`uwuify`]: softens `l`/`r` into `w` and stutters words starting with `u`.
//! - [`pigliatinify`]: moves each word's leading consonants behind it.
//!
//! Length limits are passed in by the caller (see [`crate::config`]) so the
//! engine has no global state. Lengths are counted in `char`s.

use crate::error::{QualifierError, Result};
use crate::model::VariantMode;
use once_cell::sync::Lazy;
use regex::Regex;

/// Room kept free under the maximum length for one `u-` stutter.
pub const STUTTER_MARGIN: usize = 2;

/// A word preceded by whitespace that starts with `u` or `U`.
static STUTTER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s([Uu]\S+)").expect("Invalid regex pattern"));

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").expect("Invalid regex pattern"));

/// Output of a transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub text: String,
    /// Set when the transform stopped early to stay under the length limit.
    pub partial: bool,
}

impl Transformed {
    fn complete(text: String) -> Self {
        Self {
            text,
            partial: false,
        }
    }
}

/// Runs the transform selected by `mode`.
pub fn apply(mode: VariantMode, text: &str, max_length: usize) -> Result<Transformed> {
    match mode {
        VariantMode::Normal => Ok(Transformed::complete(normalify(text))),
        VariantMode::Uwu => uwuify(text, max_length),
        VariantMode::Piglatin => pigliatinify(text, max_length),
    }
}

pub fn normalify(text: &str) -> String {
    text.to_string()
}

/// Replaces `L`/`R` with `W` and `l`/`r` with `w`, then inserts a stutter
/// (`u-`) in front of every non-leading word starting with `u`/`U`. The
/// whitespace before a stuttered word is left as it was.
///
/// Stuttering stops as soon as the text grows past `max_length - 2`; the
/// result is then flagged as [`Transformed::partial`]. A quote left identical
/// to its input is rejected with [`QualifierError::QuoteNotModified`].
pub fn uwuify(text: &str, max_length: usize) -> Result<Transformed> {
    let softened: String = text
        .chars()
        .map(|c| match c {
            'L' | 'R' => 'W',
            'l' | 'r' => 'w',
            other => other,
        })
        .collect();

    let threshold = max_length.saturating_sub(STUTTER_MARGIN);
    let mut stuttered = softened.clone();
    let mut partial = false;

    // Offsets come from `softened`; each earlier stutter pushed them right
    // by STUTTER_MARGIN bytes (an ASCII letter and a hyphen).
    let mut stutters = 0;
    for caps in STUTTER_PATTERN.captures_iter(&softened) {
        if stuttered.chars().count() > threshold {
            partial = true;
            break;
        }
        let word = &caps[1];
        let at = caps.get_match().end() - word.len() + STUTTER_MARGIN * stutters;
        stuttered.insert_str(at, &format!("{}-", &word[..1]));
        stutters += 1;
    }

    if stuttered == text {
        return Err(QualifierError::QuoteNotModified);
    }

    Ok(Transformed {
        text: stuttered,
        partial,
    })
}

/// Pig latin: words starting with a vowel get `way`, others rotate their
/// leading consonants to the end and get `ay`. The joined result is
/// capitalized (first char upper, everything else lower).
///
/// A word without any vowel is treated as all-consonant prefix and simply
/// gets `ay` appended.
pub fn pigliatinify(text: &str, max_length: usize) -> Result<Transformed> {
    let joined = WORD_PATTERN
        .find_iter(text)
        .map(|word| pivot_word(word.as_str()))
        .collect::<Vec<_>>()
        .join(" ");

    let length = joined.chars().count();
    if length > max_length {
        return Err(QualifierError::TransformTooLong {
            length,
            max: max_length,
        });
    }

    Ok(Transformed::complete(capitalize(&joined)))
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

fn pivot_word(word: &str) -> String {
    let pivot = word
        .char_indices()
        .find(|(_, c)| is_vowel(*c))
        .map(|(i, _)| i)
        .unwrap_or(word.len());

    if pivot == 0 {
        format!("{}way", word)
    } else {
        format!("{}{}ay", &word[pivot..], &word[..pivot])
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = 50;

    #[test]
    fn normalify_is_identity() {
        for s in ["", "hi", "  spaced  out ", "Ünïcode ✓"] {
            assert_eq!(normalify(s), s);
        }
    }

    #[test]
    fn uwuify_substitutes_letters() {
        assert_eq!(uwuify("hello", MAX).unwrap().text, "hewwo");
        assert_eq!(uwuify("rawr", MAX).unwrap().text, "waww");
        assert_eq!(uwuify("LoRd", MAX).unwrap().text, "WoWd");
    }

    #[test]
    fn uwuify_does_not_stutter_leading_word() {
        let result = uwuify("umbrella", MAX).unwrap();
        assert_eq!(result.text, "umbwewwa");
        assert!(!result.partial);
    }

    #[test]
    fn uwuify_stutters_following_words() {
        let result = uwuify("I love unicorns", MAX).unwrap();
        assert_eq!(result.text, "I wove u-unicowns");

        let result = uwuify("see you Under the umbrella", MAX).unwrap();
        assert_eq!(result.text, "see you U-Undew the u-umbwewwa");
    }

    #[test]
    fn uwuify_stutters_words_without_substitutions() {
        assert_eq!(uwuify("a unit", MAX).unwrap().text, "a u-unit");
    }

    #[test]
    fn uwuify_keeps_whitespace_before_stutter() {
        assert_eq!(uwuify("a\tunit", MAX).unwrap().text, "a\tu-unit");
        assert_eq!(
            uwuify("a\u{3000}unit up", MAX).unwrap().text,
            "a\u{3000}u-unit u-up"
        );
    }

    #[test]
    fn uwuify_skips_single_letter_u() {
        assert!(matches!(
            uwuify("a u b", MAX),
            Err(QualifierError::QuoteNotModified)
        ));
    }

    #[test]
    fn uwuify_stops_stuttering_near_the_limit() {
        // 7 chars, threshold is 10 - 2 = 8: first stutter fits (7 -> 9),
        // second one would start from 9 > 8.
        let result = uwuify("a up us", 10).unwrap();
        assert_eq!(result.text, "a u-up us");
        assert!(result.partial);
    }

    #[test]
    fn uwuify_rejects_unmodified_quote() {
        assert!(matches!(
            uwuify("hi you", MAX),
            Err(QualifierError::QuoteNotModified)
        ));
        assert!(matches!(
            uwuify("", MAX),
            Err(QualifierError::QuoteNotModified)
        ));
    }

    #[test]
    fn pigliatinify_vowel_and_consonant_words() {
        assert_eq!(pigliatinify("apple", MAX).unwrap().text, "Appleway");
        assert_eq!(pigliatinify("banana", MAX).unwrap().text, "Ananabay");
        assert_eq!(pigliatinify("string", MAX).unwrap().text, "Ingstray");
    }

    #[test]
    fn pigliatinify_capitalizes_whole_string() {
        assert_eq!(
            pigliatinify("Hello World", MAX).unwrap().text,
            "Ellohay orldway"
        );
        assert_eq!(
            pigliatinify("  Eat   MORE  ", MAX).unwrap().text,
            "Eatway oremay"
        );
    }

    #[test]
    fn pigliatinify_vowelless_word_pivots_at_end() {
        assert_eq!(pigliatinify("xyz", MAX).unwrap().text, "Xyzay");
        assert_eq!(pigliatinify("my cat", MAX).unwrap().text, "Myay atcay");
    }

    #[test]
    fn pigliatinify_rejects_long_result() {
        // 9 words of 4 chars + 8 spaces = 44; each word grows by 2 -> 62.
        let text = vec!["cats"; 9].join(" ");
        assert!(matches!(
            pigliatinify(&text, MAX),
            Err(QualifierError::TransformTooLong { length: 62, max: 50 })
        ));
    }

    #[test]
    fn pigliatinify_empty_is_empty() {
        assert_eq!(pigliatinify("", MAX).unwrap().text, "");
    }

    #[test]
    fn apply_dispatches_by_mode() {
        assert_eq!(apply(VariantMode::Normal, "rawr", MAX).unwrap().text, "rawr");
        assert_eq!(apply(VariantMode::Uwu, "rawr", MAX).unwrap().text, "waww");
        assert_eq!(
            apply(VariantMode::Piglatin, "rawr", MAX).unwrap().text,
            "Awrray"
        );
    }
}
