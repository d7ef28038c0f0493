use crate::error::{QualifierError, Result};
use crate::transform;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VariantMode {
    #[default]
    Normal,
    Uwu,
    Piglatin,
}

impl VariantMode {
    pub fn keyword(&self) -> &'static str {
        match self {
            VariantMode::Normal => "normal",
            VariantMode::Uwu => "uwu",
            VariantMode::Piglatin => "piglatin",
        }
    }
}

impl fmt::Display for VariantMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A quote as typed plus the text it is shown as.
///
/// The display text is computed once, at construction, so a `Quote` that
/// exists always has a valid rendering for its mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    raw_text: String,
    mode: VariantMode,
    display_text: String,
    partial: bool,
}

impl Quote {
    /// Validates the raw length and runs the transform for `mode`.
    ///
    /// Fails with [`QualifierError::QuoteTooLong`] when `raw_text` has more
    /// than `max_length` chars, or with the transform's own error.
    pub fn new(raw_text: impl Into<String>, mode: VariantMode, max_length: usize) -> Result<Self> {
        let raw_text = raw_text.into();
        let length = raw_text.chars().count();
        if length > max_length {
            return Err(QualifierError::QuoteTooLong {
                length,
                max: max_length,
            });
        }

        let transformed = transform::apply(mode, &raw_text, max_length)?;
        Ok(Self {
            raw_text,
            mode,
            display_text: transformed.text,
            partial: transformed.partial,
        })
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn mode(&self) -> VariantMode {
        self.mode
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// True when the transform had to stop early to respect the length limit.
    pub fn is_partial(&self) -> bool {
        self.partial
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_mode_displays_as_keyword() {
        assert_eq!(VariantMode::Uwu.to_string(), "uwu");
        assert_eq!(VariantMode::Piglatin.to_string(), "piglatin");
        assert_eq!(VariantMode::default(), VariantMode::Normal);
    }

    #[test]
    fn quote_accepts_max_length() {
        let text = "a".repeat(50);
        let quote = Quote::new(text.clone(), VariantMode::Normal, 50).unwrap();
        assert_eq!(quote.display_text(), text);
    }

    #[test]
    fn quote_rejects_over_max_length_in_every_mode() {
        let text = "a".repeat(51);
        for mode in [VariantMode::Normal, VariantMode::Uwu, VariantMode::Piglatin] {
            assert!(matches!(
                Quote::new(text.clone(), mode, 50),
                Err(QualifierError::QuoteTooLong { length: 51, max: 50 })
            ));
        }
    }

    #[test]
    fn quote_length_counts_chars_not_bytes() {
        let text = "é".repeat(50);
        assert!(Quote::new(text, VariantMode::Normal, 50).is_ok());
    }

    #[test]
    fn empty_normal_quote_is_allowed() {
        let quote = Quote::new("", VariantMode::Normal, 50).unwrap();
        assert!(quote.raw_text().is_empty());
        assert_eq!(quote.to_string(), "");
    }

    #[test]
    fn quote_displays_transformed_text() {
        let quote = Quote::new("hello", VariantMode::Uwu, 50).unwrap();
        assert_eq!(quote.raw_text(), "hello");
        assert_eq!(quote.mode(), VariantMode::Uwu);
        assert_eq!(quote.to_string(), "hewwo");
        assert!(!quote.is_partial());
    }

    #[test]
    fn transform_failure_fails_construction() {
        assert!(matches!(
            Quote::new("hi", VariantMode::Uwu, 50),
            Err(QualifierError::QuoteNotModified)
        ));
    }
}
