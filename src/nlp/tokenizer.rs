//! Tokenizer capability
//!
//! The ranking core never analyzes morphology itself. It asks a
//! [`Tokenizer`] for the meaningful base-form tokens of each sentence, so a
//! language-specific tagger can be plugged in without touching the pipeline.

use crate::errors::Result;
use unicode_segmentation::UnicodeSegmentation;

/// Produces meaningful word tokens for a sentence
pub trait Tokenizer {
    /// Return the base-form tokens of `text` that should take part in
    /// word ranking (typically nouns).
    fn extract_tokens(&self, text: &str) -> Result<Vec<String>>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Result<Vec<String>>,
{
    fn extract_tokens(&self, text: &str) -> Result<Vec<String>> {
        self(text)
    }
}

/// Language-agnostic fallback tokenizer
///
/// Splits on Unicode word boundaries (UAX #29), lowercases, and drops
/// tokens without any alphabetic character.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

impl Tokenizer for UnicodeTokenizer {
    fn extract_tokens(&self, text: &str) -> Result<Vec<String>> {
        Ok(text
            .unicode_words()
            .filter(|word| word.chars().any(char::is_alphabetic))
            .map(str::to_lowercase)
            .collect())
    }
}
