//! Per-sentence token extraction
//!
//! Runs each sentence through the [`Tokenizer`] capability and keeps the
//! tokens that are neither stopwords nor too short. The survivors form the
//! sentence's document for the word co-occurrence matrix.

use super::stopwords::StopwordFilter;
use super::tokenizer::Tokenizer;
use crate::errors::Result;
use crate::types::{Sentence, TextRankConfig};

/// Filters tokenizer output into space-joined documents
pub struct TokenExtractor<'a> {
    tokenizer: &'a dyn Tokenizer,
    stopwords: StopwordFilter,
    min_token_chars: usize,
}

impl<'a> TokenExtractor<'a> {
    /// Create an extractor with an explicit stopword filter
    pub fn new(tokenizer: &'a dyn Tokenizer, stopwords: StopwordFilter) -> Self {
        Self {
            tokenizer,
            stopwords,
            min_token_chars: 2,
        }
    }

    /// Create an extractor from a config's language, extra stopwords and
    /// minimum token length
    pub fn from_config(tokenizer: &'a dyn Tokenizer, config: &TextRankConfig) -> Self {
        Self::new(
            tokenizer,
            StopwordFilter::with_extra(&config.language, &config.stopwords),
        )
        .with_min_token_chars(config.min_token_chars)
    }

    /// Set the minimum token length in characters
    pub fn with_min_token_chars(mut self, min_chars: usize) -> Self {
        self.min_token_chars = min_chars;
        self
    }

    /// Filtered tokens of one sentence
    pub fn tokens(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.tokenizer.extract_tokens(text)?;
        Ok(tokens
            .into_iter()
            .filter(|token| {
                token.chars().count() >= self.min_token_chars && !self.stopwords.is_stopword(token)
            })
            .collect())
    }

    /// Filtered tokens of one sentence joined by single spaces
    pub fn document(&self, text: &str) -> Result<String> {
        Ok(self.tokens(text)?.join(" "))
    }

    /// One document per sentence, in sentence order
    ///
    /// The first tokenizer failure aborts extraction.
    pub fn documents(&self, sentences: &[Sentence]) -> Result<Vec<String>> {
        sentences.iter().map(|s| self.document(&s.text)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TextRankError;
    use crate::nlp::tokenizer::UnicodeTokenizer;

    #[test]
    fn test_filters_stopwords_and_short_tokens() {
        let stopwords = StopwordFilter::from_list(&["the", "of", "is"]);
        let extractor = TokenExtractor::new(&UnicodeTokenizer, stopwords);

        let doc = extractor.document("The graph of a sentence is X.").unwrap();
        assert_eq!(doc, "graph sentence");
    }

    #[test]
    fn test_empty_document_when_nothing_survives() {
        let extractor = TokenExtractor::new(&UnicodeTokenizer, StopwordFilter::new("en"));

        assert_eq!(extractor.document("It is a.").unwrap(), "");
    }

    #[test]
    fn test_min_length_counts_characters() {
        let tokenizer =
            |text: &str| -> Result<Vec<String>> { Ok(text.split(' ').map(String::from).collect()) };
        let extractor = TokenExtractor::new(&tokenizer, StopwordFilter::new("ko"));

        // "가" is a stopword, "집" is one character, "문장" survives
        assert_eq!(extractor.document("가 집 문장 우리").unwrap(), "문장");
    }

    #[test]
    fn test_from_config_uses_extra_stopwords() {
        let config = TextRankConfig::default()
            .with_language("ko")
            .with_stopwords(["graph"]);
        let extractor = TokenExtractor::from_config(&UnicodeTokenizer, &config);

        assert_eq!(extractor.document("Graph ranking rules.").unwrap(), "ranking rules");
    }

    #[test]
    fn test_documents_in_sentence_order() {
        let extractor = TokenExtractor::new(&UnicodeTokenizer, StopwordFilter::empty());
        let sentences = vec![Sentence::new("Alpha beta.", 0), Sentence::new("Gamma.", 1)];

        let docs = extractor.documents(&sentences).unwrap();
        assert_eq!(docs, vec!["alpha beta", "gamma"]);
    }

    #[test]
    fn test_tokenizer_error_propagates() {
        let failing = |_: &str| -> Result<Vec<String>> {
            Err(TextRankError::tokenization("unsupported character"))
        };
        let extractor = TokenExtractor::new(&failing, StopwordFilter::empty());
        let sentences = vec![Sentence::new("Anything.", 0)];

        let err = extractor.documents(&sentences).unwrap_err();
        assert!(matches!(err, TextRankError::Tokenization(_)));
    }
}
