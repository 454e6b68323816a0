//! Core types for textrank_summary
//!
//! This module defines the data structures shared by every stage of the
//! pipeline: sentences and their word bags, ranked outputs, and
//! configuration.

use crate::errors::{Result, TextRankError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

// ============================================================================
// Bag of words
// ============================================================================

/// A multiset of lowercased words (word -> count)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagOfWords {
    counts: FxHashMap<String, usize>,
    total: usize,
}

impl BagOfWords {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bag from the Unicode words of `text`
    pub fn from_text(text: &str) -> Self {
        let mut bag = Self::new();
        for word in text.unicode_words() {
            bag.add(&word.to_lowercase());
        }
        bag
    }

    /// Add one occurrence of `word`
    pub fn add(&mut self, word: &str) {
        *self.counts.entry(word.to_string()).or_insert(0) += 1;
        self.total += 1;
    }

    /// Number of occurrences of `word`
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Total number of occurrences across all words
    pub fn total(&self) -> usize {
        self.total
    }

    /// Check if the bag is empty
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Multiset Jaccard similarity: sum of minimum counts over sum of
    /// maximum counts. Returns 0.0 when both bags are empty.
    pub fn jaccard(&self, other: &BagOfWords) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let intersection: usize = small
            .counts
            .iter()
            .map(|(word, &count)| count.min(large.count(word)))
            .sum();

        // max(a, b) = a + b - min(a, b), summed over the union
        let union = self.total + other.total - intersection;
        if union == 0 {
            0.0
        } else {
            intersection as f64 / union as f64
        }
    }
}

// ============================================================================
// Sentence
// ============================================================================

/// A segmented sentence of the input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// The trimmed sentence text, terminated with a single period
    pub text: String,
    /// Position in deduplicated document order
    pub index: usize,
    /// Word multiset of the sentence text, used for similarity only
    pub bag_of_words: BagOfWords,
}

impl Sentence {
    /// Create a new sentence, deriving its bag of words from `text`
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        let text = text.into();
        let bag_of_words = BagOfWords::from_text(&text);
        Self {
            text,
            index,
            bag_of_words,
        }
    }

    /// Similarity between this sentence and another
    pub fn similarity(&self, other: &Sentence) -> f64 {
        self.bag_of_words.jaccard(&other.bag_of_words)
    }
}

// ============================================================================
// Outputs
// ============================================================================

/// A vocabulary word with its importance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedWord {
    /// The word
    pub word: String,
    /// Vocabulary index of the word
    pub index: usize,
    /// Solution of the word-rank linear system for this word
    pub score: f64,
}

/// A rendered summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Summary {
    /// Selected sentences joined by newlines
    Text(String),
    /// Selected sentences in document order
    Sentences(Vec<String>),
}

impl Summary {
    /// Selected sentences as a list, whichever form was rendered
    pub fn into_sentences(self) -> Vec<String> {
        match self {
            Summary::Text(text) if text.is_empty() => Vec::new(),
            Summary::Text(text) => text.split('\n').map(str::to_string).collect(),
            Summary::Sentences(sentences) => sentences,
        }
    }

    /// Selected sentences as a single newline-joined string
    pub fn into_text(self) -> String {
        match self {
            Summary::Text(text) => text,
            Summary::Sentences(sentences) => sentences.join("\n"),
        }
    }

    /// Check if no sentence was selected
    pub fn is_empty(&self) -> bool {
        match self {
            Summary::Text(text) => text.is_empty(),
            Summary::Sentences(sentences) => sentences.is_empty(),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for building a TextRank summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRankConfig {
    /// Damping factor for the word-rank linear solve
    pub word_damping: f64,
    /// Maximum power iterations for sentence PageRank
    pub max_iterations: usize,
    /// Per-node convergence tolerance for sentence PageRank
    pub convergence_threshold: f64,
    /// Language code for the built-in stopword list (e.g., "en", "ko")
    pub language: String,
    /// Additional stopwords (extends the built-in list)
    pub stopwords: Vec<String>,
    /// Minimum token length in characters; shorter tokens are discarded
    pub min_token_chars: usize,
    /// Default number of sentences in a summary
    pub summary_count: usize,
}

impl Default for TextRankConfig {
    fn default() -> Self {
        Self {
            word_damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-6,
            language: "en".to_string(),
            stopwords: Vec::new(),
            min_token_chars: 2,
            summary_count: 3,
        }
    }
}

impl TextRankConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // d = 1 removes the teleport term and can make the system singular
        if !(0.0..1.0).contains(&self.word_damping) {
            return Err(TextRankError::invalid_config(format!(
                "word_damping must be in [0, 1), got {}",
                self.word_damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(TextRankError::invalid_config("max_iterations must be > 0"));
        }

        if self.convergence_threshold <= 0.0 {
            return Err(TextRankError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        if self.min_token_chars == 0 {
            return Err(TextRankError::invalid_config("min_token_chars must be > 0"));
        }

        Ok(())
    }

    /// Builder method: set word-rank damping factor
    pub fn with_word_damping(mut self, damping: f64) -> Self {
        self.word_damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: set minimum token length
    pub fn with_min_token_chars(mut self, min_chars: usize) -> Self {
        self.min_token_chars = min_chars;
        self
    }

    /// Builder method: set default summary length
    pub fn with_summary_count(mut self, count: usize) -> Self {
        self.summary_count = count;
        self
    }
}
