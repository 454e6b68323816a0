//! Rank-based sentence selection
//!
//! Ranking decides which sentences make it into the summary; document
//! order decides how they are presented.

use crate::types::{Sentence, Summary};

/// Selects the top-ranked sentences and renders them in document order
#[derive(Debug, Clone, Copy)]
pub struct SentenceSelector {
    /// Number of sentences to select
    pub num_sentences: usize,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSelector {
    /// Create a new selector picking three sentences
    pub fn new() -> Self {
        Self { num_sentences: 3 }
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.num_sentences = n;
        self
    }

    /// Pick the first `num_sentences` entries of `ranking` and return them
    /// sorted by sentence index
    ///
    /// `ranking` holds sentence indices in descending score order. Asking
    /// for more sentences than exist returns all of them.
    pub fn select<'a>(&self, sentences: &'a [Sentence], ranking: &[usize]) -> Vec<&'a Sentence> {
        let mut selected: Vec<&Sentence> = ranking
            .iter()
            .take(self.num_sentences)
            .filter_map(|&i| sentences.get(i))
            .collect();

        selected.sort_by_key(|s| s.index);
        selected
    }

    /// Select and render: newline-joined text when `verbose`, otherwise the
    /// list of sentence texts
    pub fn render(&self, sentences: &[Sentence], ranking: &[usize], verbose: bool) -> Summary {
        let texts: Vec<String> = self
            .select(sentences, ranking)
            .into_iter()
            .map(|s| s.text.clone())
            .collect();

        if verbose {
            Summary::Text(texts.join("\n"))
        } else {
            Summary::Sentences(texts)
        }
    }
}
