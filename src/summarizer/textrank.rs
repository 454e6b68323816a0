//! End-to-end TextRank over one input text
//!
//! [`TextRank`] runs the whole pipeline once at construction time:
//!
//! 1. Segment the text into deduplicated sentences
//! 2. Extract filtered tokens per sentence via the [`Tokenizer`]
//! 3. Build the sentence similarity graph and the word co-occurrence matrix
//! 4. Rank sentences (PageRank) and words (linear solve)
//!
//! Everything it holds afterwards is read-only; summaries and keywords are
//! cheap views over the stored rankings.

use super::selector::SentenceSelector;
use crate::errors::Result;
use crate::graph::builder::GraphBuilder;
use crate::graph::cooccurrence::{CooccurrenceMatrix, Vocabulary};
use crate::graph::csr::CsrGraph;
use crate::nlp::extractor::TokenExtractor;
use crate::nlp::segmenter::segment;
use crate::nlp::tokenizer::{Tokenizer, UnicodeTokenizer};
use crate::pagerank::linear::{LinearWordRank, WordRankResult};
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::PageRankResult;
use crate::types::{RankedWord, Sentence, Summary, TextRankConfig};

/// Enter a tracing span for a build stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("textrank_stage", stage = $name).entered();
    };
}

/// Sentence and word rankings for a single text
#[derive(Debug, Clone)]
pub struct TextRank {
    config: TextRankConfig,
    sentences: Vec<Sentence>,
    documents: Vec<String>,
    sentence_graph: CsrGraph,
    sentence_rank: PageRankResult,
    ranked_sentences: Vec<usize>,
    cooccurrence: CooccurrenceMatrix,
    word_rank: WordRankResult,
    ranked_words: Vec<usize>,
}

impl TextRank {
    /// Rank `text` with the default config and [`UnicodeTokenizer`]
    pub fn new(text: &str) -> Result<Self> {
        Self::with_config(text, TextRankConfig::default())
    }

    /// Rank `text` with a custom config and [`UnicodeTokenizer`]
    pub fn with_config(text: &str, config: TextRankConfig) -> Result<Self> {
        Self::with_tokenizer(text, &UnicodeTokenizer, config)
    }

    /// Rank `text` using a caller-supplied tokenizer
    ///
    /// Tokenizer failures abort the build and are returned unchanged.
    pub fn with_tokenizer(
        text: &str,
        tokenizer: &dyn Tokenizer,
        config: TextRankConfig,
    ) -> Result<Self> {
        config.validate()?;

        let sentences = {
            trace_stage!("segment");
            segment(text)
        };

        let documents = {
            trace_stage!("extract");
            TokenExtractor::from_config(tokenizer, &config).documents(&sentences)?
        };

        let sentence_graph = {
            trace_stage!("sentence_graph");
            CsrGraph::from_builder(&GraphBuilder::from_sentences(&sentences))
        };

        let cooccurrence = {
            trace_stage!("word_matrix");
            CooccurrenceMatrix::from_documents(&documents)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = sentences.len(),
            edges = sentence_graph.num_edges() / 2,
            vocabulary = cooccurrence.size(),
            "built textrank graphs"
        );

        let sentence_rank = {
            trace_stage!("rank_sentences");
            StandardPageRank::new()
                .with_max_iterations(config.max_iterations)
                .with_threshold(config.convergence_threshold)
                .run(&sentence_graph)
        };
        let ranked_sentences = sentence_rank.ranking();

        let word_rank = {
            trace_stage!("rank_words");
            LinearWordRank::new()
                .with_damping(config.word_damping)
                .run(cooccurrence.matrix())?
        };
        let ranked_words = word_rank.ranking();

        Ok(Self {
            config,
            sentences,
            documents,
            sentence_graph,
            sentence_rank,
            ranked_sentences,
            cooccurrence,
            word_rank,
            ranked_words,
        })
    }

    /// Summary with `count` top sentences in document order
    ///
    /// `verbose` joins them with newlines into [`Summary::Text`]; otherwise
    /// they are returned as [`Summary::Sentences`].
    pub fn summarize(&self, count: usize, verbose: bool) -> Summary {
        SentenceSelector::new()
            .with_num_sentences(count)
            .render(&self.sentences, &self.ranked_sentences, verbose)
    }

    /// Newline-joined summary using the configured sentence count
    pub fn summary(&self) -> Summary {
        self.summarize(self.config.summary_count, true)
    }

    /// Newline-joined summary of `count` sentences
    pub fn summarize_text(&self, count: usize) -> String {
        self.summarize(count, true).into_text()
    }

    /// Summary of `count` sentences as a list
    pub fn summarize_sentences(&self, count: usize) -> Vec<String> {
        self.summarize(count, false).into_sentences()
    }

    /// The `n` highest-ranked words
    pub fn keywords(&self, n: usize) -> Vec<RankedWord> {
        let vocabulary = self.cooccurrence.vocabulary();
        self.ranked_words
            .iter()
            .take(n)
            .filter_map(|&index| {
                vocabulary.word(index).map(|word| RankedWord {
                    word: word.to_string(),
                    index,
                    score: self.word_rank.score(index),
                })
            })
            .collect()
    }

    /// Segmented sentences in document order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Filtered token document per sentence
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// The sentence similarity graph
    pub fn sentence_graph(&self) -> &CsrGraph {
        &self.sentence_graph
    }

    /// PageRank score per sentence index
    pub fn sentence_scores(&self) -> &PageRankResult {
        &self.sentence_rank
    }

    /// Sentence indices by descending score
    pub fn ranked_sentences(&self) -> &[usize] {
        &self.ranked_sentences
    }

    /// Word-rank score per vocabulary index
    pub fn word_ranks(&self) -> &WordRankResult {
        &self.word_rank
    }

    /// Vocabulary indices by descending word score
    pub fn ranked_words(&self) -> &[usize] {
        &self.ranked_words
    }

    /// The word vocabulary (index <-> word)
    pub fn vocabulary(&self) -> &Vocabulary {
        self.cooccurrence.vocabulary()
    }

    /// The config this ranking was built with
    pub fn config(&self) -> &TextRankConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TextRankError;

    const ARTICLE: &str = "Graph ranking scores each sentence by its links.\n\
        Sentence graph ranking uses word overlap between sentence pairs.\n\
        Weather was sunny on Tuesday.\n\
        Ranking sentence graph links gives the summary ORDER.\n\
        Lunch included soup.";

    #[test]
    fn test_empty_input_summary() {
        let tr = TextRank::new("").unwrap();

        assert!(tr.sentences().is_empty());
        assert_eq!(tr.summarize(3, true), Summary::Text(String::new()));
        assert_eq!(tr.summarize(3, false), Summary::Sentences(vec![]));
        assert!(tr.keywords(5).is_empty());
        assert!(tr.word_ranks().is_empty());
    }

    #[test]
    fn test_whitespace_input_summary() {
        let tr = TextRank::new("  \n\t \n").unwrap();
        assert_eq!(tr.summarize_text(3), "");
        assert!(tr.summarize_sentences(3).is_empty());
    }

    #[test]
    fn test_dedup_sentences() {
        let tr = TextRank::new("A. A. B.").unwrap();
        let texts: Vec<_> = tr.sentences().iter().map(|s| s.text.as_str()).collect();

        assert_eq!(texts, vec!["A.", "B."]);
        assert_eq!(tr.sentences()[1].index, 1);
    }

    #[test]
    fn test_summary_picks_connected_sentences_in_order() {
        let tr = TextRank::new(ARTICLE).unwrap();

        assert_eq!(tr.sentences().len(), 5);
        let summary = tr.summarize_sentences(3);
        assert_eq!(summary.len(), 3);

        // The off-topic sentences share no words with the rest
        assert!(!summary.iter().any(|s| s.starts_with("Weather")));
        assert!(!summary.iter().any(|s| s.starts_with("Lunch")));

        // Presentation follows document order
        let positions: Vec<usize> = summary
            .iter()
            .map(|s| tr.sentences().iter().position(|x| &x.text == s).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_verbose_joins_with_newlines() {
        let tr = TextRank::new(ARTICLE).unwrap();

        let text = tr.summarize_text(2);
        let list = tr.summarize_sentences(2);
        assert_eq!(text, list.join("\n"));
    }

    #[test]
    fn test_count_larger_than_sentences() {
        let tr = TextRank::new(ARTICLE).unwrap();

        let all = tr.summarize_sentences(100);
        let expected: Vec<String> = tr.sentences().iter().map(|s| s.text.clone()).collect();
        assert_eq!(all, expected);
        assert!(tr.summarize_sentences(0).is_empty());
    }

    #[test]
    fn test_default_summary_uses_config_count() {
        let tr = TextRank::with_config(ARTICLE, TextRankConfig::default().with_summary_count(2))
            .unwrap();

        assert_eq!(tr.summary().into_sentences().len(), 2);
    }

    #[test]
    fn test_sentence_scores_sum_to_one() {
        let tr = TextRank::new(ARTICLE).unwrap();

        let sum: f64 = tr.sentence_scores().scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert_eq!(tr.ranked_sentences().len(), 5);
    }

    #[test]
    fn test_no_edge_between_disjoint_sentences() {
        let tr = TextRank::new(ARTICLE).unwrap();
        let graph = tr.sentence_graph();

        // "Weather..." (2) and "Lunch..." (4) share nothing with anyone
        assert_eq!(graph.degree(2), 0);
        assert_eq!(graph.degree(4), 0);
        assert!(graph.neighbors(0).all(|(n, w)| n != 2 && w > 0.0));
    }

    #[test]
    fn test_deterministic() {
        let a = TextRank::new(ARTICLE).unwrap();
        let b = TextRank::new(ARTICLE).unwrap();

        assert_eq!(a.sentences(), b.sentences());
        assert_eq!(a.ranked_sentences(), b.ranked_sentences());
        assert_eq!(a.ranked_words(), b.ranked_words());
        assert_eq!(a.summary(), b.summary());
        assert_eq!(a.keywords(5), b.keywords(5));
    }

    #[test]
    fn test_keywords_ranked_by_score() {
        let tr = TextRank::new(ARTICLE).unwrap();
        let keywords = tr.keywords(3);

        assert_eq!(keywords.len(), 3);
        assert!(keywords.windows(2).all(|w| w[0].score >= w[1].score));
        for kw in &keywords {
            assert_eq!(tr.vocabulary().word(kw.index), Some(kw.word.as_str()));
        }
    }

    #[test]
    fn test_custom_tokenizer() {
        // Treat only capitalized words as meaningful
        let capitalized = |text: &str| -> Result<Vec<String>> {
            Ok(text
                .split_whitespace()
                .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
                .map(|w| w.trim_end_matches('.').to_lowercase())
                .collect())
        };

        let config = TextRankConfig::default().with_language("ko");
        let tr = TextRank::with_tokenizer(ARTICLE, &capitalized, config).unwrap();

        assert_eq!(tr.documents()[2], "weather tuesday");
        assert!(tr.vocabulary().index_of("order").is_some());
        assert!(tr.vocabulary().index_of("soup").is_none());
    }

    #[test]
    fn test_tokenizer_error_propagates() {
        let failing = |_: &str| -> Result<Vec<String>> {
            Err(TextRankError::tokenization("unsupported character"))
        };

        let err = TextRank::with_tokenizer(ARTICLE, &failing, TextRankConfig::default())
            .unwrap_err();
        assert!(matches!(err, TextRankError::Tokenization(_)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = TextRank::with_config(ARTICLE, TextRankConfig::default().with_word_damping(1.5))
            .unwrap_err();
        assert!(matches!(err, TextRankError::InvalidConfig(_)));
    }
}
