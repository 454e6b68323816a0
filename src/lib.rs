//! # textrank_summary
//!
//! Extractive summarization with TextRank.
//!
//! Sentences are ranked by weighted PageRank over a graph whose edges are
//! the multiset Jaccard similarity of their words. Separately, words are
//! ranked by solving the PageRank fixed point of a sentence co-occurrence
//! matrix as a single linear system.
//!
//! ```rust,ignore
//! use textrank_summary::TextRank;
//!
//! let tr = TextRank::new(text)?;
//! println!("{}", tr.summarize_text(3));
//! for kw in tr.keywords(10) {
//!     println!("{} {:.4}", kw.word, kw.score);
//! }
//! ```
//!
//! Morphological analysis is delegated to a [`Tokenizer`]; the default
//! [`UnicodeTokenizer`] splits on Unicode word boundaries.

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, TextRankError};
pub use types::{BagOfWords, RankedWord, Sentence, Summary, TextRankConfig};

// Re-export main functionality
pub use graph::{builder::GraphBuilder, cooccurrence::CooccurrenceMatrix, csr::CsrGraph};
pub use nlp::{
    extractor::TokenExtractor,
    segmenter::segment,
    stopwords::StopwordFilter,
    tokenizer::{Tokenizer, UnicodeTokenizer},
};
pub use pagerank::{
    linear::{LinearWordRank, WordRankResult},
    standard::StandardPageRank,
    PageRankResult,
};
pub use summarizer::{selector::SentenceSelector, textrank::TextRank};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
