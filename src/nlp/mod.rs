//! Natural Language Processing components
//!
//! Sentence segmentation, the tokenizer capability, stopword filtering and
//! per-sentence token extraction.

pub mod extractor;
pub mod segmenter;
pub mod stopwords;
pub mod tokenizer;
