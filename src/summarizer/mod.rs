//! Summarization components
//!
//! [`textrank::TextRank`] runs the ranking pipeline over one text;
//! [`selector::SentenceSelector`] turns a sentence ranking into a summary.

pub mod selector;
pub mod textrank;
