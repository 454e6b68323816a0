//! Graph construction and representation
//!
//! The sentence similarity graph is built with [`builder::GraphBuilder`] and
//! frozen into [`csr::CsrGraph`] for ranking. The word co-occurrence matrix
//! lives in [`cooccurrence`].

pub mod builder;
pub mod cooccurrence;
pub mod csr;
