//! Ranking algorithms
//!
//! Sentences are ranked by weighted PageRank power iteration
//! ([`standard`]); words are ranked by solving the PageRank fixed point
//! directly as a linear system ([`linear`]).

use std::cmp::Ordering;

pub mod linear;
pub mod standard;

/// Node indices ordered by descending score
///
/// The sort is stable, so tied scores keep ascending index order.
pub fn descending_order(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
    });
    order
}

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Node IDs by descending score, ties in node order
    pub fn ranking(&self) -> Vec<usize> {
        descending_order(&self.scores)
    }

    /// Get top N nodes by score
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        self.ranking()
            .into_iter()
            .take(n)
            .map(|i| (i, self.scores[i]))
            .collect()
    }

    /// Get the score for a specific node
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }
}
