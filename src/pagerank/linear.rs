//! Closed-form word ranking
//!
//! Instead of iterating `x = d·M·x + (1-d)·𝟙`, the fixed point is solved
//! directly as `(I - d·M)·x = (1-d)·𝟙`, where `M` is the co-occurrence
//! matrix with its diagonal removed and each column scaled to sum to 1.
//! Columns of `d·M` sum to at most `d < 1`, so the system matrix is strictly
//! column diagonally dominant and always nonsingular.

use super::descending_order;
use crate::errors::{Result, TextRankError};
use ndarray::{Array1, Array2};

/// Pivots smaller than this are treated as zero
const PIVOT_EPSILON: f64 = 1e-12;

/// Result of the word-rank solve
#[derive(Debug, Clone, Default)]
pub struct WordRankResult {
    /// Score per vocabulary index (not normalized)
    pub scores: Vec<f64>,
}

impl WordRankResult {
    /// Vocabulary indices by descending score, ties in index order
    pub fn ranking(&self) -> Vec<usize> {
        descending_order(&self.scores)
    }

    /// Get the score for a vocabulary index
    pub fn score(&self, index: usize) -> f64 {
        self.scores.get(index).copied().unwrap_or(0.0)
    }

    /// Number of ranked words
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if no word was ranked
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Word ranker solving the PageRank fixed point exactly
#[derive(Debug, Clone)]
pub struct LinearWordRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
}

impl Default for LinearWordRank {
    fn default() -> Self {
        Self { damping: 0.85 }
    }
}

impl LinearWordRank {
    /// Create a new LinearWordRank with default damping
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Build the system matrix `I - d·M` from a co-occurrence matrix
    ///
    /// Per column: zero the diagonal, divide by the column sum when it is
    /// nonzero, scale by `-d`, then put 1 back on the diagonal.
    pub fn system_matrix(&self, cooccurrence: &Array2<f64>) -> Array2<f64> {
        let mut a = cooccurrence.clone();
        let size = a.nrows().min(a.ncols());

        for j in 0..size {
            a[[j, j]] = 0.0;
            let mut column = a.column_mut(j);
            let link_sum = column.sum();
            if link_sum != 0.0 {
                column.mapv_inplace(|x| x / link_sum);
            }
            column.mapv_inplace(|x| x * -self.damping);
            a[[j, j]] = 1.0;
        }

        a
    }

    /// Rank the words of a V×V co-occurrence matrix
    pub fn run(&self, cooccurrence: &Array2<f64>) -> Result<WordRankResult> {
        let size = cooccurrence.nrows();
        if size == 0 {
            return Ok(WordRankResult::default());
        }

        let a = self.system_matrix(cooccurrence);
        let b = Array1::from_elem(size, 1.0 - self.damping);
        let x = solve(a, b)?;

        Ok(WordRankResult { scores: x.to_vec() })
    }
}

/// Solve `a·x = b` by Gaussian elimination with partial pivoting
pub fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Result<Array1<f64>> {
    let n = b.len();
    if a.nrows() != n || a.ncols() != n {
        return Err(TextRankError::SingularMatrix { size: n });
    }

    for k in 0..n {
        let pivot_row = (k..n)
            .max_by(|&i, &j| a[[i, k]].abs().total_cmp(&a[[j, k]].abs()))
            .unwrap_or(k);
        if a[[pivot_row, k]].abs() < PIVOT_EPSILON {
            return Err(TextRankError::SingularMatrix { size: n });
        }

        if pivot_row != k {
            for col in 0..n {
                a.swap([k, col], [pivot_row, col]);
            }
            b.swap(k, pivot_row);
        }

        let pivot = a[[k, k]];
        for i in (k + 1)..n {
            let factor = a[[i, k]] / pivot;
            if factor == 0.0 {
                continue;
            }
            for col in k..n {
                a[[i, col]] -= factor * a[[k, col]];
            }
            b[i] -= factor * b[k];
        }
    }

    let mut x = Array1::<f64>::zeros(n);
    for i in (0..n).rev() {
        let tail: f64 = ((i + 1)..n).map(|col| a[[i, col]] * x[col]).sum();
        x[i] = (b[i] - tail) / a[[i, i]];
    }

    Ok(x)
}
