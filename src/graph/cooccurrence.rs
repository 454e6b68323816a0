//! Word co-occurrence matrix
//!
//! Each filtered sentence document is count-vectorized over a shared,
//! lexicographically sorted vocabulary. Every word column of the
//! sentence × word count matrix is scaled to unit Euclidean norm, and the
//! co-occurrence matrix is `Xᵀ·X`: entry (i, j) is the cosine similarity of
//! the sentence distributions of words i and j.

use ndarray::Array2;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use unicode_segmentation::UnicodeSegmentation;

/// Terms of a document as the vectorizer sees them: lowercase words of at
/// least two characters
fn terms(document: &str) -> impl Iterator<Item = String> + '_ {
    document
        .unicode_words()
        .filter(|w| w.chars().count() >= 2)
        .map(str::to_lowercase)
}

/// Bidirectional word <-> index mapping
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<String>,
    index: FxHashMap<String, usize>,
}

impl Vocabulary {
    /// Collect the sorted set of terms across `documents`
    pub fn from_documents<S: AsRef<str>>(documents: &[S]) -> Self {
        let sorted: BTreeSet<String> = documents
            .iter()
            .flat_map(|doc| terms(doc.as_ref()).collect::<Vec<_>>())
            .collect();

        let words: Vec<String> = sorted.into_iter().collect();
        let index = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i))
            .collect();

        Self { words, index }
    }

    /// Index of `word`, if it is in the vocabulary
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Word at `index`
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// All words in index order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Sentence × word count matrix
pub fn count_matrix<S: AsRef<str>>(documents: &[S], vocabulary: &Vocabulary) -> Array2<f64> {
    let mut counts = Array2::<f64>::zeros((documents.len(), vocabulary.len()));

    for (row, doc) in documents.iter().enumerate() {
        for term in terms(doc.as_ref()) {
            if let Some(col) = vocabulary.index_of(&term) {
                counts[[row, col]] += 1.0;
            }
        }
    }

    counts
}

/// Scale every column to unit Euclidean norm; zero columns are left as is
pub fn normalize_columns(matrix: &mut Array2<f64>) {
    for mut column in matrix.columns_mut() {
        let norm = column.dot(&column).sqrt();
        if norm > 0.0 {
            column.mapv_inplace(|x| x / norm);
        }
    }
}

/// Symmetric word × word co-occurrence matrix with its vocabulary
#[derive(Debug, Clone)]
pub struct CooccurrenceMatrix {
    matrix: Array2<f64>,
    vocabulary: Vocabulary,
}

impl Default for CooccurrenceMatrix {
    fn default() -> Self {
        Self {
            matrix: Array2::zeros((0, 0)),
            vocabulary: Vocabulary::default(),
        }
    }
}

impl CooccurrenceMatrix {
    /// Build the matrix from one filtered document per sentence
    ///
    /// No documents or no terms yield a 0×0 matrix.
    pub fn from_documents<S: AsRef<str>>(documents: &[S]) -> Self {
        let vocabulary = Vocabulary::from_documents(documents);
        if vocabulary.is_empty() {
            return Self::default();
        }

        let mut counts = count_matrix(documents, &vocabulary);
        normalize_columns(&mut counts);
        let matrix = counts.t().dot(&counts);

        Self { matrix, vocabulary }
    }

    /// The V×V matrix
    pub fn matrix(&self) -> &Array2<f64> {
        &self.matrix
    }

    /// The vocabulary indexing both axes
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Number of vocabulary words (matrix side length)
    pub fn size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Check if the matrix is empty
    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}
