//! Sentence similarity graph builder
//!
//! Nodes are sentences (node ID == sentence index); an undirected edge joins
//! two sentences whose bags of words overlap, weighted by multiset Jaccard
//! similarity. Edge lookups during construction go through FxHashMap.

use crate::types::Sentence;
use rustc_hash::FxHashMap;

/// A node in the graph builder
#[derive(Debug, Clone, Default)]
pub struct BuilderNode {
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

/// A mutable undirected graph used while scoring sentence pairs
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<BuilderNode>,
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Append a node, returning its ID
    pub fn add_node(&mut self) -> u32 {
        let id = self.nodes.len() as u32;
        self.nodes.push(BuilderNode::default());
        id
    }

    /// Set the weight of the undirected edge between two nodes
    ///
    /// Self-loops and non-positive weights are ignored; setting an existing
    /// edge replaces its weight.
    pub fn add_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to || weight <= 0.0 {
            return;
        }
        if from as usize >= self.nodes.len() || to as usize >= self.nodes.len() {
            return;
        }

        self.nodes[from as usize].edges.insert(to, weight);
        self.nodes[to as usize].edges.insert(from, weight);
    }

    /// Build the similarity graph over all sentence pairs
    ///
    /// Every sentence becomes a node, including ones with no similar
    /// neighbour. Only pairs with nonzero similarity get an edge.
    pub fn from_sentences(sentences: &[Sentence]) -> Self {
        let mut builder = Self::with_capacity(sentences.len());
        for _ in sentences {
            builder.add_node();
        }

        for (i, a) in sentences.iter().enumerate() {
            for (j, b) in sentences.iter().enumerate().skip(i + 1) {
                let weight = a.similarity(b);
                if weight > 0.0 {
                    builder.add_edge(i as u32, j as u32, weight);
                }
            }
        }

        builder
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges (counting each undirected edge once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Weight of the edge between two nodes, if present
    pub fn edge_weight(&self, from: u32, to: u32) -> Option<f64> {
        self.get_node(from)?.edges.get(&to).copied()
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
