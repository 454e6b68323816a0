//! Standard PageRank algorithm
//!
//! Weighted power iteration over a [`CsrGraph`]. Mass held by dangling
//! nodes (sentences with no similar neighbour) is spread uniformly, so every
//! node keeps a nonzero score and the scores sum to 1.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Per-node convergence tolerance; the L1 delta is compared against
    /// `threshold * num_nodes`
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run weighted PageRank on a graph
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let mut new_scores = vec![0.0; n];

        let dangling_nodes = graph.dangling_nodes();
        let teleport = (1.0 - self.damping) / n as f64;
        let tolerance = self.threshold * n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta >= tolerance {
            iterations += 1;

            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d as usize]).sum();
            let dangling_contribution = self.damping * dangling_mass / n as f64;

            new_scores.fill(teleport + dangling_contribution);

            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node as u32);

                if total_weight > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        let contribution = self.damping * node_score * weight / total_weight;
                        new_scores[neighbor as usize] += contribution;
                    }
                }
            }

            // L1 norm of the change
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        let converged = delta < tolerance;
        if !converged {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                iterations,
                delta,
                "pagerank did not converge; using last iterate"
            );
        }

        PageRankResult::new(scores, iterations, delta, converged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;

    fn build_triangle_graph() -> CsrGraph {
        let mut builder = GraphBuilder::new();
        let a = builder.add_node();
        let b = builder.add_node();
        let c = builder.add_node();

        builder.add_edge(a, b, 0.5);
        builder.add_edge(b, c, 0.5);
        builder.add_edge(c, a, 0.5);

        CsrGraph::from_builder(&builder)
    }

    fn build_star_graph() -> CsrGraph {
        // Hub connected to 3 spokes
        let mut builder = GraphBuilder::new();
        let hub = builder.add_node();
        let s1 = builder.add_node();
        let s2 = builder.add_node();
        let s3 = builder.add_node();

        builder.add_edge(hub, s1, 0.3);
        builder.add_edge(hub, s2, 0.3);
        builder.add_edge(hub, s3, 0.3);

        CsrGraph::from_builder(&builder)
    }

    #[test]
    fn test_triangle_graph_equal_scores() {
        let result = StandardPageRank::new().run(&build_triangle_graph());

        assert!(result.converged);
        let expected = 1.0 / 3.0;
        for score in &result.scores {
            assert!((score - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_star_graph_hub_highest() {
        let result = StandardPageRank::new().run(&build_star_graph());

        assert!(result.converged);
        let hub_score = result.scores[0];
        for &score in &result.scores[1..] {
            assert!(hub_score > score);
        }
        assert_eq!(result.ranking()[0], 0);
    }

    #[test]
    fn test_edge_weights_matter() {
        // b is linked to a strongly and to c weakly
        let mut builder = GraphBuilder::new();
        let a = builder.add_node();
        let b = builder.add_node();
        let c = builder.add_node();
        builder.add_edge(a, b, 0.9);
        builder.add_edge(b, c, 0.1);

        let result = StandardPageRank::new().run(&CsrGraph::from_builder(&builder));

        assert!(result.scores[a as usize] > result.scores[c as usize]);
    }

    #[test]
    fn test_scores_sum_to_one() {
        let result = StandardPageRank::new().run(&build_star_graph());

        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_isolated_node_still_scored() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_node();
        let b = builder.add_node();
        let c = builder.add_node();
        builder.add_edge(a, b, 0.4);

        let result = StandardPageRank::new().run(&CsrGraph::from_builder(&builder));

        // Fixed point: t = d*t/3 + (1-d)/3
        let expected_isolated = 0.05 / (1.0 - 0.85 / 3.0);
        assert!((result.scores[c as usize] - expected_isolated).abs() < 1e-5);
        assert!(result.scores[c as usize] < result.scores[a as usize]);
        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_no_edges_is_uniform() {
        let mut builder = GraphBuilder::new();
        for _ in 0..4 {
            builder.add_node();
        }

        let result = StandardPageRank::new().run(&CsrGraph::from_builder(&builder));

        for score in &result.scores {
            assert!((score - 0.25).abs() < 1e-10);
        }
    }

    #[test]
    fn test_empty_graph() {
        let result = StandardPageRank::new().run(&CsrGraph::default());

        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_max_iterations_returns_partial() {
        let pr = StandardPageRank::new()
            .with_max_iterations(1)
            .with_threshold(0.0); // Never converge

        let result = pr.run(&build_star_graph());

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 4);
    }

    #[test]
    fn test_damping_factor() {
        let graph = build_star_graph();

        // Lower damping = more teleportation = more uniform scores
        let result_low = StandardPageRank::new().with_damping(0.5).run(&graph);
        let result_high = StandardPageRank::new().with_damping(0.95).run(&graph);

        let hub_advantage_low = result_low.scores[0] - result_low.scores[1];
        let hub_advantage_high = result_high.scores[0] - result_high.scores[1];

        assert!(hub_advantage_high > hub_advantage_low);
    }
}
