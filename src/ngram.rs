// src/ngram.rs

//! Character n-gram graph built from a rendered symbol text.
//!
//! Nodes are the distinct character n-grams of the text; a directed edge
//! connects an n-gram to each n-gram starting within the next `window`
//! positions, its weight accumulating one per co-occurrence. The graph
//! is the hand-off point to downstream similarity tooling; computing the
//! similarity itself is out of scope here.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::Context;
use log::debug;

/// Windowed co-occurrence graph over character n-grams.
#[derive(Debug, Clone)]
pub struct NGramGraph {
    n: usize,
    window: usize,
    nodes: HashSet<String>,
    edges: HashMap<(String, String), f64>,
}

impl NGramGraph {
    /// Builds the graph from an in-memory text. The text is consumed
    /// as-is, newlines included: row breaks are part of the rendered
    /// surface layout and carry signal.
    pub fn from_text(text: &str, n: usize, window: usize) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let mut nodes = HashSet::new();
        let mut edges: HashMap<(String, String), f64> = HashMap::new();

        if n > 0 && chars.len() >= n {
            let gram = |i: usize| -> String { chars[i..i + n].iter().collect() };
            let positions = chars.len() - n + 1;
            for i in 0..positions {
                let head = gram(i);
                nodes.insert(head.clone());
                for j in (i + 1)..=(i + window).min(positions - 1) {
                    let tail = gram(j);
                    nodes.insert(tail.clone());
                    *edges.entry((head.clone(), tail)).or_insert(0.0) += 1.0;
                }
            }
        }
        debug!(
            "n-gram graph built: rank {}, window {}, {} nodes, {} edges",
            n,
            window,
            nodes.len(),
            edges.len()
        );
        NGramGraph {
            n,
            window,
            nodes,
            edges,
        }
    }

    /// Reads `path` and builds the graph from its contents.
    pub fn load_from_text<P: AsRef<Path>>(path: P, n: usize, window: usize) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to load text from {}", path.display()))?;
        Ok(Self::from_text(&text, n, window))
    }

    /// N-gram rank.
    pub fn rank(&self) -> usize {
        self.n
    }

    /// Co-occurrence window.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Number of distinct n-grams.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct co-occurrence edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Accumulated weight of the edge `head → tail`, or 0 if absent.
    pub fn weight(&self, head: &str, tail: &str) -> f64 {
        self.edges
            .get(&(head.to_string(), tail.to_string()))
            .copied()
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_bigram_graph() {
        let g = NGramGraph::from_text("ABCD", 2, 2);
        // grams: AB, BC, CD
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.weight("AB", "BC"), 1.0);
        assert_eq!(g.weight("AB", "CD"), 1.0);
        assert_eq!(g.weight("BC", "CD"), 1.0);
        assert_eq!(g.weight("CD", "AB"), 0.0);
    }

    #[test]
    fn test_repeated_grams_accumulate() {
        let g = NGramGraph::from_text("ABABAB", 2, 1);
        // grams: AB, BA, AB, BA, AB — adjacent pairs repeat
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.weight("AB", "BA"), 2.0);
        assert_eq!(g.weight("BA", "AB"), 2.0);
    }

    #[test]
    fn test_text_shorter_than_rank() {
        let g = NGramGraph::from_text("AB", 3, 3);
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(NGramGraph::load_from_text("/nonexistent/text.txt", 3, 3).is_err());
    }
}
