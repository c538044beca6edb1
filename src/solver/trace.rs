//! Search results and path bookkeeping
//!
//! Every branch a solver explores is recorded as a [`PathNode`] so the search
//! can be replayed or animated afterwards.

use crate::core::Cell;
use serde::Serialize;
use std::time::Duration;

/// A word accepted by a solver, with its points
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct WordResult {
    pub word: String,
    pub score: u32,
}

/// One explored branch: the cells visited and whether it ended on a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathNode {
    pub visited: Vec<Cell>,
    pub found_word: bool,
}

impl PathNode {
    #[must_use]
    pub const fn new(visited: Vec<Cell>, found_word: bool) -> Self {
        Self {
            visited,
            found_word,
        }
    }
}

/// Ordered record of every branch explored during one solve
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathTrace(Vec<PathNode>);

impl PathTrace {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn push(&mut self, node: PathNode) {
        self.0.push(node);
    }

    /// Append another trace after this one
    pub fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathNode> {
        self.0.iter()
    }

    /// Number of branches that ended on a word
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.0.iter().filter(|node| node.found_word).count()
    }

    /// Longest path explored
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.0.iter().map(|node| node.visited.len()).max().unwrap_or(0)
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<PathNode> {
        self.0
    }
}

impl<'a> IntoIterator for &'a PathTrace {
    type Item = &'a PathNode;
    type IntoIter = std::slice::Iter<'a, PathNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Output of one strategy run
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Accepted words, deduplicated and sorted by word
    pub words: Vec<WordResult>,
    /// Every branch explored
    pub trace: PathTrace,
    /// Wall time spent searching
    pub elapsed: Duration,
}

impl SolveResult {
    /// Sum of all word scores
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.words.iter().map(|w| w.score).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_counts() {
        let mut trace = PathTrace::new();
        trace.push(PathNode::new(vec![1], false));
        trace.push(PathNode::new(vec![1, 2, 3], true));
        trace.push(PathNode::new(vec![4, 3], false));

        assert_eq!(trace.len(), 3);
        assert_eq!(trace.found_count(), 1);
        assert_eq!(trace.max_depth(), 3);
    }

    #[test]
    fn trace_extend_keeps_order() {
        let mut first = PathTrace::new();
        first.push(PathNode::new(vec![1], false));
        let mut second = PathTrace::new();
        second.push(PathNode::new(vec![2], true));

        first.extend(second);
        let visited: Vec<_> = first.iter().map(|n| n.visited[0]).collect();
        assert_eq!(visited, vec![1, 2]);
    }

    #[test]
    fn path_node_serializes_camel_case() {
        let json = serde_json::to_string(&PathNode::new(vec![1, 2], true)).unwrap();
        assert_eq!(json, r#"{"visited":[1,2],"foundWord":true}"#);
    }

    #[test]
    fn total_score_sums_words() {
        let result = SolveResult {
            words: vec![
                WordResult {
                    word: "dens".into(),
                    score: 1,
                },
                WordResult {
                    word: "nodes".into(),
                    score: 2,
                },
            ],
            trace: PathTrace::new(),
            elapsed: Duration::ZERO,
        };
        assert_eq!(result.total_score(), 3);
    }
}
