//! Derived statistics over the flat node list.
//!
//! All of these are pure functions; no traversal of the hierarchy is
//! needed once the graph has been converted.

use std::collections::BTreeMap;

use super::{GraphData, GraphNode};

/// Depth distribution of a converted graph.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DepthStats {
    pub max_depth: usize,
    pub average_depth: f64,
    pub type_count_by_depth: BTreeMap<usize, usize>,
}

/// Compute the depth distribution. Empty input yields all zeroes.
pub fn depth_stats(nodes: &[GraphNode]) -> DepthStats {
    let mut stats = DepthStats::default();
    if nodes.is_empty() {
        return stats;
    }

    let mut total = 0usize;
    for node in nodes {
        stats.max_depth = stats.max_depth.max(node.depth);
        total += node.depth;
        *stats.type_count_by_depth.entry(node.depth).or_insert(0) += 1;
    }
    stats.average_depth = total as f64 / nodes.len() as f64;
    stats
}

/// Total property count across all nodes.
pub fn total_properties(nodes: &[GraphNode]) -> usize {
    nodes.iter().map(|node| node.properties.len()).sum()
}

/// One-line summary of a converted graph, for status displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GraphSummary {
    pub type_count: usize,
    pub relationship_count: usize,
    pub property_count: usize,
    pub max_depth: usize,
}

impl GraphSummary {
    pub fn of(graph: &GraphData) -> Self {
        Self {
            type_count: graph.nodes.len(),
            relationship_count: graph.links.len(),
            property_count: total_properties(&graph.nodes),
            max_depth: depth_stats(&graph.nodes).max_depth,
        }
    }
}
