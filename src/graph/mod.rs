//! Flat, renderer-facing graph converted from a linked hierarchy.
//!
//! Conversion is a depth-first walk from the roots, guarded by an
//! explicit visited set of qualified paths, so malformed input that
//! managed to link into a cycle still terminates and every node is
//! emitted at most once. Children are visited in insertion order and
//! roots in declaration order, which makes conversion deterministic and
//! idempotent.

mod stats;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::base::Location;
use crate::extract::PropertyInfo;
use crate::hierarchy::{Hierarchy, NodeId};

pub use stats::{DepthStats, GraphSummary, depth_stats, total_properties};

/// One node of the flat output graph.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GraphNode {
    /// Qualified path; unique within one converted graph
    pub id: String,
    /// Display name
    pub name: String,
    /// Distance from the root it was reached through
    pub depth: usize,
    pub is_root: bool,
    /// Fields as an ordered array, as the renderer expects them
    pub properties: Vec<PropertyInfo>,
    /// Declaration provenance for "jump to definition"
    pub location: Location,
}

/// One parent→child edge of the output graph.
///
/// `source` and `target` are node ids at hand-off time; the renderer may
/// rewrite them into live node references during layout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

/// Complete graph hand-off shape for the renderer.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphEdge>,
}

/// Convert a linked hierarchy into the flat graph shape.
///
/// An empty hierarchy yields an empty graph; that is a valid result, not
/// an error.
pub fn convert(hierarchy: &Hierarchy) -> GraphData {
    let mut graph = GraphData::default();
    let mut visited = FxHashSet::default();

    for &root in hierarchy.roots() {
        emit_node(hierarchy, root, 0, &IndexMap::new(), &mut graph, &mut visited);
    }

    debug!(
        "converted {} node(s), {} edge(s)",
        graph.nodes.len(),
        graph.links.len()
    );
    graph
}

fn emit_node(
    hierarchy: &Hierarchy,
    id: NodeId,
    depth: usize,
    inherited: &IndexMap<String, PropertyInfo>,
    graph: &mut GraphData,
    visited: &mut FxHashSet<String>,
) {
    let node = hierarchy.node(id);
    if !visited.insert(node.qualified_path.clone()) {
        return;
    }

    // Intersection semantics: a node carries its ancestors' fields plus
    // its own, own declarations overriding, ancestor-first order.
    let mut merged = inherited.clone();
    for (name, prop) in &node.fields {
        merged.insert(name.clone(), prop.clone());
    }

    graph.nodes.push(GraphNode {
        id: node.qualified_path.clone(),
        name: node.name.clone(),
        depth,
        is_root: depth == 0,
        properties: merged.values().cloned().collect(),
        location: node.location.clone(),
    });

    if let Some(parent) = node.parent {
        graph.links.push(GraphEdge {
            source: hierarchy.node(parent).qualified_path.clone(),
            target: node.qualified_path.clone(),
        });
    }

    for &child in node.children.values() {
        emit_node(hierarchy, child, depth + 1, &merged, graph, visited);
    }
}
