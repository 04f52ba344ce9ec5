//! Parent-pointer tree built from declaration records.
//!
//! Nodes live in a flat arena; `parent` and `children` hold arena indices,
//! so the parent back-reference never becomes a second owning pointer.
//! A record with a resolvable parent is attached under it; a record with
//! no parent clause becomes a root only if its name carries the root
//! suffix. Everything else is left unreachable and falls out of the
//! converted graph.

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::base::Location;
use crate::base::constants::ROOT_SUFFIX;
use crate::extract::{DeclarationRecord, PropertyInfo};

/// Arena index of a [`TypeNode`].
pub type NodeId = usize;

/// One node in the linked type hierarchy.
#[derive(Debug, Clone)]
pub struct TypeNode {
    /// Bare type name
    pub name: String,
    /// Dot-joined ancestor-to-self chain; equals `name` for roots and
    /// unreachable nodes. Stable only once linking completes.
    pub qualified_path: String,
    /// Declared fields, in declaration order
    pub fields: IndexMap<String, PropertyInfo>,
    /// Linked ancestor, if any (non-owning arena index)
    pub parent: Option<NodeId>,
    /// Linked children by name, in link order
    pub children: IndexMap<String, NodeId>,
    /// Declaration provenance
    pub location: Location,
}

/// The linked hierarchy: an arena of nodes plus the root set.
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    nodes: Vec<TypeNode>,
    roots: Vec<NodeId>,
}

impl Hierarchy {
    /// Link declaration records into a hierarchy.
    ///
    /// Records naming a parent that exists are attached under it; records
    /// naming a missing parent stay unreachable (they are not promoted to
    /// roots). Roots keep their declaration order.
    pub fn link(records: &IndexMap<String, DeclarationRecord>) -> Self {
        let mut nodes: Vec<TypeNode> = records
            .values()
            .map(|record| TypeNode {
                name: record.name.clone(),
                qualified_path: record.name.clone(),
                fields: record.fields.clone(),
                parent: None,
                children: IndexMap::new(),
                location: record.location.clone(),
            })
            .collect();

        let index: FxHashMap<&str, NodeId> = records
            .keys()
            .enumerate()
            .map(|(id, name)| (name.as_str(), id))
            .collect();

        let mut roots = Vec::new();
        for (id, record) in records.values().enumerate() {
            match &record.parent_name {
                Some(parent_name) => {
                    if let Some(&parent_id) = index.get(parent_name.as_str()) {
                        nodes[id].parent = Some(parent_id);
                        nodes[parent_id].children.insert(record.name.clone(), id);
                    } else {
                        debug!(
                            "declaration '{}' names unknown parent '{parent_name}', excluding",
                            record.name
                        );
                    }
                }
                None if record.name.ends_with(ROOT_SUFFIX) => roots.push(id),
                None => {}
            }
        }

        let mut hierarchy = Self { nodes, roots };
        hierarchy.assign_qualified_paths();
        debug!(
            "linked {} record(s) into {} root(s)",
            records.len(),
            hierarchy.roots.len()
        );
        hierarchy
    }

    /// Build a flat hierarchy where every record is its own root.
    ///
    /// Used for fallback presence detection, where the root-suffix
    /// convention does not apply and no linking information exists.
    pub fn flat(records: &IndexMap<String, DeclarationRecord>) -> Self {
        let nodes: Vec<TypeNode> = records
            .values()
            .map(|record| TypeNode {
                name: record.name.clone(),
                qualified_path: record.name.clone(),
                fields: record.fields.clone(),
                parent: None,
                children: IndexMap::new(),
                location: record.location.clone(),
            })
            .collect();
        let roots = (0..nodes.len()).collect();
        Self { nodes, roots }
    }

    /// Recompute qualified paths from the ancestor chain, walking down
    /// from the roots. Unreachable nodes keep their bare name. The
    /// visited guard keeps malformed (cyclic) parent links from looping.
    fn assign_qualified_paths(&mut self) {
        let mut visited = FxHashSet::default();
        for i in 0..self.roots.len() {
            let root = self.roots[i];
            self.assign_path(root, None, &mut visited);
        }
    }

    fn assign_path(&mut self, id: NodeId, prefix: Option<&str>, visited: &mut FxHashSet<NodeId>) {
        if !visited.insert(id) {
            return;
        }
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{}", self.nodes[id].name),
            None => self.nodes[id].name.clone(),
        };
        self.nodes[id].qualified_path = path.clone();

        let children: Vec<NodeId> = self.nodes[id].children.values().copied().collect();
        for child in children {
            self.assign_path(child, Some(&path), visited);
        }
    }

    pub fn node(&self, id: NodeId) -> &TypeNode {
        &self.nodes[id]
    }

    /// Root ids in declaration order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Look up a node id by bare type name.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|node| node.name == name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use crate::extract::extract_declarations;

    fn link(source: &str) -> Hierarchy {
        Hierarchy::link(&extract_declarations(source, Path::new("types.ts")))
    }

    #[test]
    fn test_link_parent_chain() {
        let h = link(
            "export type CarInstance = { vin: string };\n\
             export type Wheel = CarInstance & { radius: number };\n\
             export type Hub = Wheel & { bolts: number };\n",
        );
        assert_eq!(h.roots().len(), 1);

        let hub = h.node(h.find("Hub").unwrap());
        assert_eq!(hub.qualified_path, "CarInstance.Wheel.Hub");
        let wheel = h.node(h.find("Wheel").unwrap());
        assert_eq!(wheel.qualified_path, "CarInstance.Wheel");
    }

    #[test]
    fn test_qualified_path_ignores_declaration_order() {
        // Grandchild declared before its parent is linked; the path pass
        // still produces the full ancestor chain.
        let h = link(
            "export type Hub = Wheel & { bolts: number };\n\
             export type Wheel = CarInstance & { radius: number };\n\
             export type CarInstance = { vin: string };\n",
        );
        let hub = h.node(h.find("Hub").unwrap());
        assert_eq!(hub.qualified_path, "CarInstance.Wheel.Hub");
    }

    #[test]
    fn test_root_requires_suffix() {
        let h = link("export type Orphan = { a: string };\n");
        assert_eq!(h.roots().len(), 0);
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn test_dangling_parent_not_a_root() {
        let h = link("export type Lost = Missing & { a: string };\n");
        assert_eq!(h.roots().len(), 0);
        let lost = h.node(h.find("Lost").unwrap());
        assert_eq!(lost.parent, None);
        assert_eq!(lost.qualified_path, "Lost");
    }

    #[test]
    fn test_flat_all_roots() {
        let mut records = IndexMap::new();
        for name in ["A", "B"] {
            records.insert(
                name.to_string(),
                DeclarationRecord::bare(name, Location::new("src/a.ts", 1, 0)),
            );
        }
        let h = Hierarchy::flat(&records);
        assert_eq!(h.roots().len(), 2);
    }
}
