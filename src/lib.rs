//! # typeatlas-core
//!
//! Core library for extracting type-inheritance hierarchies from generated
//! type sources and converting them into renderable graphs.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project    → workspace loading, per-workspace graph cache, fallback scan
//!   ↓
//! graph      → flat GraphNode/GraphEdge conversion, depth statistics
//!   ↓
//! hierarchy  → TypeNode arena, parent linking, qualified paths
//!   ↓
//! extract    → declaration scanner, field parsing, subtype-slot detection
//!   ↓
//! text       → balanced-span extractor, identifier helpers
//!   ↓
//! base       → Location provenance, domain constants
//! ```
//!
//! The pipeline is strictly one-directional: raw text → declaration
//! records → linked hierarchy → flat graph. The rendering layer is an
//! external consumer of [`GraphData`] and nothing here depends on it.

// ============================================================================
// MODULES (dependency order: base → text → extract → hierarchy → graph → project)
// ============================================================================

/// Foundation types: Location provenance, domain constants
pub mod base;

/// Text scanning: balanced-span extraction, identifier helpers
pub mod text;

/// Declaration extraction from generated type sources
pub mod extract;

/// Parent-pointer tree linking and qualified paths
pub mod hierarchy;

/// Flat graph conversion and statistics
pub mod graph;

/// Workspace loading and graph caching
pub mod project;

// Re-export the types a consumer needs for the full pipeline
pub use base::Location;
pub use extract::{DeclarationRecord, PropertyInfo, extract_declarations};
pub use graph::{
    DepthStats, GraphData, GraphEdge, GraphNode, GraphSummary, convert, depth_stats,
    total_properties,
};
pub use hierarchy::{Hierarchy, NodeId, TypeNode};
pub use project::{GraphProvider, WorkspaceError};
