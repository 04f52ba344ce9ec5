//! Workspace loading and per-workspace graph caching.
//!
//! [`GraphProvider`] is the entry point an embedding host talks to. It
//! looks for the generated types file first and runs the full
//! extract→link→convert pipeline on it; when the file is absent it falls
//! back to scanning `src/` for definition-call markers, which yields a
//! flat presence-only graph. Converted graphs are memoized per workspace
//! path until [`GraphProvider::clear_cache`] is called; the provider has
//! no invalidation logic of its own, callers coalesce repeated loads.

mod error;

use std::collections::hash_map::Entry;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::debug;
use walkdir::WalkDir;

use crate::base::Location;
use crate::base::constants::{
    DEFINE_MARKER, FALLBACK_SCAN_DIR, GENERATED_TYPES_FILE, SOURCE_EXTENSION,
};
use crate::extract::{DeclarationRecord, extract_declarations};
use crate::graph::{GraphData, GraphSummary, convert};
use crate::hierarchy::Hierarchy;

pub use error::WorkspaceError;

/// Provides converted graphs for workspaces, one cached graph per path.
#[derive(Debug, Default)]
pub struct GraphProvider {
    cache: FxHashMap<PathBuf, GraphData>,
}

impl GraphProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the graph for a workspace, building it on first access.
    pub fn load_graph(
        &mut self,
        workspace: impl Into<PathBuf>,
    ) -> Result<&GraphData, WorkspaceError> {
        match self.cache.entry(workspace.into()) {
            Entry::Occupied(entry) => {
                debug!("returning cached graph for {}", entry.key().display());
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let graph = build_graph(entry.key())?;
                Ok(entry.insert(graph))
            }
        }
    }

    /// Peek at a cached graph without building one.
    pub fn cached(&self, workspace: &Path) -> Option<&GraphData> {
        self.cache.get(workspace)
    }

    /// Summary statistics for a cached graph, if one exists.
    pub fn summary(&self, workspace: &Path) -> Option<GraphSummary> {
        self.cached(workspace).map(GraphSummary::of)
    }

    /// Drop all cached graphs.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

/// Build the graph for one workspace, uncached.
///
/// A workspace with neither a generated types file nor any marker
/// matches yields an empty graph, which is a valid result.
pub fn build_graph(workspace: &Path) -> Result<GraphData, WorkspaceError> {
    if !workspace.is_dir() {
        return Err(WorkspaceError::WorkspaceNotFound(workspace.to_path_buf()));
    }

    let generated = workspace.join(GENERATED_TYPES_FILE);
    if generated.is_file() {
        debug!("found {}, extracting declarations", generated.display());
        let content =
            fs::read_to_string(&generated).map_err(|e| WorkspaceError::read(&generated, e))?;
        let records = extract_declarations(&content, &generated);
        return Ok(convert(&Hierarchy::link(&records)));
    }

    debug!(
        "no {} in {}, scanning sources",
        GENERATED_TYPES_FILE,
        workspace.display()
    );
    let records = scan_sources(workspace)?;
    Ok(convert(&Hierarchy::flat(&records)))
}

/// Scan `src/` for definition-call markers.
///
/// Each `define('Name')` match yields a bare record with empty parent and
/// fields; this mode only detects which types exist.
fn scan_sources(workspace: &Path) -> Result<IndexMap<String, DeclarationRecord>, WorkspaceError> {
    let mut records = IndexMap::new();
    let src = workspace.join(FALLBACK_SCAN_DIR);
    if !src.is_dir() {
        return Ok(records);
    }

    for entry in WalkDir::new(&src).sort_by_file_name() {
        let entry = entry.map_err(|e| WorkspaceError::scan(&src, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION) {
            continue;
        }
        let content = fs::read_to_string(path).map_err(|e| WorkspaceError::read(path, e))?;
        scan_file(&content, path, &mut records);
    }

    debug!("fallback scan found {} definition(s)", records.len());
    Ok(records)
}

/// Collect every marker match in one file into bare records.
fn scan_file(content: &str, path: &Path, records: &mut IndexMap<String, DeclarationRecord>) {
    for (line_idx, line) in content.lines().enumerate() {
        let mut rest = line;
        while let Some(pos) = rest.find(DEFINE_MARKER) {
            rest = &rest[pos + DEFINE_MARKER.len()..];
            if let Some(name) = quoted_name(rest) {
                records.insert(
                    name.to_string(),
                    DeclarationRecord::bare(name, Location::new(path, line_idx + 1, 0)),
                );
            }
        }
    }
}

/// Extract a quoted name from the start of `text` (after optional
/// whitespace): `'Name'` or `"Name"`.
fn quoted_name(text: &str) -> Option<&str> {
    let text = text.trim_start();
    let quote = text.chars().next().filter(|c| *c == '\'' || *c == '"')?;
    let inner = &text[1..];
    let end = inner.find(quote)?;
    (end > 0).then(|| &inner[..end])
}
