//! Integration tests for workspace loading and graph caching.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use typeatlas::{GraphProvider, WorkspaceError};

fn workspace_with_generated(types: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    let generated_dir = dir.path().join(".typeatlas");
    fs::create_dir_all(&generated_dir).unwrap();
    fs::write(generated_dir.join("types.ts"), types).unwrap();
    dir
}

#[test]
fn loads_graph_from_generated_types_file() {
    let ws = workspace_with_generated(
        "export type AppInstance = {\n\
         \tname: string;\n\
         };\n\
         export type Session = AppInstance & {\n\
         \ttoken: string;\n\
         };\n",
    );

    let mut provider = GraphProvider::new();
    let graph = provider.load_graph(ws.path()).unwrap();

    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.links.len(), 1);
    assert_eq!(graph.nodes[1].id, "AppInstance.Session");

    // Provenance points at the generated file.
    assert!(graph.nodes[0].location.file.ends_with(".typeatlas/types.ts"));
}

#[test]
fn falls_back_to_source_scan() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src").join("nested");
    fs::create_dir_all(&src).unwrap();
    fs::write(
        src.join("app.ts"),
        "const app = define('App', base);\nconst user = define(\"User\");\n",
    )
    .unwrap();
    fs::write(src.join("notes.txt"), "define('Ignored')").unwrap();

    let mut provider = GraphProvider::new();
    let graph = provider.load_graph(dir.path()).unwrap();

    // Every match becomes its own root; no edges in fallback mode.
    assert_eq!(graph.nodes.len(), 2);
    assert!(graph.links.is_empty());
    assert!(graph.nodes.iter().all(|n| n.is_root && n.depth == 0));
    assert!(graph.nodes.iter().all(|n| n.properties.is_empty()));

    let app = graph.nodes.iter().find(|n| n.id == "App").unwrap();
    assert!(app.location.file.ends_with("app.ts"));
    assert_eq!(app.location.line, 1);
}

#[test]
fn workspace_without_sources_yields_empty_graph() {
    let dir = TempDir::new().unwrap();

    let mut provider = GraphProvider::new();
    let graph = provider.load_graph(dir.path()).unwrap();

    assert!(graph.nodes.is_empty());
    assert!(graph.links.is_empty());
}

#[test]
fn missing_workspace_is_a_hard_failure() {
    let mut provider = GraphProvider::new();
    let err = provider
        .load_graph(Path::new("/nonexistent/workspace/path"))
        .unwrap_err();

    assert!(matches!(err, WorkspaceError::WorkspaceNotFound(_)));
}

#[test]
fn graphs_are_cached_per_workspace() {
    let ws = workspace_with_generated("export type OneInstance = { a: string };\n");

    let mut provider = GraphProvider::new();
    assert!(provider.cached(ws.path()).is_none());

    provider.load_graph(ws.path()).unwrap();
    assert!(provider.cached(ws.path()).is_some());

    // The cache is keyed by path, not by file content: a rewrite of the
    // generated file is invisible until the cache is cleared.
    fs::write(
        ws.path().join(".typeatlas/types.ts"),
        "export type TwoInstance = { b: string };\nexport type ThreeInstance = { c: string };\n",
    )
    .unwrap();

    let stale = provider.load_graph(ws.path()).unwrap();
    assert_eq!(stale.nodes.len(), 1);

    provider.clear_cache();
    assert!(provider.cached(ws.path()).is_none());
    let fresh = provider.load_graph(ws.path()).unwrap();
    assert_eq!(fresh.nodes.len(), 2);
}

#[test]
fn summary_reflects_cached_graph() {
    let ws = workspace_with_generated(
        "export type RootInstance = {\n\
         \ta: string;\n\
         \tb: number;\n\
         };\n\
         export type Leaf = RootInstance & { c: boolean };\n",
    );

    let mut provider = GraphProvider::new();
    assert!(provider.summary(ws.path()).is_none());

    provider.load_graph(ws.path()).unwrap();
    let summary = provider.summary(ws.path()).unwrap();

    assert_eq!(summary.type_count, 2);
    assert_eq!(summary.relationship_count, 1);
    // Leaf inherits a/b and adds c.
    assert_eq!(summary.property_count, 5);
    assert_eq!(summary.max_depth, 1);
}
