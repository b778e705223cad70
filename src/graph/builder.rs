//! Bounded-depth recursive construction of the dependency graph.
//!
//! Starting from the root manifest, the builder walks each declared
//! dependency through a [`ManifestSource`], recording every package whose
//! manifest is found together with its literal declared dependency list.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, trace};

use super::dependency_graph::DependencyGraph;
use super::source::{FsManifestSource, GraphError, ManifestSource};

/// Default traversal depth when the caller does not specify one.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Builds the dependency graph for the package tree behind `source`.
///
/// The root package is depth 0 and always included, whatever `max_depth`
/// is. Each of its declared dependencies starts a sub-traversal at depth 1
/// with its own fresh visited set; the set is shared down one branch but
/// never across branches. That makes the walk robust against cyclic
/// declarations while still letting a package shared by two branches be
/// reached through either of them; both recordings converge on the same
/// graph key, last write wins.
///
/// Packages with no installed manifest prune their branch silently: the
/// edge from the parent survives in the parent's recorded list, but no key
/// is created and nothing below is visited.
///
/// # Errors
///
/// * [`GraphError::ProjectNotFound`] - no root manifest exists.
/// * [`GraphError::UnnamedProject`] - the root manifest has no name.
/// * [`GraphError::Manifest`] - any manifest on the walk is unparsable.
///
/// No partial graph is returned on error.
///
/// # Example
///
/// ```
/// use depviz::graph::{build_graph, InMemorySource};
///
/// let source = InMemorySource::new()
///     .with_root(r#"{"name": "app", "dependencies": {"a": "^1.0.0"}}"#)
///     .with_package("a", r#"{"name": "a", "dependencies": {"b": "^2.0.0"}}"#)
///     .with_package("b", r#"{"name": "b"}"#);
///
/// let graph = build_graph(&source, 3).unwrap();
/// assert_eq!(graph.get("app"), Some(&["a".to_string()][..]));
/// assert_eq!(graph.get("a"), Some(&["b".to_string()][..]));
/// assert_eq!(graph.get("b"), Some(&[][..]));
/// ```
pub fn build_graph<S: ManifestSource>(
    source: &S,
    max_depth: usize,
) -> Result<DependencyGraph, GraphError> {
    let root = source.root()?;
    let root_name = root.name.as_deref().ok_or(GraphError::UnnamedProject)?;
    let root_deps = root.dependency_names();

    debug!(root = root_name, max_depth, "building dependency graph");

    let mut graph = DependencyGraph::with_capacity(root_deps.len() + 1);
    graph.insert(root_name, root_deps.clone());

    for dep in &root_deps {
        let mut visited = HashSet::new();
        visit(source, dep, 1, max_depth, &mut visited, &mut graph)?;
    }

    debug!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        "dependency graph complete"
    );
    Ok(graph)
}

/// Builds the graph for the npm project at `package_root` on disk.
///
/// Convenience wrapper around [`build_graph`] with an [`FsManifestSource`].
pub fn build_graph_from_dir(
    package_root: impl AsRef<Path>,
    max_depth: usize,
) -> Result<DependencyGraph, GraphError> {
    let source = FsManifestSource::new(package_root.as_ref());
    build_graph(&source, max_depth)
}

/// One step of the recursive walk.
///
/// `visited` is owned by the current root-level branch; it travels down
/// the recursion by mutable borrow and is never shared sideways.
fn visit<S: ManifestSource>(
    source: &S,
    name: &str,
    depth: usize,
    max_depth: usize,
    visited: &mut HashSet<String>,
    graph: &mut DependencyGraph,
) -> Result<(), GraphError> {
    if depth > max_depth {
        trace!(package = name, depth, "depth bound reached, pruning");
        return Ok(());
    }
    if visited.contains(name) {
        trace!(package = name, depth, "already visited in this branch, pruning");
        return Ok(());
    }
    visited.insert(name.to_string());

    let Some(manifest) = source.lookup(name)? else {
        // Not installed: the parent's edge to this name stays, but there
        // is nothing to record or descend into.
        return Ok(());
    };

    let deps = manifest.dependency_names();
    graph.insert(name, deps.clone());

    for dep in &deps {
        visit(source, dep, depth + 1, max_depth, visited, graph)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::source::InMemorySource;

    fn pkg(name: &str, deps: &[&str]) -> String {
        let table: Vec<String> = deps
            .iter()
            .map(|d| format!(r#""{d}": "^1.0.0""#))
            .collect();
        format!(
            r#"{{"name": "{name}", "dependencies": {{{}}}}}"#,
            table.join(", ")
        )
    }

    fn leaf(name: &str) -> String {
        format!(r#"{{"name": "{name}"}}"#)
    }

    #[test]
    fn test_simple_chain() {
        // root "app" -> "a" -> "b"; "b" has no dependencies field
        let source = InMemorySource::new()
            .with_root(pkg("app", &["a"]))
            .with_package("a", pkg("a", &["b"]))
            .with_package("b", leaf("b"));

        let graph = build_graph(&source, 3).unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.get("app"), Some(&["a".to_string()][..]));
        assert_eq!(graph.get("a"), Some(&["b".to_string()][..]));
        assert_eq!(graph.get("b"), Some(&[][..]));
    }

    #[test]
    fn test_missing_dependency_prunes_branch() {
        // "x" is declared but not installed: no key, build still succeeds
        let source = InMemorySource::new().with_root(pkg("app", &["x"]));

        let graph = build_graph(&source, 3).unwrap();

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.get("app"), Some(&["x".to_string()][..]));
        assert!(!graph.contains("x"));
        assert_eq!(graph.dangling_targets(), vec!["x"]);
    }

    #[test]
    fn test_root_missing_is_fatal() {
        let source = InMemorySource::new().with_package("a", leaf("a"));

        let err = build_graph(&source, 3).unwrap_err();
        assert!(matches!(err, GraphError::ProjectNotFound { .. }));
    }

    #[test]
    fn test_unnamed_root_is_fatal() {
        let source = InMemorySource::new().with_root(r#"{"dependencies": {"a": "^1.0.0"}}"#);

        let err = build_graph(&source, 3).unwrap_err();
        assert!(matches!(err, GraphError::UnnamedProject));
    }

    #[test]
    fn test_corrupt_transitive_manifest_is_fatal() {
        let source = InMemorySource::new()
            .with_root(pkg("app", &["broken"]))
            .with_package("broken", "{ definitely not json");

        let err = build_graph(&source, 3).unwrap_err();
        assert!(matches!(err, GraphError::Manifest { .. }));
    }

    #[test]
    fn test_max_depth_zero_keeps_only_root() {
        // Root is depth 0 and always included; "a" is never even read
        let source = InMemorySource::new()
            .with_root(pkg("app", &["a"]))
            .with_package("a", pkg("a", &["b"]))
            .with_package("b", leaf("b"));

        let graph = build_graph(&source, 0).unwrap();

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.get("app"), Some(&["a".to_string()][..]));
        assert!(!graph.contains("a"));
    }

    #[test]
    fn test_depth_bound_excludes_deeper_packages() {
        let source = InMemorySource::new()
            .with_root(pkg("app", &["a"]))
            .with_package("a", pkg("a", &["b"]))
            .with_package("b", pkg("b", &["c"]))
            .with_package("c", leaf("c"));

        let graph = build_graph(&source, 2).unwrap();

        // "c" is reachable only at depth 3
        assert!(graph.contains("a"));
        assert!(graph.contains("b"));
        assert!(!graph.contains("c"));
        // "b"'s literal declared list still names "c"
        assert_eq!(graph.get("b"), Some(&["c".to_string()][..]));
    }

    #[test]
    fn test_cycle_terminates() {
        // a -> b -> a: the branch-local visited set breaks the loop at the
        // second occurrence of "a"
        let source = InMemorySource::new()
            .with_root(pkg("app", &["a"]))
            .with_package("a", pkg("a", &["b"]))
            .with_package("b", pkg("b", &["a"]));

        let graph = build_graph(&source, 10).unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.get("a"), Some(&["b".to_string()][..]));
        assert_eq!(graph.get("b"), Some(&["a".to_string()][..]));
        assert!(graph.has_cycles());
    }

    #[test]
    fn test_self_cycle_terminates() {
        let source = InMemorySource::new()
            .with_root(pkg("app", &["a"]))
            .with_package("a", pkg("a", &["a"]));

        let graph = build_graph(&source, 5).unwrap();

        assert_eq!(graph.get("a"), Some(&["a".to_string()][..]));
    }

    #[test]
    fn test_visited_set_is_branch_local() {
        // "c" is both a root dependency and a dependency of "a". In the
        // "a" branch, "d" sits at depth 3 and is pruned by max_depth = 2;
        // the fresh visited set of the "c" branch lets "c" be re-walked
        // from depth 1, where "d" is within range.
        let source = InMemorySource::new()
            .with_root(pkg("app", &["a", "c"]))
            .with_package("a", pkg("a", &["c"]))
            .with_package("c", pkg("c", &["d"]))
            .with_package("d", leaf("d"));

        let graph = build_graph(&source, 2).unwrap();

        assert!(graph.contains("d"));
        assert_eq!(graph.get("c"), Some(&["d".to_string()][..]));
    }

    #[test]
    fn test_diamond_converges_on_one_key() {
        // "shared" is reachable from both root dependencies; both branches
        // record it independently but the flat mapping holds one key.
        let source = InMemorySource::new()
            .with_root(pkg("app", &["a", "b"]))
            .with_package("a", pkg("a", &["shared"]))
            .with_package("b", pkg("b", &["shared"]))
            .with_package("shared", leaf("shared"));

        let graph = build_graph(&source, 3).unwrap();

        assert_eq!(graph.len(), 4);
        assert_eq!(graph.get("shared"), Some(&[][..]));
    }

    #[test]
    fn test_root_declared_order_preserved() {
        let source = InMemorySource::new()
            .with_root(r#"{"name": "app", "dependencies": {"z": "1", "m": "1", "a": "1"}}"#);

        let graph = build_graph(&source, 3).unwrap();

        assert_eq!(
            graph.get("app"),
            Some(&["z".to_string(), "m".to_string(), "a".to_string()][..])
        );
    }

    #[test]
    fn test_node_order_follows_traversal() {
        let source = InMemorySource::new()
            .with_root(pkg("app", &["b", "a"]))
            .with_package("a", leaf("a"))
            .with_package("b", pkg("b", &["c"]))
            .with_package("c", leaf("c"));

        let graph = build_graph(&source, 3).unwrap();

        // Depth-first, root first, root dependencies in declared order
        let names: Vec<&str> = graph.nodes().collect();
        assert_eq!(names, vec!["app", "b", "c", "a"]);
    }

    #[test]
    fn test_default_max_depth() {
        assert_eq!(DEFAULT_MAX_DEPTH, 3);
    }

    #[test]
    fn test_build_graph_from_dir() {
        use std::fs;

        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("package.json"), pkg("app", &["a"])).unwrap();
        let dir = tmp.path().join("node_modules").join("a");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("package.json"), leaf("a")).unwrap();

        let graph = build_graph_from_dir(tmp.path(), DEFAULT_MAX_DEPTH).unwrap();

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.get("app"), Some(&["a".to_string()][..]));
    }
}
