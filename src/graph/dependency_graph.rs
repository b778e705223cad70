//! Flat dependency graph built from installed package manifests.
//!
//! The graph is a mapping from package name to that package's declared
//! dependency names, in insertion order. Cycle analysis over the finished
//! mapping is backed by petgraph.

use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};

/// A single graph entry: a resolved package and its declared dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GraphEntry {
    /// Package name this entry was resolved under.
    pub name: String,
    /// Declared production dependency names, in manifest order.
    pub dependencies: Vec<String>,
}

/// A dependency graph keyed by package name.
///
/// Every key is a package whose manifest was actually found; dependency
/// names with no corresponding key ("dangling" references, e.g. a package
/// that is declared but not installed) are permitted and must be tolerated
/// by consumers. Iteration order is insertion order, so identical build
/// inputs produce identical iteration and identical rendered output.
///
/// Re-inserting an existing key replaces its dependency list but keeps the
/// key's original position, matching the last-write-wins semantics of a
/// plain name-keyed mapping.
///
/// # Example
///
/// ```rust
/// use depviz::graph::DependencyGraph;
///
/// let mut graph = DependencyGraph::new();
/// graph.insert("my-app", vec!["react".into(), "lodash".into()]);
/// graph.insert("react", vec![]);
///
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.get("my-app"), Some(&["react".to_string(), "lodash".to_string()][..]));
/// assert!(graph.get("lodash").is_none()); // dangling reference
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    /// Entries in insertion order.
    entries: Vec<GraphEntry>,
    /// Maps package names to their position in `entries` for O(1) lookup.
    index: HashMap<String, usize>,
}

impl DependencyGraph {
    /// Creates a new empty dependency graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new graph with pre-allocated capacity.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            entries: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
        }
    }

    /// Inserts or replaces the dependency list for a package.
    ///
    /// If the package is already present its list is replaced in place;
    /// the key keeps its original insertion position.
    ///
    /// # Arguments
    ///
    /// * `name` - Package name
    /// * `dependencies` - Declared dependency names, in manifest order
    pub fn insert(&mut self, name: &str, dependencies: Vec<String>) {
        if let Some(&pos) = self.index.get(name) {
            self.entries[pos].dependencies = dependencies;
            return;
        }

        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push(GraphEntry {
            name: name.to_string(),
            dependencies,
        });
    }

    /// Gets the recorded dependency list for a package.
    ///
    /// Returns `None` for names that appear only as dependency values.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.index
            .get(name)
            .map(|&pos| self.entries[pos].dependencies.as_slice())
    }

    /// Checks if a package exists as a key in the graph.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the number of packages (keys) in the graph.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.dependencies.as_slice()))
    }

    /// Iterates over package names in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Iterates over all (dependent, dependency) edge pairs.
    ///
    /// Nodes follow insertion order, dependencies follow stored list order.
    /// Edge targets are not required to exist as keys.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|e| {
            e.dependencies
                .iter()
                .map(move |dep| (e.name.as_str(), dep.as_str()))
        })
    }

    /// Returns the total number of recorded edges.
    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|e| e.dependencies.len()).sum()
    }

    /// Returns dependency names that are referenced but never resolved.
    ///
    /// These are the graph's dangling edge targets, deduplicated, in first
    /// reference order.
    pub fn dangling_targets(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.edges()
            .filter(|(_, to)| !self.contains(to))
            .filter(|(_, to)| seen.insert(*to))
            .map(|(_, to)| to)
            .collect()
    }

    /// Checks if the graph contains cycles.
    ///
    /// Circular dependency declarations are legal in npm trees; the builder
    /// breaks them during traversal, but the declared edges survive into
    /// the graph.
    ///
    /// # Example
    ///
    /// ```rust
    /// use depviz::graph::DependencyGraph;
    ///
    /// let mut graph = DependencyGraph::new();
    /// graph.insert("a", vec!["b".into()]);
    /// graph.insert("b", vec!["a".into()]);
    ///
    /// assert!(graph.has_cycles());
    /// ```
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.to_petgraph())
    }

    /// Detects and returns all cycles in the graph.
    ///
    /// Uses Tarjan's strongly connected components; a component is a cycle
    /// if it has more than one node, or is a single node with a self-loop.
    ///
    /// # Returns
    ///
    /// A vector of cycles, where each cycle is a vector of package names.
    pub fn detect_cycles(&self) -> Vec<Vec<String>> {
        let graph = self.to_petgraph();
        let mut cycles = Vec::new();

        for scc in tarjan_scc(&graph) {
            if scc.len() > 1 {
                let cycle: Vec<String> = scc
                    .iter()
                    .map(|&idx| graph[idx].clone())
                    .collect();
                cycles.push(cycle);
            } else if let Some(&idx) = scc.first() {
                if graph.contains_edge(idx, idx) {
                    cycles.push(vec![graph[idx].clone()]);
                }
            }
        }

        cycles
    }

    /// Returns the set of package names that are part of any cycle.
    pub fn nodes_in_cycles(&self) -> HashSet<String> {
        self.detect_cycles().into_iter().flatten().collect()
    }

    /// Builds a petgraph view of the mapping for cycle analysis.
    ///
    /// Dangling targets become nodes with no out-edges; they can never be
    /// part of a cycle but keeping them makes the edge set complete.
    fn to_petgraph(&self) -> DiGraph<String, ()> {
        let mut graph = DiGraph::new();
        let mut indices: HashMap<&str, NodeIndex> = HashMap::with_capacity(self.entries.len());

        for entry in &self.entries {
            let idx = graph.add_node(entry.name.clone());
            indices.insert(entry.name.as_str(), idx);
        }
        for entry in &self.entries {
            let from = indices[entry.name.as_str()];
            for dep in &entry.dependencies {
                let to = match indices.get(dep.as_str()).copied() {
                    Some(idx) => idx,
                    None => {
                        let idx = graph.add_node(dep.clone());
                        indices.insert(dep.as_str(), idx);
                        idx
                    }
                };
                graph.add_edge(from, to, ());
            }
        }

        graph
    }
}
