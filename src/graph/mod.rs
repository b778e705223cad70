//! Graph module for dependency relationship modeling.
//!
//! This module provides the [`DependencyGraph`] mapping, the
//! [`ManifestSource`] lookup abstraction, and the bounded-depth
//! [`build_graph`] traversal that ties them together.
//!
//! # Example
//!
//! ```rust
//! use depviz::graph::{build_graph, InMemorySource};
//!
//! let source = InMemorySource::new()
//!     .with_root(r#"{"name": "app", "dependencies": {"react": "^18.2.0"}}"#)
//!     .with_package("react", r#"{"name": "react"}"#);
//!
//! let graph = build_graph(&source, 3).unwrap();
//! assert_eq!(graph.len(), 2);
//! ```

mod builder;
mod dependency_graph;
mod source;

pub use builder::{build_graph, build_graph_from_dir, DEFAULT_MAX_DEPTH};
pub use dependency_graph::DependencyGraph;
pub use source::{
    FsManifestSource, GraphError, InMemorySource, ManifestSource, MANIFEST_FILE, MODULES_DIR,
};
