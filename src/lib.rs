//! depviz - dependency graph builder for npm package trees
//!
//! This crate reads an installed npm package tree (`package.json` plus
//! `node_modules/*/package.json`), builds a bounded-depth dependency graph,
//! and renders it as a PlantUML or DOT diagram description.
//!
//! # Example
//!
//! ```no_run
//! use depviz::export::{export_to_string, ExportFormat};
//! use depviz::graph::{build_graph_from_dir, DEFAULT_MAX_DEPTH};
//!
//! let graph = build_graph_from_dir("/path/to/project", DEFAULT_MAX_DEPTH).unwrap();
//! let diagram = export_to_string(ExportFormat::PlantUml, &graph).unwrap();
//! println!("{diagram}");
//! ```

pub mod export;
pub mod graph;
pub mod parser;
