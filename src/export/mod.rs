//! Diagram export for dependency graphs.
//!
//! This module renders a finished [`DependencyGraph`] as a textual diagram
//! description: PlantUML (for the `plantuml` renderer) or plain Graphviz
//! DOT. Rendering is pure formatting over the graph value; writing the
//! result to a file or invoking a renderer is the caller's concern.

pub mod dot;
pub mod plantuml;

use crate::graph::DependencyGraph;
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// PlantUML document wrapping a DOT digraph
    PlantUml,
    /// Plain Graphviz DOT
    Dot,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plantuml" | "puml" => Ok(ExportFormat::PlantUml),
            "dot" => Ok(ExportFormat::Dot),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: plantuml, dot",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::PlantUml => write!(f, "plantuml"),
            ExportFormat::Dot => write!(f, "dot"),
        }
    }
}

/// Trait for diagram exporters.
///
/// Exporters emit one line per (node, dependency) edge pair, in the
/// graph's iteration order for nodes and stored list order for
/// dependencies, so identical graph values always render to identical
/// text. Edge targets that are not graph keys (dangling references) are
/// emitted without any lookup.
pub trait Exporter {
    /// Render the graph to the given writer.
    fn export<W: Write>(&self, graph: &DependencyGraph, writer: &mut W) -> io::Result<()>;
}

/// Render the graph in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    graph: &DependencyGraph,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::PlantUml => plantuml::PlantUmlExporter.export(graph, writer),
        ExportFormat::Dot => dot::DotExporter.export(graph, writer),
    }
}

/// Render the graph to a string.
pub fn export_to_string(format: ExportFormat, graph: &DependencyGraph) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, graph, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Escapes a package name for use inside a double-quoted DOT identifier.
pub(crate) fn escape_name(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
