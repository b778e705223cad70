//! Plain Graphviz DOT export implementation.
//!
//! Same edge lines as the PlantUML exporter, without the PlantUML
//! wrapper, for feeding `dot` directly.

use super::{escape_name, Exporter};
use crate::graph::DependencyGraph;
use std::io::{self, Write};

/// DOT exporter implementation.
pub struct DotExporter;

impl Exporter for DotExporter {
    fn export<W: Write>(&self, graph: &DependencyGraph, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "digraph dependencies {{")?;

        for (node, dep) in graph.edges() {
            writeln!(writer, "  \"{}\" -> \"{}\";", escape_name(node), escape_name(dep))?;
        }

        writeln!(writer, "}}")?;
        Ok(())
    }
}
