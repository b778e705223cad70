//! PlantUML export implementation.
//!
//! Emits the graph as a PlantUML document wrapping a DOT digraph, the
//! shape the `plantuml` renderer accepts for dependency diagrams:
//!
//! ```text
//! @startuml
//! digraph G {
//!   "app" -> "react";
//! }
//! @enduml
//! ```

use super::{escape_name, Exporter};
use crate::graph::DependencyGraph;
use std::io::{self, Write};

/// PlantUML exporter implementation.
pub struct PlantUmlExporter;

impl Exporter for PlantUmlExporter {
    fn export<W: Write>(&self, graph: &DependencyGraph, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "@startuml")?;
        writeln!(writer, "digraph G {{")?;

        for (node, dep) in graph.edges() {
            writeln!(writer, "  \"{}\" -> \"{}\";", escape_name(node), escape_name(dep))?;
        }

        writeln!(writer, "}}")?;
        writeln!(writer, "@enduml")?;
        Ok(())
    }
}
