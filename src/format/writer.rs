//! Writes an in-memory graph in the text format.

use std::io::{BufWriter, Write};
use std::path::Path;

use crate::graph::CostGraph;
use crate::types::GraphResult;

/// Writer for the line-oriented graph text format.
///
/// Emits the `"<vertex_count> <edge_count>"` header, then walks the
/// vertices in ascending order: a vertex with out-degree zero is written
/// as a bare id, any other vertex as one `"<from> <to> <cost>"` line per
/// outbound edge (neighbors ascending). [`super::GraphReader`] restores
/// the exact same graph from this output.
pub struct GraphWriter;

impl GraphWriter {
    /// Write a graph to a file.
    pub fn write_to_file(graph: &CostGraph, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a graph to any writer.
    pub fn write_to(graph: &CostGraph, writer: &mut impl Write) -> GraphResult<()> {
        writeln!(writer, "{} {}", graph.vertex_count(), graph.edge_count())?;
        for vertex in graph.vertices() {
            let neighbors = graph.outbound_with_costs(vertex)?;
            if neighbors.is_empty() {
                writeln!(writer, "{}", vertex)?;
            } else {
                for (to, cost) in neighbors {
                    writeln!(writer, "{} {} {}", vertex, to, cost)?;
                }
            }
        }
        Ok(())
    }
}
