//! Reads graph text files into an in-memory graph.

use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::graph::CostGraph;
use crate::types::{Cost, GraphError, GraphResult, VertexId};

/// Reader for the line-oriented graph text format.
///
/// The first line is a `"<vertex_count> <edge_count>"` header. Every
/// following non-blank line is either a bare vertex id or a
/// `"<from> <to> <cost>"` edge record; edge endpoints are added to the
/// graph on first sight. The loaded graph must match the header counts.
pub struct GraphReader;

impl GraphReader {
    /// Read a graph file into a CostGraph.
    pub fn read_from_file(path: &Path) -> GraphResult<CostGraph> {
        let file = std::fs::File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    /// Read the text format from any buffered reader.
    pub fn read_from(reader: impl BufRead) -> GraphResult<CostGraph> {
        let mut lines = reader.lines();
        let header = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(GraphError::Malformed {
                    line: 1,
                    text: String::new(),
                })
            }
        };
        let (vertex_count, edge_count) = parse_header(&header)?;

        let mut graph = CostGraph::new();
        for (index, line) in lines.enumerate() {
            let line = line?;
            let line_no = index + 2; // the header occupies line 1
            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [] => continue,
                [vertex] => {
                    let vertex: VertexId = parse_field(vertex, line_no, &line)?;
                    if !graph.has_vertex(vertex) {
                        graph.add_vertex(vertex)?;
                    }
                }
                [from, to, cost] => {
                    let from: VertexId = parse_field(from, line_no, &line)?;
                    let to: VertexId = parse_field(to, line_no, &line)?;
                    let cost: Cost = parse_field(cost, line_no, &line)?;
                    if !graph.has_vertex(from) {
                        graph.add_vertex(from)?;
                    }
                    if !graph.has_vertex(to) {
                        graph.add_vertex(to)?;
                    }
                    graph.add_edge(from, to, cost)?;
                }
                _ => {
                    return Err(GraphError::Malformed {
                        line: line_no,
                        text: line,
                    })
                }
            }
        }

        if graph.vertex_count() as u64 != vertex_count {
            return Err(GraphError::HeaderMismatch {
                what: "vertices",
                expected: vertex_count,
                actual: graph.vertex_count() as u64,
            });
        }
        if graph.edge_count() as u64 != edge_count {
            return Err(GraphError::HeaderMismatch {
                what: "edges",
                expected: edge_count,
                actual: graph.edge_count() as u64,
            });
        }

        log::debug!(
            "loaded graph with {} vertices and {} edges",
            vertex_count,
            edge_count
        );
        Ok(graph)
    }
}

fn parse_header(header: &str) -> GraphResult<(u64, u64)> {
    let fields: Vec<&str> = header.split_whitespace().collect();
    match fields.as_slice() {
        [vertices, edges] => Ok((
            parse_field(vertices, 1, header)?,
            parse_field(edges, 1, header)?,
        )),
        _ => Err(GraphError::Malformed {
            line: 1,
            text: header.to_string(),
        }),
    }
}

fn parse_field<T: std::str::FromStr>(field: &str, line: usize, text: &str) -> GraphResult<T> {
    field.parse().map_err(|_| GraphError::Malformed {
        line,
        text: text.to_string(),
    })
}
