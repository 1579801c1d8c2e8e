//! Interactive numbered menu over a single in-memory graph.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use crate::format::{GraphReader, GraphWriter};
use crate::graph::{self, CostGraph};
use crate::types::{Cost, GraphResult, VertexId};

/// Run the menu loop until the user exits.
///
/// Commands operate on one graph held in memory; load and save go through
/// the text format. A failed operation prints its error and the loop
/// continues on the unchanged graph.
pub fn run(initial: Option<&Path>) -> GraphResult<()> {
    let mut graph = match initial {
        Some(path) => {
            let graph = GraphReader::read_from_file(path)?;
            println!(
                "Loaded {} ({} vertices, {} edges)",
                path.display(),
                graph.vertex_count(),
                graph.edge_count()
            );
            graph
        }
        None => CostGraph::new(),
    };
    let mut snapshot: Option<CostGraph> = None;

    print_menu();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        prompt("> ")?;
        let choice = match read_trimmed(&mut input)? {
            Some(choice) => choice,
            None => break,
        };
        match choice.as_str() {
            "" => continue,
            "0" | "q" | "quit" | "exit" => break,
            "m" | "menu" | "help" => print_menu(),
            _ => {
                if let Err(error) = dispatch(&choice, &mut graph, &mut snapshot, &mut input) {
                    println!("Error: {}", error);
                }
            }
        }
    }
    println!("Bye.");
    Ok(())
}

fn dispatch(
    choice: &str,
    graph: &mut CostGraph,
    snapshot: &mut Option<CostGraph>,
    input: &mut impl BufRead,
) -> GraphResult<()> {
    match choice {
        "1" => println!("The graph has {} vertices.", graph.vertex_count()),
        "2" => println!("The graph has {} edges.", graph.edge_count()),
        "3" => {
            let vertices = graph.vertices();
            if vertices.is_empty() {
                println!("There are no vertices in the graph.");
            } else {
                println!("Vertices: {}", join(&vertices));
            }
        }
        "4" => {
            let edges = graph.edges();
            if edges.is_empty() {
                println!("The graph has no edges.");
            } else {
                for edge in edges {
                    println!("{}", edge);
                }
            }
        }
        "5" => {
            let vertex: VertexId = read_value(input, "vertex id: ")?;
            if graph.has_vertex(vertex) {
                println!("Yes, vertex {} is in the graph.", vertex);
            } else {
                println!("No, vertex {} is not in the graph.", vertex);
            }
        }
        "6" => {
            let from: VertexId = read_value(input, "from: ")?;
            let to: VertexId = read_value(input, "to: ")?;
            if graph.has_edge(from, to) {
                println!(
                    "Yes, edge {} -> {} is in the graph (cost {}).",
                    from,
                    to,
                    graph.edge_cost(from, to)?
                );
            } else {
                println!("No, edge {} -> {} is not in the graph.", from, to);
            }
        }
        "7" => {
            let from: VertexId = read_value(input, "from: ")?;
            let to: VertexId = read_value(input, "to: ")?;
            println!(
                "The cost of edge {} -> {} is {}.",
                from,
                to,
                graph.edge_cost(from, to)?
            );
        }
        "8" => {
            let vertex: VertexId = read_value(input, "vertex id: ")?;
            println!(
                "The in-degree of vertex {} is {}.",
                vertex,
                graph.in_degree(vertex)?
            );
        }
        "9" => {
            let vertex: VertexId = read_value(input, "vertex id: ")?;
            println!(
                "The out-degree of vertex {} is {}.",
                vertex,
                graph.out_degree(vertex)?
            );
        }
        "10" => {
            let vertex: VertexId = read_value(input, "vertex id: ")?;
            let neighbors = graph.outbound_with_costs(vertex)?;
            if neighbors.is_empty() {
                println!("Vertex {} has no outbound neighbors.", vertex);
            } else {
                println!("Outbound neighbors of vertex {}:", vertex);
                for (neighbor, cost) in neighbors {
                    println!("  {} (cost {})", neighbor, cost);
                }
            }
        }
        "11" => {
            let vertex: VertexId = read_value(input, "vertex id: ")?;
            let neighbors = graph.inbound_with_costs(vertex)?;
            if neighbors.is_empty() {
                println!("Vertex {} has no inbound neighbors.", vertex);
            } else {
                println!("Inbound neighbors of vertex {}:", vertex);
                for (neighbor, cost) in neighbors {
                    println!("  {} (cost {})", neighbor, cost);
                }
            }
        }
        "12" => {
            let vertex: VertexId = read_value(input, "vertex id: ")?;
            graph.add_vertex(vertex)?;
            println!("Vertex {} was added to the graph.", vertex);
        }
        "13" => {
            let vertex: VertexId = read_value(input, "vertex id: ")?;
            let edges_before = graph.edge_count();
            graph.remove_vertex(vertex)?;
            println!(
                "Vertex {} and {} touching edges were removed.",
                vertex,
                edges_before - graph.edge_count()
            );
        }
        "14" => {
            let from: VertexId = read_value(input, "from: ")?;
            let to: VertexId = read_value(input, "to: ")?;
            let cost: Cost = read_value(input, "cost: ")?;
            graph.add_edge(from, to, cost)?;
            println!("Edge {} -> {} (cost {}) was added to the graph.", from, to, cost);
        }
        "15" => {
            let from: VertexId = read_value(input, "from: ")?;
            let to: VertexId = read_value(input, "to: ")?;
            graph.remove_edge(from, to)?;
            println!("Edge {} -> {} was removed from the graph.", from, to);
        }
        "16" => {
            let from: VertexId = read_value(input, "from: ")?;
            let to: VertexId = read_value(input, "to: ")?;
            let cost: Cost = read_value(input, "new cost: ")?;
            graph.set_edge_cost(from, to, cost)?;
            println!("The cost of edge {} -> {} was changed to {}.", from, to, cost);
        }
        "17" => {
            let file = read_text(input, "file name: ")?;
            *graph = GraphReader::read_from_file(Path::new(&file))?;
            println!(
                "Loaded {} ({} vertices, {} edges).",
                file,
                graph.vertex_count(),
                graph.edge_count()
            );
        }
        "18" => {
            let file = read_text(input, "file name: ")?;
            GraphWriter::write_to_file(graph, Path::new(&file))?;
            println!("Saved the graph to {}.", file);
        }
        "19" => {
            let vertices: u64 = read_value(input, "number of vertices: ")?;
            let edges: u64 = read_value(input, "number of edges: ")?;
            *graph = graph::random_graph(vertices, edges)?;
            println!(
                "The graph was replaced by a random one with {} vertices and {} edges.",
                vertices, edges
            );
        }
        "20" => {
            let start: VertexId = read_value(input, "start: ")?;
            let end: VertexId = read_value(input, "end: ")?;
            let path = graph::shortest_path(graph, start, end)?;
            println!("Path with {} edges: {}", path.len() - 1, join_arrows(&path));
        }
        "21" => {
            let start: VertexId = read_value(input, "start: ")?;
            let end: VertexId = read_value(input, "end: ")?;
            let (walk, cost) = graph::min_cost_walk(graph, start, end)?;
            println!("Walk with total cost {}: {}", cost, join_arrows(&walk));
        }
        "22" => {
            let components = graph::strongly_connected_components(graph);
            println!("{} strongly connected components:", components.len());
            for component in components {
                println!("  {}", join(&component));
            }
        }
        "23" => {
            *snapshot = Some(graph.clone());
            println!(
                "Snapshot taken ({} vertices, {} edges).",
                graph.vertex_count(),
                graph.edge_count()
            );
        }
        "24" => match snapshot {
            Some(saved) => {
                *graph = saved.clone();
                println!(
                    "Snapshot restored ({} vertices, {} edges).",
                    graph.vertex_count(),
                    graph.edge_count()
                );
            }
            None => println!("There is no snapshot to restore."),
        },
        _ => println!("Unknown command {:?}; 'm' reprints the menu.", choice),
    }
    Ok(())
}

fn print_menu() {
    println!("Graph operations:");
    println!("   1. number of vertices");
    println!("   2. number of edges");
    println!("   3. list all vertices");
    println!("   4. list all edges");
    println!("   5. check whether a vertex exists");
    println!("   6. check whether an edge exists");
    println!("   7. cost of an edge");
    println!("   8. in-degree of a vertex");
    println!("   9. out-degree of a vertex");
    println!("  10. outbound neighbors of a vertex");
    println!("  11. inbound neighbors of a vertex");
    println!("  12. add a vertex");
    println!("  13. remove a vertex");
    println!("  14. add an edge");
    println!("  15. remove an edge");
    println!("  16. change the cost of an edge");
    println!("  17. load the graph from a file");
    println!("  18. save the graph to a file");
    println!("  19. replace the graph with a random one");
    println!("  20. fewest-edges path between two vertices");
    println!("  21. minimum cost walk between two vertices");
    println!("  22. strongly connected components");
    println!("  23. snapshot the current graph");
    println!("  24. restore the snapshot");
    println!("   0. exit ('m' reprints this menu)");
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{}", text);
    io::stdout().flush()
}

/// Read one line, trimmed; `None` on end of input.
fn read_trimmed(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt until the user enters a parseable value.
fn read_value<T: FromStr>(input: &mut impl BufRead, text: &str) -> GraphResult<T> {
    loop {
        prompt(text)?;
        match read_trimmed(input)? {
            None => return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into()),
            Some(entered) => match entered.parse() {
                Ok(value) => return Ok(value),
                Err(_) => println!("Not an integer: {:?}", entered),
            },
        }
    }
}

/// Prompt for a non-empty line of text.
fn read_text(input: &mut impl BufRead, text: &str) -> GraphResult<String> {
    loop {
        prompt(text)?;
        match read_trimmed(input)? {
            None => return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into()),
            Some(entered) if entered.is_empty() => continue,
            Some(entered) => return Ok(entered),
        }
    }
}

fn join(vertices: &[VertexId]) -> String {
    vertices
        .iter()
        .map(|vertex| vertex.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_arrows(vertices: &[VertexId]) -> String {
    vertices
        .iter()
        .map(|vertex| vertex.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
