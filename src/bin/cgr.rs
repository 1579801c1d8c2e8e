//! CLI entry point for the `cgr` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use costgraph::cli::{commands, shell};
use costgraph::types::GraphError;

#[derive(Parser)]
#[command(
    name = "cgr",
    about = "costgraph CLI — directed weighted graphs in a plain text format"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new graph file
    New {
        /// Path to the graph file to create
        file: PathBuf,
        /// Number of vertices, numbered from 0
        #[arg(long, default_value = "0")]
        vertices: u64,
    },
    /// Display information about a graph file
    Info {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Generate a random graph and write it to a file
    Random {
        /// Path to the graph file to create
        file: PathBuf,
        /// Number of vertices
        vertices: u64,
        /// Number of edges
        edges: u64,
    },
    /// Add a vertex
    AddVertex {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex id
        vertex: u64,
    },
    /// Remove a vertex and every edge touching it
    RemoveVertex {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex id
        vertex: u64,
    },
    /// Add an edge
    AddEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Starting vertex
        from: u64,
        /// Ending vertex
        to: u64,
        /// Edge cost
        #[arg(allow_negative_numbers = true)]
        cost: i64,
    },
    /// Remove an edge
    RemoveEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Starting vertex
        from: u64,
        /// Ending vertex
        to: u64,
    },
    /// Change the cost of an existing edge
    SetCost {
        /// Path to the graph file
        file: PathBuf,
        /// Starting vertex
        from: u64,
        /// Ending vertex
        to: u64,
        /// New edge cost
        #[arg(allow_negative_numbers = true)]
        cost: i64,
    },
    /// Fewest-edges path between two vertices
    Path {
        /// Path to the graph file
        file: PathBuf,
        /// Starting vertex
        start: u64,
        /// Ending vertex
        end: u64,
    },
    /// Minimum cost walk between two vertices
    Walk {
        /// Path to the graph file
        file: PathBuf,
        /// Starting vertex
        start: u64,
        /// Ending vertex
        end: u64,
    },
    /// Strongly connected components
    Scc {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Interactive menu over a graph kept in memory
    Shell {
        /// Graph file to load on startup
        file: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    }

    let result = match cli.command {
        Commands::New { file, vertices } => commands::cmd_new(&file, vertices, json),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Random {
            file,
            vertices,
            edges,
        } => commands::cmd_random(&file, vertices, edges, json),
        Commands::AddVertex { file, vertex } => commands::cmd_add_vertex(&file, vertex, json),
        Commands::RemoveVertex { file, vertex } => commands::cmd_remove_vertex(&file, vertex, json),
        Commands::AddEdge {
            file,
            from,
            to,
            cost,
        } => commands::cmd_add_edge(&file, from, to, cost, json),
        Commands::RemoveEdge { file, from, to } => commands::cmd_remove_edge(&file, from, to, json),
        Commands::SetCost {
            file,
            from,
            to,
            cost,
        } => commands::cmd_set_cost(&file, from, to, cost, json),
        Commands::Path { file, start, end } => commands::cmd_path(&file, start, end, json),
        Commands::Walk { file, start, end } => commands::cmd_walk(&file, start, end, json),
        Commands::Scc { file } => commands::cmd_scc(&file, json),
        Commands::Shell { file } => shell::run(file.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Malformed { .. } | GraphError::HeaderMismatch { .. } => 2,
            GraphError::NotFound(_) | GraphError::EdgeNotFound { .. } => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
