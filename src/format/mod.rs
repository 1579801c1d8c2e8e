//! Text file I/O for graph files.

pub mod reader;
pub mod writer;

pub use reader::GraphReader;
pub use writer::GraphWriter;
