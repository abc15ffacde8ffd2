//! Graph command - load a graph description and list its edges

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexgame_core::WeightedGraph;

#[derive(Args)]
pub struct GraphArgs {
    /// Graph file: vertex count followed by `from to cost` triples
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Run graph command
pub fn run(args: GraphArgs) -> Result<()> {
    let graph = WeightedGraph::from_file(&args.file)
        .with_context(|| format!("Failed to load graph: {}", args.file.display()))?;

    tracing::info!(
        "Loaded {} with {} vertices and {} edges",
        args.file.display(),
        graph.vertex_count(),
        graph.edge_count()
    );

    print!("{}", Describe(&graph));
    Ok(())
}

/// Counts, then one line per vertex: `v: n1 (cost) n2 (cost) ...`
struct Describe<'a>(&'a WeightedGraph);

impl fmt::Display for Describe<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.0;
        writeln!(f, "vertices: {}", graph.vertex_count())?;
        writeln!(f, "edges: {}", graph.edge_count())?;
        for v in graph.vertices() {
            write!(f, "{v}:")?;
            for n in graph.neighbors(v) {
                if let Some(cost) = graph.cost(v, n) {
                    write!(f, " {n} ({cost})")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
