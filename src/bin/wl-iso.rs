use std::error::Error;
use std::io::{stdin, stdout, BufWriter, Write};

use clap::{Parser, ValueEnum};
use log::info;
use wl_iso::{
    backtrack::{backtrack_degree, backtrack_simple},
    find_isomorphism_with_stats,
    io::{read_graph_pair, write_outcome},
};

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum Algorithm {
    /// Colour refinement with backtracking
    WeisfeilerLehman,
    /// Plain backtracking over all images
    Backtrack,
    /// Backtracking over images of equal degree
    BacktrackDegree,
}

/// Decide whether two graphs read from standard input are isomorphic
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[arg(long, value_enum, default_value_t = Algorithm::WeisfeilerLehman)]
    algorithm: Algorithm,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let (g1, g2) = read_graph_pair(stdin().lock())?;
    info!(
        "Read graphs with {} and {} nodes",
        g1.node_count(),
        g2.node_count()
    );

    let iso = match cli.algorithm {
        Algorithm::WeisfeilerLehman => {
            let (iso, stats) = find_isomorphism_with_stats(&g1, &g2);
            info!("{stats:?}");
            iso
        }
        Algorithm::Backtrack => backtrack_simple(&g1, &g2),
        Algorithm::BacktrackDegree => backtrack_degree(&g1, &g2),
    };

    let mut out = BufWriter::new(stdout().lock());
    write_outcome(&mut out, iso.as_deref())?;
    out.flush()?;
    Ok(())
}
