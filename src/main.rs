use anyhow::Context;
use clap::{CommandFactory, Parser};
use log::info;

use slpa_community::config::SlpaConfig;
use slpa_community::extract::CommunityExtractor;
use slpa_community::graph::Graph;
use slpa_community::logger::init_logger;
use slpa_community::progress::ProgressMeter;
use slpa_community::propagate::PropagationEngine;

/// Detect overlapping communities in an undirected graph with SLPA.
#[derive(Parser, Debug)]
#[command(name = "slpa", version, about, long_about = None)]
struct Args {
    /// Edge list file, the first line is a header and is skipped.
    input: String,

    /// Output file, one community per line.
    output: String,

    /// Number of propagation rounds to run.
    num_iterations: String,

    /// Membership probability threshold, within [0, 0.5].
    threshold: String,

    /// Seed for the random number generator, entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    // Hand-parse the numeric positionals so a bad value reports through the
    // same clap error path as a bad range, usage block included.
    let config = SlpaConfig::parse(&args.num_iterations, &args.threshold, args.seed)
        .unwrap_or_else(|err| {
            Args::command()
                .error(clap::error::ErrorKind::ValueValidation, err.to_string())
                .exit()
        });
    init_logger();

    let mut graph = Graph::from_edge_list_file(&args.input)
        .with_context(|| format!("cannot load edge list from {}", args.input))?;
    info!(
        "graph loaded from {}: {} vertices, {} edges",
        args.input,
        graph.vertex_count(),
        graph.edge_count()
    );

    let mut engine = PropagationEngine::create(config.seed);
    let mut meter = ProgressMeter::start();
    for _ in 0..config.num_iterations {
        engine.propagate_round(&mut graph);
        meter.tick();
    }
    meter.finish();
    info!("{} propagation rounds complete", config.num_iterations);

    let extractor = CommunityExtractor::create(config.threshold);
    let partition = extractor.extract(&mut graph);
    partition
        .write_to_file(&args.output)
        .with_context(|| format!("cannot write communities to {}", args.output))?;
    info!(
        "{} communities written to {}",
        partition.community_count(),
        args.output
    );
    println!(
        "{} different communities identified and written to {}",
        partition.community_count(),
        args.output
    );
    Ok(())
}
