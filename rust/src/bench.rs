use clap::Args;
use tools::{fixtures::random_graph, timer::Stopwatch};
use tracing::{debug, info};
use warshall::{distance, distance_par, reachability, reachability_par};

#[derive(Args)]
pub struct BenchArgs {
    /// Number of vertices
    n: usize,

    /// Number of random graphs to time
    #[arg(default_value_t = 1)]
    iterations: usize,

    /// Use the row-parallel engines
    #[arg(short, long)]
    parallel: bool,

    /// Seed of the first graph, following graphs use seed + 1, seed + 2, ...
    #[arg(short, long)]
    seed: Option<u64>,

    /// Probability of an edge between any ordered pair of vertices
    #[arg(long, default_value_t = 0.05)]
    density: f64,
}

pub fn run(args: BenchArgs) -> Result<(), anyhow::Error> {
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(
        n = args.n,
        iterations = args.iterations,
        parallel = args.parallel,
        seed,
        "benchmarking with input containing {0}*{0} elements",
        args.n
    );

    for iteration in 0..args.iterations {
        let adjacency = random_graph(args.n, args.density, 1..10, seed.wrapping_add(iteration as u64));
        debug!(iteration, "graph generated");

        let mut stopwatch = Stopwatch::new();
        stopwatch.click();
        if args.parallel {
            reachability_par(&adjacency)?;
        } else {
            reachability(&adjacency)?;
        }
        stopwatch.click();
        if args.parallel {
            distance_par(&adjacency)?;
        } else {
            distance(&adjacency)?;
        }
        stopwatch.click();

        stopwatch.report("reachability, distance");
        let total = stopwatch.total();
        println!("{}.{:06}", total.as_secs(), total.subsec_micros());
    }
    Ok(())
}
