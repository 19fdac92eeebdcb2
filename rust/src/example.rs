use clap::Args;
use tools::{
    fixtures::reference_example,
    format::{format_layers, format_matrix},
};
use tracing::info;
use warshall::{distance_with, matrices_equal, reachability};

#[derive(Args)]
pub struct ExampleArgs {
    /// Also print the distance matrix after every k-pass
    #[arg(long)]
    trace: bool,
}

pub fn run(args: ExampleArgs) -> Result<(), anyhow::Error> {
    let example = reference_example();

    // comparator sanity: a matrix equals itself, and differs from a different matrix
    println!("{}", matrices_equal(&example.adjacency, &example.adjacency));
    println!("{}", matrices_equal(&example.adjacency, &example.distances));

    println!("There are {} vertices", example.adjacency.rows());
    println!("Input adjacency matrix is:");
    println!("{}", format_matrix(&example.adjacency));

    let closure = reachability(&example.adjacency)?.to_indicator();
    println!("Reachability matrix is (Warshall algorithm):");
    println!("{}", format_matrix(&closure));
    let closure_ok = matrices_equal(&closure, &example.closure);
    println!("Equivalent to reference solution?: {closure_ok}");

    let mut layers = Vec::new();
    let distances = distance_with(&example.adjacency, |_, layer| {
        if args.trace {
            layers.push(layer.clone());
        }
    })?;
    if args.trace {
        println!("Relaxation layers:");
        println!("{}", format_layers(&layers));
    }
    println!("Graph distance matrix is (Floyd-Warshall algorithm):");
    println!("{}", format_matrix(&distances));
    let distances_ok = matrices_equal(&distances, &example.distances);
    println!("Equivalent to reference solution?: {distances_ok}");

    info!(closure_ok, distances_ok, "reference example checked");
    if !(closure_ok && distances_ok) {
        anyhow::bail!("engine output differs from the reference solutions");
    }
    Ok(())
}
