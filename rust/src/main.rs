use clap::{Parser, Subcommand};

use crate::{bench::BenchArgs, example::ExampleArgs};

mod bench;
mod example;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run both engines on the built-in reference graph and check the known solutions
    Example {
        #[command(flatten)]
        args: ExampleArgs,
    },
    /// Time both engines on random graphs
    #[command(visible_alias = "b")]
    Bench {
        #[command(flatten)]
        args: BenchArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Example { args } => example::run(args)?,
        Commands::Bench { args } => bench::run(args)?,
    }

    Ok(())
}
