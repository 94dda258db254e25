//! Promise core demo CLI.
//!
//! A small driver that exercises the `promise` crate's chaining primitives
//! from the command line, for manual inspection of the scenarios the core
//! is built to satisfy.

use clap::{Parser, Subcommand};

use promise::factory::{make_rejected, make_resolved};
use promise::outcome::Outcome;

/// Run a scripted promise scenario and print its outcome.
#[derive(Parser, Debug)]
#[command(name = "promise-demo")]
#[command(author, version, about = "Exercise the promise core from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a promise with an integer, then chain a `then` off it.
    Resolve {
        /// Value to resolve with.
        value: i64,
    },
    /// Reject a promise with a message, then recover it with `rescue`.
    Reject {
        /// Message to reject with.
        message: String,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("dispatching {:?}", cli.command);

    match cli.command {
        Commands::Resolve { value } => {
            let p = make_resolved(value);
            let q = p.then_ok(|v| {
                log::info!("resolve handler saw {v}");
                Ok(Outcome::Value(v + 1))
            });
            println!("settled: {:?}", q.value());
        }
        Commands::Reject { message } => {
            let p = make_rejected::<i64, _>(message);
            let q = p.rescue(|e| {
                log::info!("reject handler saw {e}");
                Ok(Outcome::Value(-1))
            });
            println!("recovered: {:?}", q.value());
        }
    }
}
