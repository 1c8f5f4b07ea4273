mod orchestrator;
mod transactions;
mod loader;
mod analyzer;
mod users;

use::std::env;
use::std::process;

use orchestrator::run;
use env_logger;
use log::info;

fn main() {
    // Collect command-line arguments - expecting exactly one argument for the transactions directory
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <transactions-directory>", args[0]);
        process::exit(1);
    }
    // Call the run function with the provided directory
    let directory = &args[1];
    // Initialize logger (respect RUST_LOG env var if set)
    env_logger::init();

    info!("starting card-present analysis for directory: {}", directory);

    if let Err(e) = run(directory) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
