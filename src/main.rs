// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build the job list from the input file (fatal if any line is bad)
// 3. Run the worker pool to completion - every job, success or failure
// 4. Restore original input order and write the requested artifacts
// 5. Exit with proper code (0 = run completed, 2 = fatal error)
//
// The important split: anything wrong with the *run setup* (unreadable
// input, malformed target line, unwritable output) aborts immediately with
// no artifacts; anything wrong with an *individual probe* is just data in
// its result and never stops the run.
//
// Rust concepts used:
// - async/await: the probing phase runs many requests concurrently
// - Result<T, E>: for error handling on the fatal paths
// - ?: bubbles fatal errors up to one place
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod jobs; // src/jobs/ - input lines -> ordered probe jobs
mod output; // src/output/ - the four result formatters
mod pool; // src/pool/ - worker pool engine + ordering collector
mod probe; // src/probe/ - job/result model + HTTP execution

use clap::Parser; // Parser trait enables the parse() method

use cli::Cli;
use pool::PoolConfig;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main
// function, creating a tokio runtime and running our async code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Fatal error: no artifacts were (fully) produced
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// The main application logic
// Returns:
//   Ok(0) = run completed (individual probe failures are still Ok - they
//           appear inline in the output with their reasons)
//   Err   = fatal error (bad input, unwritable output)
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Build the whole job list up front; a single bad line aborts here,
    // before any probe fires
    let jobs = jobs::load_jobs(&cli.input, &cli.method, &cli.user_agent)?;

    if jobs.is_empty() {
        println!("No targets found in '{}'", cli.input);
        return Ok(0);
    }

    println!(
        "Probing {} target(s) with {} worker(s), method {}",
        jobs.len(),
        cli.worker_count,
        cli.method
    );

    // One shared client for every worker; its connection pooling is its
    // own concern
    let client = probe::build_client(probe::DEFAULT_TIMEOUT, cli.insecure)?;

    let config = PoolConfig {
        workers: cli.worker_count,
        ..PoolConfig::default()
    };

    // The concurrent phase: results arrive in completion order...
    let arrived = pool::run_pool(jobs, client, config).await;
    // ...and leave in original input order
    let results = pool::collect_ordered(arrived);

    let failed = results.iter().filter(|r| !r.outcome.is_success()).count();
    println!(
        "\nDone: {} probed, {} succeeded, {} failed",
        results.len(),
        results.len() - failed,
        failed
    );

    // Only now, with the run complete, do any artifacts get written
    output::write_outputs(&results, &cli)?;

    Ok(0)
}
