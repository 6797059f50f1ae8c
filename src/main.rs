//! visto-catalog CLI entry point
//!
//! This is a minimal entrypoint that:
//! 1. Delegates parsing and dispatch to `cli::run`
//! 2. Prints errors to stderr
//! 3. Exits with non-zero on failure
//!
//! The JSON error envelope on stdout is written by `cli::run` itself.

use visto_catalog::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}: {}", e.code(), e);
        std::process::exit(1);
    }
}
