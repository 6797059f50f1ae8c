//! CLI module
//!
//! Provides the command-line interface:
//! - query: filter and sort the catalog
//! - explain: show a query plan
//! - product: point lookup
//! - list: fixed listings (popular, premium, category, subcategory, search)
//! - facets: categories, sizes and price ranges
//! - session: one query per stdin line

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, Listing, QueryArgs};
pub use commands::{
    explain, facets, list, load_catalog, product, query, resolve_config, run, run_command,
    run_with, session,
};
pub use config::Config;
pub use errors::{CliError, CliResult};
pub use io::{read_request, write_error, write_response};
