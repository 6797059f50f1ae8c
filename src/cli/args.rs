//! CLI argument definitions using clap
//!
//! Commands:
//! - visto-catalog query [--search T] [--category C] [--price P] [--sort K]
//! - visto-catalog explain (same flags as query)
//! - visto-catalog product <ID>
//! - visto-catalog list <popular|premium|category|subcategory|search>
//! - visto-catalog facets
//! - visto-catalog session

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::observability::LogFormat;
use crate::planner::QueryRequest;

/// Visto Homeware catalog query engine
#[derive(Parser, Debug)]
#[command(name = "visto-catalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Product JSON file to query instead of the built-in catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (text or json)
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter and sort the catalog
    Query(QueryArgs),

    /// Show the plan for a query without running it
    Explain(QueryArgs),

    /// Look up a single product by id
    Product {
        /// Product id
        id: String,
    },

    /// Run one of the fixed listings
    List {
        #[command(subcommand)]
        listing: Listing,
    },

    /// Print categories, sizes and price ranges
    Facets,

    /// Answer one JSON query per stdin line until EOF
    Session,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Listing {
    /// Popular or best-selling products
    Popular,
    /// Premium products
    Premium,
    /// Products in one category
    Category { id: String },
    /// Products in one subcategory
    Subcategory { id: String },
    /// Text search in catalog order
    Search { term: String },
}

/// Query parameters accepted on the command line
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Free-text search term
    #[arg(long)]
    pub search: Option<String>,

    /// Category id, or "all"
    #[arg(long)]
    pub category: Option<String>,

    /// Price range id (under-200, 200-400, 400-600, above-600), or "all"
    #[arg(long)]
    pub price: Option<String>,

    /// Sort key (name, price-low, price-high, rating, popularity, newest, size)
    #[arg(long)]
    pub sort: Option<String>,

    /// Raw page query string, e.g. "search=bread&category=containers"
    #[arg(long)]
    pub params: Option<String>,

    /// Read a JSON query object from stdin
    #[arg(long)]
    pub stdin: bool,
}

impl QueryArgs {
    /// Flag values as a request. Only flags that were given are set.
    pub fn flag_request(&self) -> QueryRequest {
        QueryRequest {
            search_term: self.search.clone(),
            category: self.category.clone(),
            price_range_id: self.price.clone(),
            sort_key: self.sort.clone(),
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
