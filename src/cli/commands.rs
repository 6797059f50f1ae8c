//! CLI command implementations
//!
//! Every command follows the same sequence:
//! 1. Resolve configuration (file, then flag overrides)
//! 2. Initialise logging
//! 3. Load the catalog once
//! 4. Run the command and write one JSON envelope per answer

use std::io::{self, BufRead, Write};
use std::path::Path;

use serde::Serialize;

use crate::catalog::{Catalog, Facets, Product};
use crate::executor::{QueryExecutor, QueryResult};
use crate::observability::{init_logger, ObservationScope};
use crate::planner::{CatalogQuery, ExplainPlan, QueryPlanner, QueryRequest, SortKey};

use super::args::{Cli, Command, Listing, QueryArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_error, write_response};

#[derive(Serialize)]
struct QueryResponse<'a> {
    query: &'a CatalogQuery,
    #[serde(flatten)]
    result: QueryResult<'a>,
}

#[derive(Serialize)]
struct ExplainResponse<'a> {
    query: &'a CatalogQuery,
    plan: ExplainPlan,
}

#[derive(Serialize)]
struct ListResponse<'a> {
    listing: String,
    matched: usize,
    products: Vec<&'a Product>,
}

#[derive(Serialize)]
struct FacetsResponse<'a> {
    total: usize,
    #[serde(flatten)]
    facets: &'a Facets,
}

/// Main CLI entry point
///
/// Parses arguments and runs the command against stdin/stdout.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(cli, &mut stdin.lock(), &mut stdout.lock())
}

/// Runs parsed arguments against the given input and output.
///
/// On failure an error envelope is written to `out` before the error is
/// returned.
pub fn run_with<R: BufRead, W: Write>(cli: Cli, input: &mut R, out: &mut W) -> CliResult<()> {
    let result = execute(cli, input, out);
    if let Err(e) = &result {
        let _ = write_error(out, e.code(), &e.to_string());
    }
    result
}

fn execute<R: BufRead, W: Write>(cli: Cli, input: &mut R, out: &mut W) -> CliResult<()> {
    let config = resolve_config(&cli)?;
    init_logger(&config.log_level, config.log_format);

    let catalog = load_catalog(config.catalog_path.as_deref())?;
    run_command(cli.command, &catalog, &config, input, out)
}

/// Merges the config file (if any) with command line overrides
pub fn resolve_config(cli: &Cli) -> CliResult<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(path) = &cli.catalog {
        config.catalog_path = Some(path.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    config.validate()?;
    Ok(config)
}

/// Loads the catalog from a file, or the built-in one
pub fn load_catalog(path: Option<&Path>) -> CliResult<Catalog> {
    let scope = ObservationScope::new("CATALOG_LOAD");

    let loaded = match path {
        Some(path) => Catalog::load(path),
        None => Catalog::builtin(),
    };

    match loaded {
        Ok(catalog) => {
            scope.complete_with(&[("products", catalog.len().to_string())]);
            Ok(catalog)
        }
        Err(e) => {
            scope.fail(&e.to_string());
            Err(e.into())
        }
    }
}

/// Run the appropriate command
pub fn run_command<R: BufRead, W: Write>(
    cmd: Command,
    catalog: &Catalog,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> CliResult<()> {
    match cmd {
        Command::Query(args) => query(&args, catalog, config.default_sort, input, out),
        Command::Explain(args) => explain(&args, config.default_sort, input, out),
        Command::Product { id } => product(&id, catalog, out),
        Command::List { listing } => list(&listing, catalog, out),
        Command::Facets => facets(catalog, out),
        Command::Session => session(catalog, config.default_sort, input, out),
    }
}

/// Builds a query from, in increasing precedence: the raw query string,
/// a JSON object on stdin, then individual flags.
fn build_query<R: BufRead>(
    args: &QueryArgs,
    default_sort: SortKey,
    input: &mut R,
) -> CliResult<CatalogQuery> {
    let mut request = args
        .params
        .as_deref()
        .map(QueryRequest::from_query_string)
        .unwrap_or_default();

    if args.stdin {
        request = request.merge(QueryRequest::from_json(read_request(input)?)?);
    }

    Ok(request.merge(args.flag_request()).into_query(default_sort))
}

fn answer<W: Write>(catalog: &Catalog, query: &CatalogQuery, out: &mut W) -> CliResult<()> {
    let scope = ObservationScope::new("QUERY");
    let result = QueryExecutor::new(catalog).execute(query);
    scope.complete_with(&[
        ("matched", result.matched.to_string()),
        ("sort", query.sort_key.to_string()),
    ]);

    write_response(out, &QueryResponse { query, result })
}

/// Execute a single query
pub fn query<R: BufRead, W: Write>(
    args: &QueryArgs,
    catalog: &Catalog,
    default_sort: SortKey,
    input: &mut R,
    out: &mut W,
) -> CliResult<()> {
    let query = build_query(args, default_sort, input)?;
    answer(catalog, &query, out)
}

/// Describe a query plan without executing it
pub fn explain<R: BufRead, W: Write>(
    args: &QueryArgs,
    default_sort: SortKey,
    input: &mut R,
    out: &mut W,
) -> CliResult<()> {
    let query = build_query(args, default_sort, input)?;
    let plan = ExplainPlan::from_plan(&QueryPlanner::plan(&query));
    write_response(out, &ExplainResponse { query: &query, plan })
}

/// Point lookup by id
pub fn product<W: Write>(id: &str, catalog: &Catalog, out: &mut W) -> CliResult<()> {
    let found = QueryExecutor::new(catalog)
        .find(id)
        .ok_or_else(|| CliError::NotFound(id.to_string()))?;
    write_response(out, found)
}

/// Run a fixed listing
pub fn list<W: Write>(listing: &Listing, catalog: &Catalog, out: &mut W) -> CliResult<()> {
    let executor = QueryExecutor::new(catalog);

    let (name, products) = match listing {
        Listing::Popular => ("popular".to_string(), executor.popular()),
        Listing::Premium => ("premium".to_string(), executor.premium()),
        Listing::Category { id } => (format!("category:{}", id), executor.by_category(id)),
        Listing::Subcategory { id } => (format!("subcategory:{}", id), executor.by_subcategory(id)),
        Listing::Search { term } => (format!("search:{}", term), executor.search(term)),
    };

    write_response(
        out,
        &ListResponse {
            listing: name,
            matched: products.len(),
            products,
        },
    )
}

/// Print derived facets
pub fn facets<W: Write>(catalog: &Catalog, out: &mut W) -> CliResult<()> {
    write_response(
        out,
        &FacetsResponse {
            total: catalog.len(),
            facets: catalog.facets(),
        },
    )
}

/// Answer one JSON query per input line until EOF.
///
/// A malformed line gets an error envelope and the session continues.
/// Blank lines are skipped.
pub fn session<R: BufRead, W: Write>(
    catalog: &Catalog,
    default_sort: SortKey,
    input: &mut R,
    out: &mut W,
) -> CliResult<()> {
    let scope = ObservationScope::new("SESSION");
    let mut answered = 0usize;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<QueryRequest>(&line) {
            Ok(request) => {
                let query = request.into_query(default_sort);
                answer(catalog, &query, out)?;
                answered += 1;
            }
            Err(e) => {
                tracing::warn!(error = %e, "rejected session line");
                write_error(out, "CLI_INVALID_JSON", &e.to_string())?;
            }
        }
    }

    scope.complete_with(&[("answered", answered.to_string())]);
    Ok(())
}
