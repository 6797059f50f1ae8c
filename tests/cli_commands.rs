//! CLI Command Tests
//!
//! Runs commands end to end through `run_with`:
//! - Catalog files and config files on disk
//! - Query-string, stdin and flag inputs
//! - Error envelopes for bad input

use std::io::{Cursor, Write};

use clap::Parser;
use serde_json::{json, Value};
use tempfile::NamedTempFile;

use visto_catalog::cli::{run_with, Cli, CliError};

// =============================================================================
// Helper Functions
// =============================================================================

fn priced_catalog() -> NamedTempFile {
    let products = json!([
        {"id": "mug", "name": "Ceramic Coffee Mugs", "category": "dining", "price": 280,
         "rating": 4.5, "reviews": 76, "size": "Small", "tags": ["coffee"], "isPopular": true},
        {"id": "board", "name": "Wooden Cutting Board", "category": "kitchen", "price": 450,
         "rating": 4.7, "reviews": 203, "size": "Large"},
        {"id": "tray", "name": "Marble Serving Tray", "category": "dining", "price": 850,
         "rating": 4.9, "reviews": 43, "size": "Medium", "isPremium": true},
        {"id": "mats", "name": "Silicone Baking Mats", "category": "kitchen", "price": 240,
         "rating": 4.4, "reviews": 67, "size": "2 Pieces", "isBestSeller": true},
        {"id": "bowl", "name": "Acacia Wood Salad Bowl", "category": "dining",
         "rating": 4.6, "reviews": 89, "size": "Large"}
    ]);
    write_temp(&products.to_string())
}

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn run(args: &[&str], stdin: &str) -> (Result<(), CliError>, Vec<Value>) {
    let mut argv = vec!["visto-catalog"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();

    let mut input = Cursor::new(stdin.to_string());
    let mut out = Vec::new();
    let result = run_with(cli, &mut input, &mut out);

    let lines = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    (result, lines)
}

fn ids(response: &Value) -> Vec<String> {
    response["data"]["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Query Command
// =============================================================================

/// Price-low puts the unpriced bowl last.
#[test]
fn test_price_low_over_file_catalog() {
    let catalog = priced_catalog();
    let path = catalog.path().to_str().unwrap();

    let (result, lines) = run(&["query", "--catalog", path, "--sort", "price-low"], "");

    assert!(result.is_ok());
    assert_eq!(ids(&lines[0]), vec!["mats", "mug", "board", "tray", "bowl"]);
}

/// Price range from the page query string, inclusive bounds.
#[test]
fn test_price_range_from_params() {
    let catalog = priced_catalog();
    let path = catalog.path().to_str().unwrap();

    let args = ["query", "--catalog", path, "--params", "price=200-400&sort=price-high"];
    let (_, lines) = run(&args, "");
    assert_eq!(ids(&lines[0]), vec!["mug", "mats"]);

    let (_, lines) = run(&["query", "--catalog", path, "--params", "price=above-600"], "");
    assert_eq!(ids(&lines[0]), vec!["tray"]);
    assert_eq!(lines[0]["data"]["total"], 5);
    assert_eq!(lines[0]["data"]["matched"], 1);
}

/// Stdin JSON combines with flags; flags win.
#[test]
fn test_stdin_query_with_flag_override() {
    let catalog = priced_catalog();
    let path = catalog.path().to_str().unwrap();

    let (_, lines) = run(
        &["query", "--catalog", path, "--stdin", "--sort", "rating"],
        r#"{"category": "dining", "sortKey": "name"}"#,
    );

    assert_eq!(lines[0]["data"]["query"]["sortKey"], "rating");
    assert_eq!(ids(&lines[0]), vec!["tray", "bowl", "mug"]);
}

/// Malformed stdin produces an error envelope.
#[test]
fn test_stdin_not_json() {
    let (result, lines) = run(&["query", "--stdin"], "search=bread");

    assert!(matches!(result, Err(CliError::Json(_))));
    assert_eq!(lines[0]["status"], "error");
    assert_eq!(lines[0]["code"], "CLI_INVALID_JSON");
}

// =============================================================================
// Config
// =============================================================================

/// Config supplies the catalog path and the fallback sort.
#[test]
fn test_config_defaults_apply() {
    let catalog = priced_catalog();
    let config = write_temp(
        &json!({
            "catalog_path": catalog.path(),
            "default_sort": "popularity"
        })
        .to_string(),
    );

    let (result, lines) = run(&["query", "--config", config.path().to_str().unwrap()], "");

    assert!(result.is_ok());
    assert_eq!(lines[0]["data"]["query"]["sortKey"], "popularity");
    assert_eq!(ids(&lines[0])[..2], ["mats", "mug"]);
}

/// A bad config fails before any catalog is loaded.
#[test]
fn test_invalid_config() {
    let config = write_temp(r#"{"log_level": "chatty"}"#);
    let (result, lines) = run(&["facets", "--config", config.path().to_str().unwrap()], "");

    assert!(matches!(result, Err(CliError::Config(_))));
    assert_eq!(lines[0]["code"], "CLI_CONFIG_ERROR");
}

// =============================================================================
// Other Commands
// =============================================================================

#[test]
fn test_product_lookup() {
    let (result, lines) = run(&["product", "ff-long-900"], "");

    assert!(result.is_ok());
    assert_eq!(lines[0]["data"]["name"], "Feel Fresh Long Container");
    assert_eq!(lines[0]["data"]["isSpecialty"], true);
}

#[test]
fn test_facets_builtin() {
    let (_, lines) = run(&["facets"], "");
    let data = &lines[0]["data"];

    assert_eq!(data["total"], 13);
    assert_eq!(
        data["categories"][0],
        json!({"id": "containers", "name": "Food Containers", "count": 11})
    );
    assert_eq!(data["priceRanges"][3]["id"], "above-600");
    assert_eq!(data["priceRanges"][3]["max"], Value::Null);
    assert_eq!(data["sizes"][0], "1000ml");
}

#[test]
fn test_list_popular() {
    let (_, lines) = run(&["list", "popular"], "");

    assert_eq!(lines[0]["data"]["listing"], "popular");
    assert_eq!(lines[0]["data"]["matched"], 5);
}

#[test]
fn test_duplicate_ids_rejected() {
    let catalog = write_temp(r#"[{"id": "a", "name": "A"}, {"id": "a", "name": "B"}]"#);
    let (result, lines) = run(&["facets", "--catalog", catalog.path().to_str().unwrap()], "");

    assert!(matches!(result, Err(CliError::Catalog(_))));
    assert_eq!(lines[0]["code"], "CATALOG_DUPLICATE_ID");
}

#[test]
fn test_session_answers_each_line() {
    let input = [
        r#"{"searchTerm": "square", "sortKey": "size"}"#,
        r#"{"priceRangeId": "above-600"}"#,
    ]
    .join("\n");
    let (result, lines) = run(&["session"], &input);

    assert!(result.is_ok());
    assert_eq!(lines.len(), 2);
    assert_eq!(
        ids(&lines[0]),
        vec!["ff-square-small-400", "ff-square-medium-600", "ff-square-big-1000"]
    );
    assert_eq!(lines[1]["data"]["matched"], 0);
}

/// Mistyped fields read as unset instead of failing the line.
#[test]
fn test_session_mistyped_fields() {
    let input = [
        r#"{"searchTerm": "bread", "sortKey": 7}"#,
        r#"{"category": ["containers"], "searchTerm": "square"}"#,
    ]
    .join("\n");
    let (result, lines) = run(&["session"], &input);

    assert!(result.is_ok());
    assert_eq!(ids(&lines[0]), vec!["ff-long-900"]);
    assert_eq!(lines[0]["data"]["query"]["sortKey"], "name");
    assert_eq!(lines[1]["data"]["query"]["category"], Value::Null);
    assert_eq!(lines[1]["data"]["matched"], 3);
}
