//! JSON I/O handling for CLI
//!
//! - Input: JSON objects, one per line
//! - Output: one JSON envelope per line
//! - UTF-8 only

use std::io::{BufRead, Write};

use serde::Serialize;
use serde_json::Value;

use super::errors::{CliError, CliResult};

#[derive(Serialize)]
struct OkEnvelope<'a, T: Serialize> {
    status: &'static str,
    data: &'a T,
}

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    status: &'static str,
    code: &'a str,
    message: &'a str,
}

/// Read a single JSON request from the first non-empty line
pub fn read_request<R: BufRead>(reader: &mut R) -> CliResult<Value> {
    let mut line = String::new();
    while reader.read_line(&mut line)? > 0 {
        if !line.trim().is_empty() {
            return Ok(serde_json::from_str(&line)?);
        }
        line.clear();
    }
    Err(CliError::Io(std::io::Error::new(
        std::io::ErrorKind::UnexpectedEof,
        "Empty input",
    )))
}

/// Write a success response
pub fn write_response<W: Write, T: Serialize>(out: &mut W, data: &T) -> CliResult<()> {
    let envelope = OkEnvelope { status: "ok", data };
    serde_json::to_writer(&mut *out, &envelope)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Write an error response
pub fn write_error<W: Write>(out: &mut W, code: &str, message: &str) -> CliResult<()> {
    let envelope = ErrorEnvelope {
        status: "error",
        code,
        message,
    };
    serde_json::to_writer(&mut *out, &envelope)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Cursor;

    #[test]
    fn test_read_request_skips_blank_lines() {
        let mut input = Cursor::new("\n  \n{\"searchTerm\":\"lid\"}\n");
        let value = read_request(&mut input).unwrap();
        assert_eq!(value, json!({"searchTerm": "lid"}));
    }

    #[test]
    fn test_read_request_empty_input() {
        let mut input = Cursor::new("");
        assert!(matches!(read_request(&mut input), Err(CliError::Io(_))));
    }

    #[test]
    fn test_envelopes() {
        let mut out = Vec::new();
        write_response(&mut out, &json!({"matched": 0})).unwrap();
        write_error(&mut out, "CLI_NOT_FOUND", "Product not found: x").unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines[0], json!({"status": "ok", "data": {"matched": 0}}));
        assert_eq!(lines[1]["status"], "error");
        assert_eq!(lines[1]["code"], "CLI_NOT_FOUND");
    }
}
