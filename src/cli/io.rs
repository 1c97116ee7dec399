//! JSON I/O handling for the CLI
//!
//! - Input: one JSON record from a file, or from stdin for `-`
//! - Output: report text, or a single JSON envelope, on stdout
//! - UTF-8 only

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde_json::Value;

use super::errors::{CliError, CliResult};

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read one JSON record from a path, or from stdin for `-`.
pub fn read_json(path: &Path) -> CliResult<Value> {
    let content = if is_stdin(path) {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)
            .map_err(|e| CliError::io_error(format!("Failed to read {}: {}", path.display(), e)))?
    };

    parse_json(&content)
}

pub fn parse_json(content: &str) -> CliResult<Value> {
    if content.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }
    Ok(serde_json::from_str(content)?)
}

pub fn response_envelope(data: Value) -> Value {
    serde_json::json!({
        "status": "ok",
        "data": data
    })
}

pub fn error_envelope(code: &str, message: &str) -> Value {
    serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    })
}

/// Write a success envelope to stdout.
pub fn write_response(data: Value) -> CliResult<()> {
    write_value(&response_envelope(data))
}

/// Write an error envelope to stdout.
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    write_value(&error_envelope(code, message))
}

/// Write pretty-printed JSON to stdout.
pub fn write_pretty(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Write plain text to stdout.
pub fn write_text(text: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", text)?;
    stdout.flush()?;
    Ok(())
}

fn write_value(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_empty_input() {
        let err = parse_json("  \n").unwrap_err();
        assert_eq!(err.message(), "Empty input");
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{\"AOI_MONITORS_PASS\": true}}").unwrap();
        let value = read_json(file.path()).unwrap();
        assert_eq!(value["AOI_MONITORS_PASS"], true);
    }

    #[test]
    fn test_missing_file() {
        let err = read_json(Path::new("/nonexistent/case.json")).unwrap_err();
        assert_eq!(err.code_str(), "BUMP_CLI_IO_ERROR");
    }

    #[test]
    fn test_envelopes() {
        let ok = response_envelope(json!({"verdict": "HOLD"}));
        assert_eq!(ok["status"], "ok");
        assert_eq!(ok["data"]["verdict"], "HOLD");

        let err = error_envelope("BUMP_CLI_INVALID_CASE", "bad");
        assert_eq!(err["status"], "error");
        assert_eq!(err["code"], "BUMP_CLI_INVALID_CASE");
    }
}
