use crate::error::{DecodeError, EncodeError};
use crate::models::FieldRecord;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors surfaced by the command line tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Strict decoding hit a malformed value.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Building a payload failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A command line argument could not be parsed.
    #[error("invalid {name}: {reason}")]
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Read payloads from a file, one per line, skipping blank lines.
pub fn read_payloads<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ToolError> {
    let text = fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Render records as an aligned two-column table.
pub fn render_table(records: &[FieldRecord]) -> String {
    let width = records
        .iter()
        .map(|r| r.display_name.len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "{:<width$}  {}\n",
            format!("{}:", record.display_name),
            record.value,
            width = width + 1
        ));
    }
    out
}

/// Render records as a JSON array.
pub fn render_json(records: &[FieldRecord]) -> Result<String, ToolError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Parse a 12-digit hex address as printed (most significant byte first)
/// into controller byte order. `:` separators are accepted.
pub fn parse_address(text: &str) -> Result<[u8; 6], ToolError> {
    let digits: String = text.chars().filter(|&c| c != ':').collect();
    let bytes = hex::decode(&digits).map_err(|e| ToolError::InvalidArgument {
        name: "address",
        reason: e.to_string(),
    })?;
    let mut address: [u8; 6] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| ToolError::InvalidArgument {
            name: "address",
            reason: format!("expected 6 bytes, got {}", bytes.len()),
        })?;
    address.reverse();
    Ok(address)
}

/// Parse a hex number with optional `0x` prefix.
pub fn parse_hex_u32(name: &'static str, text: &str) -> Result<u32, ToolError> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u32::from_str_radix(digits, 16).map_err(|e| ToolError::InvalidArgument {
        name,
        reason: e.to_string(),
    })
}
