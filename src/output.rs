//! Result rendering for triggered builds
//!
//! stdout carries only the machine-consumable result; human context is
//! printed to stderr by the caller.

use crate::circle::BuildResponse;
use crate::cli::OutputFormat;
use crate::error::Result;

/// Format a trigger response for stdout
pub fn format_response(response: &BuildResponse, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(response.build_url.clone()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
    }
}
