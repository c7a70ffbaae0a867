//! Build parameter parsing
//!
//! Each `--params` argument is a `key=value` pair. Keys must be valid build
//! variable names; values are arbitrary non-empty strings and may themselves
//! contain `=` (only the first one is a delimiter).

use std::sync::OnceLock;

use regex::Regex;

use super::types::BuildParameters;
use crate::error::{OvertureError, Result};

/// Pattern a build parameter key must match
fn key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*$").expect("key pattern is a valid regex")
    })
}

/// Parse a list of raw `key=value` arguments into build parameters.
///
/// Key and value are trimmed of surrounding whitespace before validation and
/// storage. A duplicated key keeps the last value seen. An empty argument
/// list yields an empty map.
pub fn parse_params(args: &[String]) -> Result<BuildParameters> {
    let mut params = BuildParameters::new();

    for arg in args {
        let (key, value) = arg
            .split_once('=')
            .map(|(key, value)| (key.trim(), value.trim()))
            .ok_or_else(|| OvertureError::InvalidParameter(arg.clone()))?;

        if key.is_empty() || value.is_empty() || !key_pattern().is_match(key) {
            return Err(OvertureError::InvalidParameter(arg.clone()));
        }

        params.insert(key.to_string(), value.to_string());
    }

    Ok(params)
}
