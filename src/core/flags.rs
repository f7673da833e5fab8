//! Permissive `--key=value` flag parsing.
//!
//! This is an internal developer tool, not a strict public CLI: tokens that
//! do not start with `--` are ignored, unknown keys are accepted, and a
//! duplicate key keeps its last value.

use std::collections::HashMap;

/// Parse `--key=value` and bare `--key` tokens into a map.
///
/// A bare `--key` yields the literal string `"true"`. Never fails.
pub fn parse_flags(args: &[String]) -> HashMap<String, String> {
    let mut out = HashMap::new();

    for arg in args {
        let Some(body) = arg.strip_prefix("--") else {
            continue;
        };

        match body.split_once('=') {
            Some((key, value)) => out.insert(key.to_string(), value.to_string()),
            None => out.insert(body.to_string(), "true".to_string()),
        };
    }

    out
}
