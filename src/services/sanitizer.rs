//! Makes backend bodies parseable by rewriting bare `NaN` literals.
//!
//! The backend serializes missing floating point values as `NaN`, which is not
//! valid JSON. Every standalone `NaN` token becomes `null` before parsing, so
//! downstream code sees a missing value instead of a parse failure.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::ParseError;

/// ASCII word boundaries so `NaNcy` or `xNaN` are left alone.
static NAN_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)NaN(?-u:\b)").expect("NaN token pattern is valid"));

/// Replaces every standalone `NaN` token with `null`
pub fn sanitize(raw: &str) -> Cow<'_, str> {
    NAN_TOKEN.replace_all(raw, "null")
}

/// Sanitizes `raw` and parses the result as JSON
pub fn sanitize_and_parse(raw: &str) -> Result<Value, ParseError> {
    let sanitized = sanitize(raw);
    Ok(serde_json::from_str(&sanitized)?)
}
