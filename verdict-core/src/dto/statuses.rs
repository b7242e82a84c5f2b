//! Homework-status payload validation
//!
//! Expected shape:
//!
//! ```json
//! { "homeworks": [ { "homework_name": "...", "status": "..." } ], "current_date": 1700000000 }
//! ```

use serde_json::Value as JsonValue;

use crate::error::{CoreError, Result};

pub const HOMEWORKS_KEY: &str = "homeworks";
pub const CURRENT_DATE_KEY: &str = "current_date";

/// Validates an API payload and returns its `homeworks` list
///
/// Checks run in a fixed order: both required keys must be present, then
/// `homeworks` must be a list. Only after that is an empty list accepted
/// (as an empty result, not an error). The newest submission comes first.
pub fn check_response(response: &JsonValue) -> Result<Vec<JsonValue>> {
    let object = response
        .as_object()
        .ok_or_else(|| CoreError::malformed("response is not a JSON object"))?;

    let homeworks = object
        .get(HOMEWORKS_KEY)
        .ok_or_else(|| CoreError::malformed(format!("missing key `{HOMEWORKS_KEY}`")))?;

    if !object.contains_key(CURRENT_DATE_KEY) {
        return Err(CoreError::malformed(format!(
            "missing key `{CURRENT_DATE_KEY}`"
        )));
    }

    let homeworks = homeworks
        .as_array()
        .ok_or_else(|| CoreError::malformed(format!("`{HOMEWORKS_KEY}` is not a list")))?;

    Ok(homeworks.clone())
}

/// Server-echoed cursor, when `current_date` holds an integer
pub fn current_date(response: &JsonValue) -> Option<i64> {
    response.get(CURRENT_DATE_KEY).and_then(JsonValue::as_i64)
}
