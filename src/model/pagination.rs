/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Shape of paginated SIP collections:
//!
//! ```json
//! { "items": [...], "_links": { "next": "/api/indicators/?page=2" } }
//! ```
//!
//! The last page carries `"next": null` or no `next` at all.

use crate::error::AppError;
use serde_json::Value;

/// Checks if a response is a page of a collection
#[must_use]
pub fn is_paginated(response: &Value) -> bool {
    response.get("items").is_some()
}

/// Endpoint of the following page, if there is one
///
/// Absent, null and empty links all mean this is the last page.
#[must_use]
pub fn next_link(page: &Value) -> Option<&str> {
    page.get("_links")
        .and_then(|links| links.get("next"))
        .and_then(Value::as_str)
        .filter(|next| !next.is_empty())
}

/// Moves the `items` of a page out of it
///
/// Pages without items, or with `"items": null`, contribute nothing.
pub fn take_items(page: &mut Value) -> Result<Vec<Value>, AppError> {
    match page.get_mut("items").map(Value::take) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(AppError::InvalidResponse(format!(
            "page items must be a sequence, got {other}"
        ))),
    }
}

/// Turns a response without `items` into a sequence
///
/// Arrays are returned unchanged, null becomes an empty sequence and any
/// other value becomes a one-element sequence.
#[must_use]
pub fn into_sequence(response: Value) -> Vec<Value> {
    match response {
        Value::Array(values) => values,
        Value::Null => Vec::new(),
        other => vec![other],
    }
}
