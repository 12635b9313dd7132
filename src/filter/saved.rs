//! Flat key-value form of a [`FilterSpec`], used for saved searches.
//!
//! Loading merges into an existing spec: keys missing from the blob (or set to
//! `null`) leave the prior value alone and unknown keys are ignored. A value of
//! the wrong shape fails the whole load so the caller can keep its spec intact.

use super::spec::FilterSpec;
use crate::error::{ListingError, Result};
use serde_json::{Map, Value};

/// Top-level key → JSON value view of a spec.
pub type FlatSpec = Map<String, Value>;

pub fn serialize(spec: &FilterSpec) -> Result<FlatSpec> {
    match serde_json::to_value(spec)? {
        Value::Object(map) => Ok(map),
        _ => Err(ListingError::Preferences(
            "filter spec did not serialize to an object".to_string(),
        )),
    }
}

/// Overlay `blob` onto `prior`, returning the merged spec.
pub fn deserialize(blob: &FlatSpec, prior: &FilterSpec) -> Result<FilterSpec> {
    let mut merged = serialize(prior)?;
    for (key, value) in blob {
        if value.is_null() {
            continue;
        }
        if let Some(slot) = merged.get_mut(key) {
            *slot = value.clone();
        }
    }
    Ok(serde_json::from_value(Value::Object(merged))?)
}

/// Parse a JSON object blob and merge it onto `prior`.
pub fn from_json(text: &str, prior: &FilterSpec) -> Result<FilterSpec> {
    let blob: FlatSpec = serde_json::from_str(text)?;
    deserialize(&blob, prior)
}
