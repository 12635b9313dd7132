//! # Saved searches
//!
//! A [`PreferenceStore`] is an opaque key → text blob store. Saved searches
//! are stored as the flat JSON object produced by
//! [`crate::filter::saved::serialize`] plus a `savedAt` timestamp.
//!
//! Loading never partially applies: a corrupt blob is reported as an error
//! and the caller keeps the filters it already had.

mod fs;
mod memory;

pub use fs::FsPreferences;
pub use memory::MemoryPreferences;

use crate::error::Result;
use crate::filter::saved::{self, FlatSpec};
use crate::filter::FilterSpec;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{info, warn};

/// Default key for the saved search.
pub const SAVED_SEARCH_KEY: &str = "kiwi_saved_search";

const SAVED_AT_KEY: &str = "savedAt";

/// Raw key-value storage for preference blobs.
pub trait PreferenceStore {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn load(&self, key: &str) -> Result<Option<String>>;

    fn save(&self, key: &str, blob: &str) -> Result<()>;
}

/// A stored search as read back from a [`PreferenceStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct SavedSearch {
    pub fields: FlatSpec,
    pub saved_at: Option<DateTime<Utc>>,
}

impl SavedSearch {
    pub fn parse(blob: &str) -> Result<Self> {
        let fields: FlatSpec = serde_json::from_str(blob)?;
        let saved_at = fields
            .get(SAVED_AT_KEY)
            .and_then(Value::as_str)
            .and_then(|text| DateTime::parse_from_rfc3339(text).ok())
            .map(|at| at.with_timezone(&Utc));
        Ok(Self { fields, saved_at })
    }

    /// Merge the stored fields onto `prior`.
    pub fn apply_to(&self, prior: &FilterSpec) -> Result<FilterSpec> {
        saved::deserialize(&self.fields, prior)
    }
}

pub fn save_search<S: PreferenceStore + ?Sized>(
    store: &S,
    key: &str,
    spec: &FilterSpec,
) -> Result<()> {
    let mut fields = saved::serialize(spec)?;
    fields.insert(
        SAVED_AT_KEY.to_string(),
        Value::String(Utc::now().to_rfc3339()),
    );
    store.save(key, &serde_json::to_string(&fields)?)?;
    info!(key, "Saved search");
    Ok(())
}

pub fn read_saved<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Result<Option<SavedSearch>> {
    match store.load(key)? {
        Some(blob) => SavedSearch::parse(&blob).map(Some),
        None => Ok(None),
    }
}

/// Load the search stored under `key` merged onto `prior`.
///
/// `Ok(None)` means nothing was saved. On error `prior` is untouched and the
/// caller decides how to tell the user.
pub fn load_search<S: PreferenceStore + ?Sized>(
    store: &S,
    key: &str,
    prior: &FilterSpec,
) -> Result<Option<FilterSpec>> {
    let Some(saved) = read_saved(store, key)? else {
        return Ok(None);
    };
    match saved.apply_to(prior) {
        Ok(spec) => Ok(Some(spec)),
        Err(e) => {
            warn!(key, error = %e, "Saved search is corrupt");
            Err(e)
        }
    }
}
