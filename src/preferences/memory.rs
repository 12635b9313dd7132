use super::PreferenceStore;
use crate::error::Result;
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory preference store for tests and embedding.
///
/// Single-threaded, so `RefCell` is enough to keep the trait on `&self`.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    blobs: RefCell<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, blob: &str) -> Result<()> {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
