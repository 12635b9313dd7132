use super::PreferenceStore;
use crate::error::{ListingError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed preference store: one `<key>.json` file per key.
///
/// Writes go to a temporary file first and are renamed into place, so a
/// crash mid-write never leaves a truncated blob behind.
#[derive(Debug, Clone)]
pub struct FsPreferences {
    root: PathBuf,
}

impl FsPreferences {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ListingError::Preferences(format!(
                "invalid preference key '{key}'"
            )));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl PreferenceStore for FsPreferences {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        debug!(path = %path.display(), "Reading preference");
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn save(&self, key: &str, blob: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)?;

        let tmp = self
            .root
            .join(format!(".{key}-{}.tmp", std::process::id()));
        fs::write(&tmp, blob)?;
        fs::rename(&tmp, &path)?;
        debug!(path = %path.display(), "Wrote preference");
        Ok(())
    }
}
