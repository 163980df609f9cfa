//! JSON persistence for session selections.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use esg_engine::selection::Selections;

use crate::error::{LoadError, LoadResult};

/// Stores [`Selections`] in a JSON file between CLI invocations.
///
/// Loading never fails: a missing file starts an empty session and a
/// corrupt one is discarded with a warning.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store backed by the given file.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the saved selections, or empty selections if there are none.
    #[must_use]
    pub fn load(&self) -> Selections {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No saved session");
                return Selections::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Session unreadable, starting empty");
                return Selections::new();
            }
        };

        Selections::from_json(&json).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "Session corrupt, starting empty");
            Selections::new()
        })
    }

    /// Saves selections, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, selections: &Selections) -> LoadResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| LoadError::io(parent, e))?;
        }
        let json = selections
            .to_json()
            .map_err(|e| LoadError::parse(&self.path, e))?;
        fs::write(&self.path, json).map_err(|e| LoadError::io(&self.path, e))?;
        debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    /// Deletes the saved session, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> LoadResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LoadError::io(&self.path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esg_engine::selection::SelectionKind;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested").join("session.json"));

        let mut selections = Selections::new();
        selections.set_mut(SelectionKind::Company).add("INE001");
        selections.active = SelectionKind::Company;
        store.save(&selections).unwrap();

        assert_eq!(store.load(), selections);
    }

    #[test]
    fn test_missing_and_corrupt_load_empty() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        assert!(store.load().is_empty());

        fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_clear() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        store.clear().unwrap();

        store.save(&Selections::new()).unwrap();
        assert!(store.path().exists());
        store.clear().unwrap();
        assert!(!store.path().exists());
    }
}
