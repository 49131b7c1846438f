//! Persisted token storage.
//!
//! One token value under a fixed location, surviving process restarts,
//! cleared exactly on logout or failed rehydration.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::info;

use crate::error::ClientError;

/// Where the session store keeps its one persisted token.
pub trait TokenStorage: Send + Sync {
    /// Returns the persisted token, or `None` on first launch / after clear.
    fn load(&self) -> Result<Option<String>, ClientError>;
    fn save(&self, token: &str) -> Result<(), ClientError>;
    /// Removes the token; clearing an already-empty store is not an error.
    fn clear(&self) -> Result<(), ClientError>;
}

/// File-backed storage with an atomic write pattern.
///
/// Saves go to a temp file, sync, then rename, so a crash mid-write never
/// leaves a truncated token behind.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> Result<Option<String>, ClientError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        let token = contents.trim();
        if token.is_empty() {
            return Ok(None);
        }
        Ok(Some(token.to_string()))
    }

    fn save(&self, token: &str) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self
            .path
            .with_extension(format!("tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(token.as_bytes())?;
            file.sync_all()?;
        }

        fs::rename(&temp_path, &self.path).inspect_err(|_| {
            let _ = fs::remove_file(&temp_path);
        })?;

        info!(path = %self.path.display(), "Persisted session token");
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory storage for tests and ephemeral sessions.
///
/// Clones share the same underlying slot, so a test can hand one handle to
/// the session store and keep another to observe it.
#[derive(Debug, Default, Clone)]
pub struct MemoryTokenStorage {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.into()))),
        }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Result<Option<String>, ClientError> {
        Ok(self.token.lock().unwrap().clone())
    }

    fn save(&self, token: &str) -> Result<(), ClientError> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_storage() -> FileTokenStorage {
        let path = std::env::temp_dir()
            .join("opsdesk-client-tests")
            .join(format!("token-{}", uuid::Uuid::new_v4()));
        FileTokenStorage::new(path)
    }

    #[test]
    fn test_file_storage_load_missing_is_none() {
        let storage = temp_storage();
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let storage = temp_storage();

        storage.save("header.payload.signature").unwrap();
        assert_eq!(
            storage.load().unwrap().as_deref(),
            Some("header.payload.signature")
        );

        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_file_storage_clear_is_idempotent() {
        let storage = temp_storage();
        storage.clear().unwrap();
        storage.clear().unwrap();
    }

    #[test]
    fn test_file_storage_overwrite_keeps_latest() {
        let storage = temp_storage();
        storage.save("first").unwrap();
        storage.save("second").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_memory_storage_clones_share_state() {
        let storage = MemoryTokenStorage::new();
        let observer = storage.clone();

        storage.save("tok").unwrap();
        assert_eq!(observer.load().unwrap().as_deref(), Some("tok"));

        observer.clear().unwrap();
        assert!(storage.load().unwrap().is_none());
    }
}
