//! Token Persistence
//!
//! Where the access token lives between runs. Only the token is
//! persisted; identity is re-fetched on restore.

use std::cell::RefCell;
use thiserror::Error;

use crate::error::ApiError;

/// Errors from reading or writing the persisted token
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid session file: {0}")]
    Format(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Storage(err.to_string())
    }
}

/// Persists a single access token
pub trait SessionStore {
    fn load_token(&self) -> Result<Option<String>, StoreError>;

    fn save_token(&self, token: &str) -> Result<(), StoreError>;

    /// Remove everything the store holds
    fn clear(&self) -> Result<(), StoreError>;
}

/// In-memory store; nothing survives the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemoryStore {
    fn load_token(&self) -> Result<Option<String>, StoreError> {
        Ok(self.token.borrow().clone())
    }

    fn save_token(&self, token: &str) -> Result<(), StoreError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.token.borrow_mut().take();
        Ok(())
    }
}

#[cfg(feature = "native")]
pub use file::FileStore;

#[cfg(feature = "native")]
mod file {
    use serde::{Deserialize, Serialize};
    use std::path::{Path, PathBuf};

    use super::{SessionStore, StoreError};

    #[derive(Debug, Serialize, Deserialize)]
    struct SessionFile {
        token: String,
    }

    /// Token kept in a small TOML file
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl SessionStore for FileStore {
        fn load_token(&self) -> Result<Option<String>, StoreError> {
            if !self.path.exists() {
                return Ok(None);
            }

            let content = std::fs::read_to_string(&self.path)?;
            let file: SessionFile =
                toml::from_str(&content).map_err(|e| StoreError::Format(e.to_string()))?;

            Ok(Some(file.token).filter(|t| !t.is_empty()))
        }

        fn save_token(&self, token: &str) -> Result<(), StoreError> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let content = toml::to_string(&SessionFile {
                token: token.to_string(),
            })
            .map_err(|e| StoreError::Format(e.to_string()))?;

            std::fs::write(&self.path, content)?;
            tracing::debug!("Session saved to {:?}", self.path);
            Ok(())
        }

        fn clear(&self) -> Result<(), StoreError> {
            match std::fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        }
    }

}
