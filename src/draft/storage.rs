use std::io;
use std::path::PathBuf;

use crate::error::FormError;

/// Persistence port for the single draft blob. The browser original used
/// one localStorage key; any key-value store with whole-blob replacement
/// satisfies the contract.
pub trait DraftStorage {
    fn load(&self) -> Result<Option<String>, FormError>;
    fn save(&mut self, blob: &str) -> Result<(), FormError>;
    fn clear(&mut self) -> Result<(), FormError>;
}

/// File-backed storage: the blob lives in one file.
pub struct FileDraftStorage {
    path: PathBuf,
}

impl FileDraftStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DraftStorage for FileDraftStorage {
    fn load(&self) -> Result<Option<String>, FormError> {
        match std::fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(FormError::Storage {
                context: format!("reading {}", self.path.display()),
                source,
            }),
        }
    }

    fn save(&mut self, blob: &str) -> Result<(), FormError> {
        std::fs::write(&self.path, blob).map_err(|source| FormError::Storage {
            context: format!("writing {}", self.path.display()),
            source,
        })
    }

    fn clear(&mut self) -> Result<(), FormError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(FormError::Storage {
                context: format!("removing {}", self.path.display()),
                source,
            }),
        }
    }
}

/// In-memory storage for tests; can simulate a full store.
#[derive(Default)]
pub struct MemoryDraftStorage {
    pub blob: Option<String>,
    pub fail_writes: bool,
}

impl MemoryDraftStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            blob: None,
            fail_writes: true,
        }
    }
}

impl DraftStorage for MemoryDraftStorage {
    fn load(&self) -> Result<Option<String>, FormError> {
        Ok(self.blob.clone())
    }

    fn save(&mut self, blob: &str) -> Result<(), FormError> {
        if self.fail_writes {
            return Err(FormError::Storage {
                context: "in-memory store".to_string(),
                source: io::Error::new(io::ErrorKind::StorageFull, "storage quota exceeded"),
            });
        }
        self.blob = Some(blob.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), FormError> {
        self.blob = None;
        Ok(())
    }
}
