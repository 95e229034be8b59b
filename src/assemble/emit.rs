use std::path::PathBuf;

use crate::error::FormError;

/// Where finished documents go. The browser original triggered a download
/// per emission; here the sink is a directory, or memory under test.
pub trait DocumentSink {
    fn emit(&mut self, filename: &str, content: &str) -> Result<(), FormError>;
}

pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DocumentSink for DirectorySink {
    fn emit(&mut self, filename: &str, content: &str) -> Result<(), FormError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| FormError::Emit {
            filename: filename.to_string(),
            source,
        })?;

        let path = self.dir.join(filename);
        std::fs::write(&path, content).map_err(|source| FormError::Emit {
            filename: filename.to_string(),
            source,
        })
    }
}

/// In-memory sink for tests.
#[derive(Default)]
pub struct MemorySink {
    pub files: Vec<(String, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentSink for MemorySink {
    fn emit(&mut self, filename: &str, content: &str) -> Result<(), FormError> {
        self.files.push((filename.to_string(), content.to_string()));
        Ok(())
    }
}

/// Pretty-print a document the way the original serializer did.
pub fn pretty<T: serde::Serialize>(payload: &T, context: &str) -> Result<String, FormError> {
    serde_json::to_string_pretty(payload).map_err(|source| FormError::Serialize {
        context: context.to_string(),
        source,
    })
}
