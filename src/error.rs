use std::fmt;

#[derive(Debug)]
pub enum FormError {
    /// A required field resolved to null during record collection
    MissingRequired { label: String },

    /// A bespoke section builder found its minimum field set unfilled
    IncompleteRecord { message: String },

    /// A staged item could not be parsed back into its section record
    InvalidRecord { container: String, source: serde_json::Error },

    /// A section's explicit business rule blocked document generation
    RuleViolation { section: &'static str, message: String },

    /// Section name not present in the catalog
    UnknownSection { name: String },

    /// Draft storage read/write/clear failed (quota, permissions, I/O)
    Storage { context: String, source: std::io::Error },

    /// The stored draft blob is not parseable; no partial restore applied
    SnapshotCorrupted { source: serde_json::Error },

    /// Serializing a record or snapshot failed
    Serialize { context: String, source: serde_json::Error },

    /// Writing an output document to disk failed
    Emit { filename: String, source: std::io::Error },

    /// Generic notice for the full-document boundary; the underlying
    /// section failure is only visible in the trace log
    DocumentGeneration,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingRequired { label } => {
                write!(f, "Preencha o campo obrigatório: {}", label)
            }
            FormError::IncompleteRecord { message } => {
                write!(f, "{}", message)
            }
            FormError::InvalidRecord { container, source } => {
                write!(f, "Invalid staged record in '{}': {}", container, source)
            }
            FormError::RuleViolation { section, message } => {
                write!(f, "[{}] {}", section, message)
            }
            FormError::UnknownSection { name } => {
                write!(f, "Unknown section: '{}'", name)
            }
            FormError::Storage { context, source } => {
                write!(f, "Draft storage failed ({}): {}", context, source)
            }
            FormError::SnapshotCorrupted { source } => {
                write!(f, "Erro ao ler rascunho: {}", source)
            }
            FormError::Serialize { context, source } => {
                write!(f, "Serialization failed ({}): {}", context, source)
            }
            FormError::Emit { filename, source } => {
                write!(f, "Failed to write '{}': {}", filename, source)
            }
            FormError::DocumentGeneration => {
                write!(f, "Erro ao gerar o documento. Consulte o log de execução.")
            }
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::InvalidRecord { source, .. } => Some(source),
            FormError::SnapshotCorrupted { source } => Some(source),
            FormError::Serialize { source, .. } => Some(source),
            FormError::Storage { source, .. } => Some(source),
            FormError::Emit { source, .. } => Some(source),
            _ => None,
        }
    }
}
