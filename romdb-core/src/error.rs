/// Errors that can occur while loading a ROM database.
#[derive(Debug, thiserror::Error)]
pub enum RomDbError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Duplicate section [{hash}] at line {line}")]
    DuplicateKey { hash: String, line: usize },

    #[error("Section [{hash}] has no GoodName")]
    MissingName { hash: String },

    #[error("Settings error: {0}")]
    Settings(String),
}

impl RomDbError {
    pub fn duplicate_key(hash: impl Into<String>, line: usize) -> Self {
        Self::DuplicateKey {
            hash: hash.into(),
            line,
        }
    }

    pub fn missing_name(hash: impl Into<String>) -> Self {
        Self::MissingName { hash: hash.into() }
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}
