use thiserror::Error;

/// Result type for text transformation operations
pub type Result<T> = std::result::Result<T, TransformError>;

/// Which part of an encoded string failed to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    Binary,
    Hex,
    Base64,
    Utf8,
}

impl std::fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeStage::Binary => write!(f, "binary decoding"),
            DecodeStage::Hex => write!(f, "hex decoding"),
            DecodeStage::Base64 => write!(f, "base64 decoding"),
            DecodeStage::Utf8 => write!(f, "utf-8 validation"),
        }
    }
}

/// Error types for table construction, selection handling and decoding
#[derive(Error, Debug)]
pub enum TransformError {
    /// A catalog record is missing a required field or has the wrong shape
    #[error("Malformed emoji record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    /// The catalog input is not a list of records
    #[error("Malformed emoji catalog: {0}")]
    MalformedCatalog(String),

    /// Selection range does not describe a non-empty span of the text
    #[error("Invalid selection {start}..{end} for text of {len} characters")]
    InvalidSelection { start: usize, end: usize, len: usize },

    /// Unknown transformation name or index
    #[error("Invalid transformation: {0}")]
    InvalidTransformation(String),

    /// A whitespace separated group could not be decoded
    #[error("Invalid group during {stage}: {group:?}")]
    InvalidGroup { stage: DecodeStage, group: String },

    /// Hex decoding error
    #[error("Hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Base64 decoding error
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded bytes are not UTF-8
    #[error("Decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A config or table file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl TransformError {
    /// Build a `MalformedRecord` error for the record at `index`
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        TransformError::MalformedRecord {
            index,
            reason: reason.into(),
        }
    }
}
