use thiserror::Error;

/// Errors raised while analysing sequences.
///
/// Every failure is raised where it is detected; no partial tables are returned.
#[derive(Error, Debug)]
pub enum SeqPrepError {
    /// Empty sequence, empty collection or any other zero-length input to a ratio or a mean
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The parameter calculator failed for the sequence stored under `key`
    #[error("Parameter computation failed for sequence '{key}': {reason}")]
    ParameterComputation { key: String, reason: String },

    /// A residue outside of the 20-letter alphabet, found when the strict policy is in use
    #[error("Unsupported residue '{residue}' at position {position} of sequence '{key}'")]
    UnsupportedCharacter { key: String, residue: char, position: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, SeqPrepError>;
