use thiserror::Error;

/// Errors that can occur when converting an external editor payload into a
/// `JourneyGraph`.
#[derive(Error, Debug, Clone)]
pub enum ImportError {
    #[error("Failed to parse canvas JSON: {0}")]
    JsonParseError(String),

    #[error("Node '{node_id}' has an unknown kind token: '{token}'")]
    UnknownKind { node_id: String, token: String },

    #[error("Node id '{0}' appears more than once in the payload")]
    DuplicateNodeId(String),

    #[error("Node '{node_id}' carries branches but is not a condition node")]
    UnexpectedBranches { node_id: String },
}

/// Errors that can occur while saving or loading a canvas archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Archive error: {0}")]
    Generic(String),
}

/// Errors that can occur while reading or writing the journey vault.
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Could not access vault file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Vault document is not valid JSON: {0}")]
    Malformed(String),

    #[error("Vault document has no '{0}' entry")]
    MissingKey(&'static str),
}
