use std::fmt;

// === StorageError ===

/// Errors related to browsing-state persistence.
///
/// Read failures are recovered inside the storage layer (the bad file is
/// moved to a timestamped backup and the collection starts empty); write
/// failures are returned to the caller, which keeps the in-memory state
/// and may retry.
#[derive(Debug)]
pub enum StorageError {
    /// The state file could not be read.
    ReadFailed(String),
    /// The state file could not be written (disk full, permission denied).
    WriteFailed(String),
    /// Failed to serialize or deserialize state.
    Serialization(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadFailed(msg) => write!(f, "Storage read failed: {}", msg),
            StorageError::WriteFailed(msg) => write!(f, "Storage write failed: {}", msg),
            StorageError::Serialization(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === OptimizerError ===

/// Errors related to the optional local optimizer backend.
///
/// Always isolated at the call site; the backend being unreachable must
/// never block or fail a history or bookmark operation.
#[derive(Debug)]
pub enum OptimizerError {
    /// The backend is unreachable or the request failed in transit.
    Network(String),
    /// The backend answered with a non-success status or a non-JSON body.
    InvalidResponse(String),
}

impl fmt::Display for OptimizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimizerError::Network(msg) => write!(f, "Optimizer network error: {}", msg),
            OptimizerError::InvalidResponse(msg) => {
                write!(f, "Optimizer invalid response: {}", msg)
            }
        }
    }
}

impl std::error::Error for OptimizerError {}
