use thiserror::Error;

/// All errors that can occur in TinyCrypt.
#[derive(Debug, Error)]
pub enum TinyCryptError {
    // --- Crypto errors ---
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid key material: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    // --- Store errors ---
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Failures reported by a `RemoteStore` adapter.
///
/// "No such alias" is never one of these: adapters report it as
/// `Lookup::NotFound` so callers can tell absence from failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("store file I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("store file serialization: {0}")]
    Serialization(String),
}

/// Convenience type alias for TinyCrypt results.
pub type Result<T> = std::result::Result<T, TinyCryptError>;
