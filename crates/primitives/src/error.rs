use thiserror::Error;

/// Errors raised while parsing primitive values from console tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveError {
    #[error("Invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid hexadecimal string")]
    InvalidHex,

    #[error("Invalid Base58 string: {0}")]
    InvalidBase58(String),

    #[error("Invalid address checksum")]
    InvalidChecksum,

    #[error("Invalid address version: expected {expected:#04x}, got {actual:#04x}")]
    VersionMismatch { expected: u8, actual: u8 },
}

/// Result type for primitive parsing.
pub type PrimitiveResult<T> = Result<T, PrimitiveError>;
