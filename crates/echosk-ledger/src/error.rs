use std::io;

/// Errors produced by ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Durable-write or scan failure. Fatal to the operation: the caller
    /// must treat the ledger as unavailable, and the sequence counter is
    /// never advanced past a write that did not durably succeed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// A draft failed field validation. Surfaced to the caller, never
    /// silently corrected.
    #[error("validation error: {0}")]
    Validation(String),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// An unparseable store line encountered under strict recovery.
    #[error("corrupt ledger line {line}: {reason}")]
    CorruptLine { line: usize, reason: String },
}

/// Convenience alias used throughout the ledger crate.
pub type Result<T> = std::result::Result<T, LedgerError>;
