use thiserror::Error;

/// Errors surfaced by the high-level recorder.
#[derive(Debug, Error)]
pub enum EchoError {
    #[error(transparent)]
    Key(#[from] echosk_keys::KeyError),

    #[error(transparent)]
    Ledger(#[from] echosk_ledger::LedgerError),
}

/// Convenience alias for recorder operations.
pub type EchoResult<T> = Result<T, EchoError>;
