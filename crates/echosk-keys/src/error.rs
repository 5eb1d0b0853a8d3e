use echosk_curve::CurveError;
use thiserror::Error;

/// Errors produced by key derivation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    /// The secret failed the boundary check (e.g. empty byte sequence).
    /// Derivation only ever accepts explicit raw bytes.
    #[error("invalid secret: {0}")]
    InvalidSecret(&'static str),

    /// scrypt strengthening failed.
    #[error("key stretching failed: {0}")]
    Stretch(String),

    /// HKDF expansion failed.
    #[error("key expansion failed: {0}")]
    Expand(String),

    /// Curve arithmetic failed.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// A WIF string failed structural or checksum validation.
    #[error("invalid WIF: {0}")]
    InvalidWif(String),
}
