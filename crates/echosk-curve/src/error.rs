use thiserror::Error;

/// Errors produced by curve arithmetic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurveError {
    /// Modular inverse of zero is undefined.
    #[error("modular inverse of zero is undefined")]
    ZeroInverse,

    /// A 32-byte field-element encoding was >= the field prime.
    #[error("field element encoding is not canonical (value >= p)")]
    NonCanonicalBytes,

    /// The point at infinity has no affine byte encoding.
    #[error("cannot encode the point at infinity")]
    InfinityEncoding,

    /// Hex input could not be parsed into a field element.
    #[error("invalid hex: {0}")]
    InvalidHex(String),
}
