use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::KeyError;

/// A caller-held secret byte sequence.
///
/// Exists only in process memory: never persisted, never serialized, never
/// logged, and zeroed on drop. Construction requires explicit raw bytes —
/// there is deliberately no `From<&str>` or similar coercion, so a
/// mistyped value is rejected at the API boundary instead of silently
/// re-encoded.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Secret(Vec<u8>);

impl Secret {
    /// Wrap raw secret bytes. Empty secrets are rejected.
    pub fn new(bytes: Vec<u8>) -> Result<Self, KeyError> {
        if bytes.is_empty() {
            return Err(KeyError::InvalidSecret("empty byte sequence"));
        }
        Ok(Self(bytes))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Length only. The bytes must never reach a log or error message.
        write!(f, "Secret({} bytes)", self.0.len())
    }
}
