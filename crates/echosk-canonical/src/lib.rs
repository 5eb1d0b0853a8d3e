//! Canonical JSON serialization and digesting for EchoSK.
//!
//! Two semantically equal structures — same keys and values, any insertion
//! order — must produce byte-identical output, because the canonical bytes
//! are the sole input to ledger entry digests. The writer recursively sorts
//! object keys lexicographically, emits minimal separators (`,` and `:`
//! with no whitespace), and uses serde_json's number formatting as the
//! fixed numeric policy.

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest as _, Sha256};
use thiserror::Error;

/// Errors produced while canonicalizing a value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Canonical byte serialization of a JSON value.
pub fn canonical_bytes(value: &Value) -> Vec<u8> {
    let mut out = Vec::new();
    write_value(value, &mut out);
    out
}

/// Canonical byte serialization of any serializable value, via
/// [`serde_json::Value`].
pub fn canonical_bytes_of<T: Serialize>(value: &T) -> Result<Vec<u8>, CanonicalError> {
    let value =
        serde_json::to_value(value).map_err(|e| CanonicalError::Serialization(e.to_string()))?;
    Ok(canonical_bytes(&value))
}

/// `"sha256:" + 64 lowercase hex chars` over the canonical bytes of `value`.
pub fn digest(value: &Value) -> String {
    let hash = Sha256::digest(canonical_bytes(value));
    format!("sha256:{}", hex::encode(hash))
}

/// Digest of any serializable value.
pub fn digest_of<T: Serialize>(value: &T) -> Result<String, CanonicalError> {
    let bytes = canonical_bytes_of(value)?;
    let hash = Sha256::digest(bytes);
    Ok(format!("sha256:{}", hex::encode(hash)))
}

fn write_value(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Bool(true) => out.extend_from_slice(b"true"),
        Value::Bool(false) => out.extend_from_slice(b"false"),
        Value::Number(n) => out.extend_from_slice(n.to_string().as_bytes()),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_value(item, out);
            }
            out.push(b']');
        }
        Value::Object(map) => {
            // Sort keys regardless of the backing map's iteration order.
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            out.push(b'{');
            for (i, (key, val)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_string(key, out);
                out.push(b':');
                write_value(val, out);
            }
            out.push(b'}');
        }
    }
}

fn write_string(s: &str, out: &mut Vec<u8>) {
    // serde_json performs standard JSON escaping; escaping a plain string
    // is infallible.
    let escaped = serde_json::to_string(s).unwrap_or_else(|_| String::from("\"\""));
    out.extend_from_slice(escaped.as_bytes());
}
