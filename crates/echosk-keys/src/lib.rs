//! Deterministic key derivation for EchoSK.
//!
//! Given a caller-held secret, a namespace string, and an index, this crate
//! produces a secp256k1 private scalar plus its public encodings — Ethereum
//! address and Bitcoin WIF — with no I/O, clock, or randomness anywhere in
//! the pipeline. Identical inputs always yield bit-identical outputs; that
//! determinism is what lets ledger entries embedding a key fingerprint be
//! re-verified independently.
//!
//! Pipeline: scrypt strengthening (memory-hard, resists brute force of weak
//! human-chosen secrets) → HKDF-SHA256 namespaced expansion → scalar mod
//! `n` (zero coerced to one) → public point, Keccak256 Ethereum address,
//! Base58Check WIF.

pub mod address;
pub mod derive;
pub mod error;
pub mod secret;
pub mod wif;

pub use derive::{derive, Derivation, DerivedKey, DERIVATION_SALT};
pub use error::KeyError;
pub use secret::Secret;
pub use wif::{DecodedWif, Wif};
