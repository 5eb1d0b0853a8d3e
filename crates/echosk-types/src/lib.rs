//! Foundation types for EchoSK.
//!
//! This crate provides the data model shared by every other EchoSK crate:
//! value-movement directions, ledger entry payloads, embedded proof records,
//! and derived-key fingerprints. Every other EchoSK crate depends on
//! `echosk-types`.
//!
//! # Key Types
//!
//! - [`Direction`] — inflow/outflow classification of a value movement
//! - [`EntryDraft`] — caller-supplied fields for a ledger append
//! - [`LedgerEntry`] — a sealed, digest-carrying ledger record
//! - [`ProofSet`] — the proof records embedded in every entry
//! - [`KeyFingerprint`] — non-secret provenance of a derived key
//! - [`Network`] — Bitcoin network flag for WIF encoding

pub mod entry;
pub mod error;
pub mod fingerprint;
pub mod movement;
pub mod network;

pub use entry::{EntryDraft, LedgerEntry, ProofSet};
pub use error::TypeError;
pub use fingerprint::KeyFingerprint;
pub use movement::Direction;
pub use network::Network;
