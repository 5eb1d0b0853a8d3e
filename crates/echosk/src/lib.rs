//! High-level API for EchoSK.
//!
//! Wires the deterministic key-derivation engine into the append-only
//! sequence ledger: every recorded value movement embeds the fingerprint of
//! a key derived from a caller-held secret, proving the movement was
//! authorized by possession of that secret without ever persisting it.
//!
//! This is the main entry point for applications embedding EchoSK.

pub mod error;
pub mod recorder;

pub use error::{EchoError, EchoResult};
pub use recorder::{MovementRecorder, Recorded, RecorderConfig};

// Re-export key types
pub use echosk_anchor::{AnchorConfig, AnchorReceipt};
pub use echosk_keys::{derive, Derivation, DerivedKey, Secret};
pub use echosk_ledger::{LedgerConfig, LedgerReport, RecoveryMode, SequenceLedger};
pub use echosk_types::{Direction, EntryDraft, KeyFingerprint, LedgerEntry, Network, ProofSet};
