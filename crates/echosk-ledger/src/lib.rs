//! Append-only sequence ledger for EchoSK.
//!
//! One JSON object per line in `ledger.jsonl`, plus a pretty-printed proof
//! bundle per entry under `proofs/`. Startup recovers the last sequence
//! number by a full linear scan; unparseable lines are skipped and counted
//! (or, in strict mode, fail the open). Appends are durable single writes —
//! the in-memory sequence counter only advances after the line has reached
//! the store.
//!
//! The ledger assumes a single writer. Concurrent appends from multiple
//! processes or threads require an external advisory lock or a
//! single-writer actor in the embedding application.

pub mod config;
pub mod error;
pub mod store;
pub mod verify;

pub use config::{LedgerConfig, RecoveryMode, SyncMode};
pub use error::{LedgerError, Result};
pub use store::{compute_digest, RecoverySummary, SequenceLedger};
pub use verify::{LedgerReport, Violation, ViolationKind};
