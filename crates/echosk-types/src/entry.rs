use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fingerprint::KeyFingerprint;
use crate::movement::Direction;

/// Caller-supplied fields for a ledger append.
///
/// The ledger fills in `seq`, the timestamp, and the digest. Amounts are
/// decimal-preserving strings end to end; no floating-point type ever
/// touches a movement amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub bank: String,
    pub direction: Direction,
    pub account: String,
    pub asset: String,
    pub amount: String,
    pub narrative: String,
}

/// Proof records embedded in every ledger entry.
///
/// The proof-of-work reconstruction and puzzle attestation records are
/// produced by external collaborators and carried opaquely; only the
/// skeleton-key fingerprint has structure the core understands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofSet {
    pub proof_of_work: Value,
    pub puzzle_attestation: Value,
    pub skeleton_key: KeyFingerprint,
}

/// A sealed, append-only ledger record.
///
/// Created exactly once by the sequence ledger's append operation; there is
/// no update or delete. The digest is computed over the canonical
/// serialization of every field except the digest itself, so any reader can
/// re-verify it from the entry alone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub seq: u64,
    pub bank: String,
    /// ISO-8601 UTC timestamp, second precision, `Z`-suffixed.
    pub timestamp: String,
    pub direction: Direction,
    pub account: String,
    pub asset: String,
    pub amount: String,
    pub narrative: String,
    pub proofs: ProofSet,
    /// `"sha256:"` + 64 lowercase hex characters.
    pub digest: String,
}
