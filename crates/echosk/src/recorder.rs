use std::path::Path;

use serde_json::Value;
use tracing::warn;

use echosk_anchor::{AnchorAdapter, AnchorConfig, AnchorReceipt};
use echosk_keys::{derive, DerivedKey, Secret};
use echosk_ledger::{LedgerConfig, SequenceLedger};
use echosk_types::{EntryDraft, LedgerEntry, Network};

use crate::error::EchoResult;

/// Configuration for a [`MovementRecorder`].
#[derive(Clone, Debug)]
pub struct RecorderConfig {
    /// Network flag for derived WIF encodings.
    pub network: Network,
    /// Whether WIF encodings carry the compression marker.
    pub compressed: bool,
    /// External anchoring; `None` disables it entirely.
    pub anchor: Option<AnchorConfig>,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            network: Network::Mainnet,
            compressed: true,
            anchor: None,
        }
    }
}

/// Outcome of a recorded movement.
#[derive(Debug)]
pub struct Recorded {
    /// The sealed ledger entry, digest included.
    pub entry: LedgerEntry,
    /// The derived key whose fingerprint the entry embeds. Not persisted
    /// anywhere; drops (and zeroes) with this value.
    pub key: DerivedKey,
    /// Anchor receipt, when the external tool produced one.
    pub receipt: Option<AnchorReceipt>,
}

/// Wires key derivation, the ledger append, and best-effort anchoring
/// into a single operation.
///
/// Single-writer like the underlying ledger: hold exactly one recorder per
/// store directory.
pub struct MovementRecorder {
    ledger: SequenceLedger,
    anchor: Option<AnchorAdapter>,
    network: Network,
    compressed: bool,
}

impl MovementRecorder {
    /// Open (or create) the ledger at `dir` and wrap it in a recorder.
    pub fn open(dir: &Path, ledger: LedgerConfig, config: RecorderConfig) -> EchoResult<Self> {
        Ok(Self {
            ledger: SequenceLedger::open(dir, ledger)?,
            anchor: config.anchor.map(AnchorAdapter::new),
            network: config.network,
            compressed: config.compressed,
        })
    }

    /// Record one value movement authorized by `secret`.
    ///
    /// Derives the `(namespace, index)` key, appends the entry with its
    /// fingerprint embedded, then anchors the proof bundle. Anchoring
    /// failure never unwinds the append — the entry is durable by the time
    /// anchoring starts.
    pub fn record(
        &mut self,
        secret: &Secret,
        draft: EntryDraft,
        proof_of_work: Value,
        puzzle_attestation: Value,
        namespace: &str,
        index: u32,
    ) -> EchoResult<Recorded> {
        let derivation = derive(secret, namespace, index, self.network, self.compressed)?;
        let entry = self.ledger.append(
            draft,
            proof_of_work,
            puzzle_attestation,
            derivation.fingerprint,
        )?;

        let receipt = match &self.anchor {
            None => None,
            Some(adapter) => match adapter.stamp(&self.ledger.proof_bundle_path(entry.seq)) {
                Ok(receipt) => receipt,
                Err(e) => {
                    warn!(seq = entry.seq, error = %e, "anchoring failed; entry remains appended");
                    None
                }
            },
        };

        Ok(Recorded {
            entry,
            key: derivation.key,
            receipt,
        })
    }

    /// The underlying ledger, for verification and read-back.
    pub fn ledger(&self) -> &SequenceLedger {
        &self.ledger
    }
}
