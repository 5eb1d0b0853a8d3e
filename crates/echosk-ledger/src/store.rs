use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use echosk_types::{EntryDraft, KeyFingerprint, LedgerEntry, ProofSet};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{LedgerConfig, RecoveryMode, SyncMode};
use crate::error::{LedgerError, Result};

const LEDGER_FILE: &str = "ledger.jsonl";
const PROOFS_DIR: &str = "proofs";

/// What startup recovery found in an existing store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecoverySummary {
    /// Highest sequence number among valid lines; `None` for an empty or
    /// absent store.
    pub last_seq: Option<u64>,
    /// Number of lines that parsed as entries.
    pub valid_entries: u64,
    /// Number of lines skipped as unparseable (lenient recovery only).
    pub skipped_lines: u64,
}

/// Crash-recoverable append-only sequence ledger.
///
/// Entries are compact JSON, one per line. Each append also writes a
/// pretty-printed proof bundle at `proofs/entry_{seq:05}.json`. There is no
/// update or delete operation; the type exposes none.
#[derive(Debug)]
pub struct SequenceLedger {
    ledger_path: PathBuf,
    proofs_dir: PathBuf,
    file: File,
    last_seq: Option<u64>,
    valid_entries: u64,
    skipped_lines: u64,
    config: LedgerConfig,
}

impl SequenceLedger {
    /// Open (or create) a ledger rooted at `dir`.
    ///
    /// Scans every existing line to recover the last sequence number.
    /// Recovery is O(n) in entry count by design; a checkpoint/index layer
    /// is explicitly out of scope.
    pub fn open(dir: &Path, config: LedgerConfig) -> Result<Self> {
        fs::create_dir_all(dir)?;
        let proofs_dir = dir.join(PROOFS_DIR);
        fs::create_dir_all(&proofs_dir)?;
        let ledger_path = dir.join(LEDGER_FILE);

        let mut last_seq = None;
        let mut valid_entries = 0u64;
        let mut skipped_lines = 0u64;

        if ledger_path.exists() {
            let reader = BufReader::new(File::open(&ledger_path)?);
            for (index, line) in reader.lines().enumerate() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                match serde_json::from_str::<LedgerEntry>(&line) {
                    Ok(entry) => {
                        last_seq = Some(last_seq.map_or(entry.seq, |s: u64| s.max(entry.seq)));
                        valid_entries += 1;
                    }
                    Err(e) if config.recovery == RecoveryMode::Strict => {
                        return Err(LedgerError::CorruptLine {
                            line: index + 1,
                            reason: e.to_string(),
                        });
                    }
                    Err(e) => {
                        warn!(line = index + 1, error = %e, "skipping unparseable ledger line");
                        skipped_lines += 1;
                    }
                }
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&ledger_path)?;

        debug!(
            ?last_seq,
            valid_entries, skipped_lines, "ledger recovery complete"
        );

        Ok(Self {
            ledger_path,
            proofs_dir,
            file,
            last_seq,
            valid_entries,
            skipped_lines,
            config,
        })
    }

    /// Append a movement entry. Allocates the next sequence number, stamps
    /// the current UTC time at second precision, computes the canonical
    /// digest, writes the proof bundle and the store line, and only then
    /// advances the in-memory sequence counter.
    pub fn append(
        &mut self,
        draft: EntryDraft,
        proof_of_work: Value,
        puzzle_attestation: Value,
        skeleton_key: KeyFingerprint,
    ) -> Result<LedgerEntry> {
        validate_draft(&draft)?;

        let seq = self.next_seq();
        let mut entry = LedgerEntry {
            seq,
            bank: draft.bank,
            timestamp: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            direction: draft.direction,
            account: draft.account,
            asset: draft.asset,
            amount: draft.amount,
            narrative: draft.narrative,
            proofs: ProofSet {
                proof_of_work,
                puzzle_attestation,
                skeleton_key,
            },
            digest: String::new(),
        };
        entry.digest = compute_digest(&entry)?;

        // Proof bundle first: an orphan bundle from a failed line write is
        // harmless, the reverse is not.
        let bundle = serde_json::to_string_pretty(&entry)
            .map_err(|e| LedgerError::Serialization(e.to_string()))?;
        fs::write(self.proof_bundle_path(seq), bundle)?;

        // One buffer, one write: a failure leaves no partial line behind
        // the OS write boundary, and `last_seq` stays untouched.
        let mut line =
            serde_json::to_string(&entry).map_err(|e| LedgerError::Serialization(e.to_string()))?;
        line.push('\n');
        self.file.write_all(line.as_bytes())?;
        self.file.flush()?;
        if self.config.sync_mode == SyncMode::EveryWrite {
            self.file.sync_all()?;
        }

        self.last_seq = Some(seq);
        self.valid_entries += 1;
        debug!(seq, digest = %entry.digest, "ledger append");
        Ok(entry)
    }

    /// Linear read-back of all valid entries, in file order.
    pub fn entries(&self) -> Result<Vec<LedgerEntry>> {
        if !self.ledger_path.exists() {
            return Ok(Vec::new());
        }
        let reader = BufReader::new(File::open(&self.ledger_path)?);
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if let Ok(entry) = serde_json::from_str::<LedgerEntry>(&line) {
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    /// Sequence number the next append will use.
    pub fn next_seq(&self) -> u64 {
        self.last_seq.map_or(0, |s| s + 1)
    }

    /// Highest sequence number appended so far, `None` for an empty store.
    pub fn last_seq(&self) -> Option<u64> {
        self.last_seq
    }

    /// Lines skipped as unparseable during startup recovery.
    pub fn skipped_lines(&self) -> u64 {
        self.skipped_lines
    }

    /// Count of valid entries (recovered plus appended this session).
    pub fn len(&self) -> u64 {
        self.valid_entries
    }

    pub fn is_empty(&self) -> bool {
        self.valid_entries == 0
    }

    /// Summary of what startup recovery found plus this session's appends.
    pub fn recovery_summary(&self) -> RecoverySummary {
        RecoverySummary {
            last_seq: self.last_seq,
            valid_entries: self.valid_entries,
            skipped_lines: self.skipped_lines,
        }
    }

    /// Path of the pretty-printed proof bundle for a sequence number.
    pub fn proof_bundle_path(&self, seq: u64) -> PathBuf {
        self.proofs_dir.join(format!("entry_{seq:05}.json"))
    }

    /// Path of the JSON-Lines store file.
    pub fn path(&self) -> &Path {
        &self.ledger_path
    }
}

/// Recompute an entry's digest from its own fields, excluding the digest
/// field itself. Reproducible by any independent reader.
pub fn compute_digest(entry: &LedgerEntry) -> Result<String> {
    let mut value =
        serde_json::to_value(entry).map_err(|e| LedgerError::Serialization(e.to_string()))?;
    if let Some(obj) = value.as_object_mut() {
        obj.remove("digest");
    }
    Ok(echosk_canonical::digest(&value))
}

fn validate_draft(draft: &EntryDraft) -> Result<()> {
    for (field, value) in [
        ("bank", &draft.bank),
        ("account", &draft.account),
        ("asset", &draft.asset),
        ("amount", &draft.amount),
    ] {
        if value.trim().is_empty() {
            return Err(LedgerError::Validation(format!(
                "required field {field:?} is empty"
            )));
        }
    }
    Ok(())
}
