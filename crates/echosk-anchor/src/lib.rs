//! Best-effort external timestamp anchoring for EchoSK.
//!
//! Invokes an external timestamping tool (OpenTimestamps' `ots` by default)
//! as a subprocess against a proof-bundle file. Anchoring is strictly
//! best-effort: a missing tool, a non-zero exit, or a timeout degrades to
//! "no receipt" and must never fail or roll back the ledger append that
//! already completed. The subprocess is bounded by a caller-supplied
//! timeout so an append pipeline can never block indefinitely.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use base64::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors produced by the anchor adapter.
///
/// Tool absence, non-zero exits, and timeouts are not errors — they degrade
/// to `Ok(None)`. Only caller-side misuse and local receipt I/O surface.
#[derive(Debug, Error)]
pub enum AnchorError {
    /// The proof bundle to anchor does not exist.
    #[error("proof bundle not found: {0}")]
    BundleMissing(PathBuf),

    /// Reading the tool's artifact or writing the receipt file failed.
    #[error("receipt io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for the anchor adapter.
#[derive(Clone, Debug)]
pub struct AnchorConfig {
    /// External timestamping command to invoke as `<command> stamp <bundle>`.
    pub command: String,
    /// Wall-clock bound on the subprocess; expiry kills it and degrades to
    /// no receipt.
    pub timeout: Duration,
    /// Extension the tool appends to the bundle path for its artifact.
    pub artifact_extension: String,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            command: "ots".to_string(),
            timeout: Duration::from_secs(30),
            artifact_extension: "ots".to_string(),
        }
    }
}

/// Receipt reference for an anchored proof bundle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnchorReceipt {
    /// Sibling file holding the base64-encoded timestamp proof.
    pub receipt_path: PathBuf,
    /// Length of the base64 text.
    pub encoded_len: usize,
}

/// Best-effort anchor adapter. Absence of a receipt is a valid terminal
/// state, not an error.
pub struct AnchorAdapter {
    config: AnchorConfig,
}

impl AnchorAdapter {
    pub fn new(config: AnchorConfig) -> Self {
        Self { config }
    }

    /// Anchor a proof bundle. Returns `Ok(None)` whenever the external tool
    /// is absent, fails, times out, or produces no artifact.
    pub fn stamp(&self, bundle: &Path) -> Result<Option<AnchorReceipt>, AnchorError> {
        if !bundle.exists() {
            return Err(AnchorError::BundleMissing(bundle.to_path_buf()));
        }

        let mut child = match Command::new(&self.config.command)
            .arg("stamp")
            .arg(bundle)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                warn!(command = %self.config.command, error = %e, "anchor tool unavailable; no receipt");
                return Ok(None);
            }
        };

        let Some(status) = self.wait_with_timeout(&mut child) else {
            warn!(
                command = %self.config.command,
                timeout_ms = self.config.timeout.as_millis() as u64,
                "anchor tool timed out; no receipt"
            );
            return Ok(None);
        };
        if !status.success() {
            warn!(command = %self.config.command, %status, "anchor tool failed; no receipt");
            return Ok(None);
        }

        let artifact = artifact_path(bundle, &self.config.artifact_extension);
        if !artifact.exists() {
            debug!(artifact = %artifact.display(), "anchor tool produced no artifact");
            return Ok(None);
        }

        let encoded = BASE64_STANDARD.encode(fs::read(&artifact)?);
        let receipt_path = receipt_path(bundle);
        fs::write(&receipt_path, &encoded)?;
        debug!(receipt = %receipt_path.display(), "anchor receipt written");

        Ok(Some(AnchorReceipt {
            receipt_path,
            encoded_len: encoded.len(),
        }))
    }

    /// Poll the child until it exits or the timeout expires; on expiry the
    /// child is killed and `None` is returned.
    fn wait_with_timeout(&self, child: &mut std::process::Child) -> Option<std::process::ExitStatus> {
        let deadline = Instant::now() + self.config.timeout;
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Some(status),
                Ok(None) => {
                    if Instant::now() >= deadline {
                        let _ = child.kill();
                        let _ = child.wait();
                        return None;
                    }
                    thread::sleep(Duration::from_millis(25));
                }
                Err(e) => {
                    warn!(error = %e, "failed to poll anchor tool; no receipt");
                    let _ = child.kill();
                    let _ = child.wait();
                    return None;
                }
            }
        }
    }
}

/// `entry_00000.json` -> `entry_00000.json.<ext>` (the tool's convention).
fn artifact_path(bundle: &Path, extension: &str) -> PathBuf {
    let mut name = bundle.as_os_str().to_os_string();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// `entry_00000.json` -> `entry_00000.json.receipt`, sibling of the bundle.
fn receipt_path(bundle: &Path) -> PathBuf {
    let mut name = bundle.as_os_str().to_os_string();
    name.push(".receipt");
    PathBuf::from(name)
}
