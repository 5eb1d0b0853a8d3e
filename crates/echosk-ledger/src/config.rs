/// How startup recovery treats unparseable store lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecoveryMode {
    /// Skip corrupt lines, count them, and keep operating. The count is
    /// exposed so operators can detect silent corruption proactively.
    #[default]
    Lenient,
    /// Fail the open on the first corrupt line.
    Strict,
}

/// Flush/sync strategy for appends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncMode {
    /// `fsync` after every append (safest, highest latency).
    #[default]
    EveryWrite,
    /// Rely on OS page-cache buffering.
    OsDefault,
}

/// Configuration for a [`crate::SequenceLedger`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LedgerConfig {
    pub recovery: RecoveryMode,
    pub sync_mode: SyncMode,
}

impl LedgerConfig {
    /// Strict-recovery configuration: any corrupt line fails the open.
    pub fn strict() -> Self {
        Self {
            recovery: RecoveryMode::Strict,
            ..Self::default()
        }
    }
}
