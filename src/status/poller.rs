use std::path::PathBuf;
use std::time::Duration;

use tokio::process::Command;
use tokio::sync::watch;
use tracing;

use super::parser::parse_status;
use super::snapshot::BackupSnapshot;

const TMUTIL_PATH: &str = "/usr/bin/tmutil";
const POLL_PERIOD: Duration = Duration::from_secs(5);

/// Drives the poll cycle: ask `tmutil status`, parse the dump against the
/// previously published snapshot, publish the fresh one, sleep, repeat.
///
/// Observers hold watch receivers and only ever see the latest value; a
/// second receiver carries the transient "checking" flag for the activity
/// indicator. Ticks are sequential, so a slow status query simply delays the
/// next one. Nothing here is fatal: a tool that fails to launch or prints
/// garbage publishes the idle snapshot, and the next tick is the retry.
pub struct StatusPoller {
    snapshot_tx: watch::Sender<BackupSnapshot>,
    checking_tx: watch::Sender<bool>,
    command: PathBuf,
    period: Duration,
}

impl StatusPoller {
    pub fn new() -> Self {
        let (snapshot_tx, _) = watch::channel(BackupSnapshot::default());
        let (checking_tx, _) = watch::channel(false);
        Self {
            snapshot_tx,
            checking_tx,
            command: PathBuf::from(TMUTIL_PATH),
            period: POLL_PERIOD,
        }
    }

    pub fn with_command(mut self, command: impl Into<PathBuf>) -> Self {
        self.command = command.into();
        self
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<BackupSnapshot> {
        self.snapshot_tx.subscribe()
    }

    pub fn subscribe_checking(&self) -> watch::Receiver<bool> {
        self.checking_tx.subscribe()
    }

    /// Polls once immediately, then on every period boundary for the life
    /// of the process.
    pub async fn run(self) {
        self.poll_once().await;
        loop {
            tokio::time::sleep(self.period).await;
            self.poll_once().await;
        }
    }

    pub(crate) async fn poll_once(&self) {
        self.checking_tx.send_replace(true);

        let previous = self.snapshot_tx.borrow().clone();
        let snapshot = match self.query_status().await {
            Some(raw) => parse_status(&raw, &previous),
            None => BackupSnapshot::default(),
        };

        if snapshot.is_running {
            tracing::info!(
                percentage = snapshot.percentage,
                files_copied = snapshot.files_copied,
                destination = %snapshot.destination_id,
                "backup in progress"
            );
        }

        self.snapshot_tx.send_replace(snapshot);
        self.checking_tx.send_replace(false);
    }

    /// Runs the status command and buffers its full stdout. `output()` reads
    /// the pipe until the child closes it, so incremental writers are fine.
    async fn query_status(&self) -> Option<String> {
        match Command::new(&self.command).arg("status").output().await {
            Ok(output) => Some(String::from_utf8_lossy(&output.stdout).into_owned()),
            Err(e) => {
                tracing::warn!("failed to run {} status: {}", self.command.display(), e);
                None
            }
        }
    }
}

impl Default for StatusPoller {
    fn default() -> Self {
        Self::new()
    }
}
