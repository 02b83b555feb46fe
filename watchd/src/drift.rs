//! File fingerprint drift detection
//!
//! Records a baseline digest for each watched file at startup, then
//! re-verifies the files on an interval and reports any drift. The
//! baseline is never refreshed: once a file drifts, every later round
//! reports it again until the daemon is restarted.

use std::io;
use std::path::PathBuf;

use pself::{FingerprintStore, VerificationResult};
use tokio::time::{sleep, Duration};

/// Periodic re-verification of watched files against a startup baseline
pub struct DriftWatcher<F>
where
    F: Fn(String) + Send + Sync + 'static,
{
    store: FingerprintStore,
    paths: Vec<PathBuf>,
    scan_interval: Duration,
    on_violation: F,
}

impl<F> DriftWatcher<F>
where
    F: Fn(String) + Send + Sync + 'static,
{
    /// Read every watched file and record its baseline digest
    pub async fn baseline(
        paths: Vec<PathBuf>,
        scan_interval: Duration,
        on_violation: F,
    ) -> io::Result<Self> {
        let mut blobs = Vec::with_capacity(paths.len());
        for path in &paths {
            let content = tokio::fs::read(path).await?;
            blobs.push((path.to_string_lossy().into_owned(), content));
        }

        let mut store = FingerprintStore::new();
        store.load_initial_fingerprints(
            blobs.iter().map(|(name, content)| (name.as_str(), content.as_slice())),
        );

        Ok(Self {
            store,
            paths,
            scan_interval,
            on_violation,
        })
    }

    /// Re-verify all watched files forever
    pub async fn run(&self) {
        loop {
            sleep(self.scan_interval).await;

            for path in &self.paths {
                let name = path.to_string_lossy();
                let content = match tokio::fs::read(path).await {
                    Ok(content) => content,
                    Err(err) => {
                        (self.on_violation)(format!("cannot read {}: {}", name, err));
                        continue;
                    }
                };

                match self.store.verify(&name, &content) {
                    VerificationResult::Ok => {}
                    VerificationResult::Mismatch => {
                        (self.on_violation)(format!("integrity drift in {}", name));
                    }
                    VerificationResult::UnknownName => {
                        (self.on_violation)(format!("no baseline for {}", name));
                    }
                }
            }
        }
    }

    /// Number of files in the baseline
    pub fn watched(&self) -> usize {
        self.store.len()
    }
}
