//! Fire-and-forget profile sync.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use interest_core::traits::IProfileSync;
use interest_observability::sync_span;
use tracing::{debug, warn};

/// One full-list replacement waiting to be sent.
struct SyncJob {
    user_id: String,
    tags: Vec<String>,
}

/// Sends the full adopted list to the profile-sync collaborator. Failures are
/// logged and counted.
///
/// In background mode one long-lived worker thread drains a channel, so
/// replacements reach the remote in dispatch order. Jobs queued behind a slow
/// call collapse to the newest list for the same user. Dropping the
/// dispatcher closes the channel and waits for queued jobs to finish.
pub struct SyncDispatcher {
    sync: Arc<dyn IProfileSync>,
    sender: Option<Sender<SyncJob>>,
    handle: Option<JoinHandle<()>>,
    failures: Arc<AtomicU64>,
}

impl SyncDispatcher {
    pub fn new(sync: Arc<dyn IProfileSync>, background: bool) -> Self {
        let failures = Arc::new(AtomicU64::new(0));
        let mut dispatcher = Self {
            sync,
            sender: None,
            handle: None,
            failures,
        };
        if background {
            dispatcher.start_worker();
        }
        dispatcher
    }

    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    pub fn dispatch(&self, user_id: &str, tags: Vec<String>) {
        let job = SyncJob {
            user_id: user_id.to_string(),
            tags,
        };
        let job = match &self.sender {
            Some(sender) => match sender.send(job) {
                Ok(()) => return,
                Err(mpsc::SendError(job)) => {
                    warn!(user = %user_id, "profile sync worker gone, sending inline");
                    job
                }
            },
            None => job,
        };
        send(self.sync.as_ref(), &job, &self.failures);
    }

    fn start_worker(&mut self) {
        let (sender, receiver) = mpsc::channel::<SyncJob>();
        let sync = Arc::clone(&self.sync);
        let failures = Arc::clone(&self.failures);
        let spawned = thread::Builder::new()
            .name("interest-profile-sync".to_string())
            .spawn(move || worker_loop(sync.as_ref(), receiver, &failures));
        match spawned {
            Ok(handle) => {
                self.sender = Some(sender);
                self.handle = Some(handle);
            }
            Err(e) => warn!(error = %e, "could not start profile sync worker, syncing inline"),
        }
    }
}

impl Drop for SyncDispatcher {
    fn drop(&mut self) {
        drop(self.sender.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("profile sync worker panicked");
            }
        }
    }
}

fn worker_loop(sync: &dyn IProfileSync, receiver: Receiver<SyncJob>, failures: &AtomicU64) {
    while let Ok(mut job) = receiver.recv() {
        while let Ok(next) = receiver.try_recv() {
            if next.user_id != job.user_id {
                send(sync, &job, failures);
            }
            job = next;
        }
        send(sync, &job, failures);
    }
    debug!("profile sync worker stopped");
}

fn send(sync: &dyn IProfileSync, job: &SyncJob, failures: &AtomicU64) {
    let _span = sync_span!(job.user_id, job.tags.len()).entered();
    match sync.replace_interests(&job.user_id, &job.tags) {
        Ok(()) => debug!(user = %job.user_id, tags = job.tags.len(), "profile interests replaced"),
        Err(e) => {
            failures.fetch_add(1, Ordering::Relaxed);
            warn!(user = %job.user_id, error = %e, "profile sync failed");
        }
    }
}
