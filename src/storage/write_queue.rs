// ABOUTME: Serialized FIFO write queue owning all writes to the JSON data file
// ABOUTME: Single consumer task fed by an unbounded channel, one oneshot responder per write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Write Queue
//!
//! Every save goes through one background task that owns the data file path.
//! Requests are taken off an unbounded FIFO channel in arrival order and
//! written one at a time, so two saves can never interleave on disk. Each
//! request carries a `oneshot` sender through which its own outcome is
//! reported; a failed write does not stop the queue.
//!
//! The read path does not go through the queue.

use crate::errors::{AppError, AppResult};
use bodylog_core::models::StoreDocument;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info};

/// A queued write and the channel its outcome is reported on
struct WriteRequest {
    payload: Vec<u8>,
    responder: oneshot::Sender<AppResult<()>>,
}

/// Whether the consumer is currently writing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueState {
    /// No write in flight
    Idle,
    /// A write is in flight
    Writing,
}

/// Point-in-time view of the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueueStatus {
    /// Consumer state
    pub state: QueueState,
    /// Writes waiting behind the one in flight
    pub pending: usize,
    /// Writes completed successfully since start
    pub completed: u64,
    /// Writes that failed since start
    pub failed: u64,
}

#[derive(Debug, Default)]
struct QueueCounters {
    writing: AtomicBool,
    pending: AtomicUsize,
    completed: AtomicU64,
    failed: AtomicU64,
}

/// Handle to an accepted write
///
/// The write's position in the queue is fixed when it is submitted; awaiting
/// the handle only waits for the outcome.
#[must_use = "a pending write reports its outcome only when awaited"]
pub struct PendingWrite {
    receiver: oneshot::Receiver<AppResult<()>>,
}

impl PendingWrite {
    /// Wait for the write to finish
    ///
    /// # Errors
    ///
    /// Returns the write's own I/O error, or `InternalError` when the queue
    /// stopped before reporting.
    pub async fn wait(self) -> AppResult<()> {
        self.receiver
            .await
            .map_err(|_| AppError::internal("Write queue stopped before completing the write"))?
    }
}

/// Cloneable handle to the write queue
#[derive(Clone)]
pub struct WriteQueue {
    sender: mpsc::UnboundedSender<WriteRequest>,
    counters: Arc<QueueCounters>,
    path: Arc<PathBuf>,
}

impl WriteQueue {
    /// Start the consumer task for `path`
    ///
    /// Must be called from within a tokio runtime. The task runs until every
    /// handle is dropped and the channel is drained.
    #[must_use]
    pub fn spawn(path: impl Into<PathBuf>) -> Self {
        let path = Arc::new(path.into());
        let (sender, receiver) = mpsc::unbounded_channel();
        let counters = Arc::new(QueueCounters::default());

        tokio::spawn(run_consumer(
            Arc::clone(&path),
            receiver,
            Arc::clone(&counters),
        ));
        info!(path = %path.display(), "Write queue started");

        Self {
            sender,
            counters,
            path,
        }
    }

    /// Path of the file this queue writes
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `document` and append it to the queue
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the document cannot be encoded, or
    /// `ResourceUnavailable` if the consumer task is gone.
    pub fn submit(&self, document: &StoreDocument) -> AppResult<PendingWrite> {
        let payload = serde_json::to_vec_pretty(document)?;
        let (responder, receiver) = oneshot::channel();

        self.counters.pending.fetch_add(1, Ordering::SeqCst);
        if self
            .sender
            .send(WriteRequest { payload, responder })
            .is_err()
        {
            self.counters.pending.fetch_sub(1, Ordering::SeqCst);
            return Err(AppError::unavailable("Write queue is not running"));
        }
        Ok(PendingWrite { receiver })
    }

    /// Queue `document` and wait for it to be written
    ///
    /// # Errors
    ///
    /// Returns the error of this particular write; other queued writes are
    /// unaffected.
    pub async fn enqueue_write(&self, document: &StoreDocument) -> AppResult<()> {
        self.submit(document)?.wait().await
    }

    /// Current queue state
    #[must_use]
    pub fn status(&self) -> QueueStatus {
        QueueStatus {
            state: if self.counters.writing.load(Ordering::SeqCst) {
                QueueState::Writing
            } else {
                QueueState::Idle
            },
            pending: self.counters.pending.load(Ordering::SeqCst),
            completed: self.counters.completed.load(Ordering::SeqCst),
            failed: self.counters.failed.load(Ordering::SeqCst),
        }
    }
}

async fn run_consumer(
    path: Arc<PathBuf>,
    mut receiver: mpsc::UnboundedReceiver<WriteRequest>,
    counters: Arc<QueueCounters>,
) {
    while let Some(request) = receiver.recv().await {
        counters.pending.fetch_sub(1, Ordering::SeqCst);
        counters.writing.store(true, Ordering::SeqCst);

        let result = write_atomically(&path, &request.payload).await;
        match &result {
            Ok(()) => {
                counters.completed.fetch_add(1, Ordering::SeqCst);
                debug!(path = %path.display(), bytes = request.payload.len(), "Data file written");
            }
            Err(e) => {
                counters.failed.fetch_add(1, Ordering::SeqCst);
                error!(path = %path.display(), error = %e, "Failed to write data file");
            }
        }

        counters.writing.store(false, Ordering::SeqCst);
        // The requester may have gone away; the write still happened.
        let _ = request.responder.send(result);
    }
    debug!(path = %path.display(), "Write queue drained and closed");
}

/// Write to a sibling temp file and rename it over the target
async fn write_atomically(path: &Path, payload: &[u8]) -> AppResult<()> {
    let mut tmp_name = path.file_name().map(ToOwned::to_owned).ok_or_else(|| {
        AppError::storage(format!("Data file path has no file name: {}", path.display()))
    })?;
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    if let Err(e) = fs::write(&tmp_path, payload).await {
        return Err(AppError::storage(format!(
            "Failed to write {}: {e}",
            tmp_path.display()
        ))
        .with_source(e));
    }
    if let Err(e) = fs::rename(&tmp_path, path).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(AppError::storage(format!(
            "Failed to replace {}: {e}",
            path.display()
        ))
        .with_source(e));
    }
    Ok(())
}
