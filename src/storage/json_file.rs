// ABOUTME: JSON file document store: direct reads, queued whole-document writes
// ABOUTME: Missing or corrupt files read as the default document; other I/O errors surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{DocumentStore, QueueStatus, WriteQueue};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use bodylog_core::models::{Measurement, StoreDocument};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error, info};

/// Document store backed by a single pretty-printed JSON file
#[derive(Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    queue: WriteQueue,
}

impl JsonFileStore {
    /// Open the store, creating the parent directory if needed, and start its write queue
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the parent directory cannot be created.
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::storage(format!(
                    "Failed to create data directory {}: {e}",
                    parent.display()
                ))
                .with_source(e)
            })?;
        }
        info!(path = %path.display(), "JSON document store opened");
        let queue = WriteQueue::spawn(path.clone());
        Ok(Self { path, queue })
    }

    /// Path of the data file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The store's write queue
    #[must_use]
    pub const fn queue(&self) -> &WriteQueue {
        &self.queue
    }

    /// Read and parse the data file
    ///
    /// A missing file yields the default document. A file that is not a
    /// valid document is logged and also yields the default, so the next
    /// write replaces it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` for any other read failure, so an edit never
    /// starts from a default document that would replace unread data.
    pub async fn read_document(&self) -> AppResult<StoreDocument> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Data file not found, using default document");
                return Ok(StoreDocument::default());
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to read data file");
                return Err(AppError::storage(format!(
                    "Failed to read data file {}: {e}",
                    self.path.display()
                ))
                .with_source(e));
            }
        };

        match serde_json::from_slice::<StoreDocument>(&raw) {
            Ok(mut document) => {
                document.normalize();
                Ok(document)
            }
            Err(e) => {
                error!(
                    path = %self.path.display(),
                    line = e.line(),
                    column = e.column(),
                    category = ?e.classify(),
                    record = invalid_record(&raw).as_deref().unwrap_or("unknown"),
                    error = %e,
                    "Data file is not a valid document, using default document; the next write will replace it"
                );
                Ok(StoreDocument::default())
            }
        }
    }
}

/// Locate the first measurement that fails to parse in an otherwise valid JSON file
fn invalid_record(raw: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(raw).ok()?;
    let records = value.get("measurements")?.as_array()?;
    records.iter().enumerate().find_map(|(index, record)| {
        serde_json::from_value::<Measurement>(record.clone())
            .err()
            .map(|e| {
                let date = record
                    .get("date")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("?");
                format!("measurements[{index}] (date {date}): {e}")
            })
    })
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self) -> AppResult<StoreDocument> {
        self.read_document().await
    }

    async fn save(&self, document: &StoreDocument) -> AppResult<()> {
        self.queue.enqueue_write(document).await
    }

    fn queue_status(&self) -> Option<QueueStatus> {
        Some(self.queue.status())
    }
}
