// ABOUTME: Data service: document reads, whole-document replacement and targeted edits
// ABOUTME: Edits run read-modify-enqueue under one async mutex so updates are never lost
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::storage::{DocumentStore, QueueStatus};
use bodylog_core::models::{Goals, GoalsUpdate, Measurement, MeasurementInput, StoreDocument};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Reads and writes the stored document
///
/// Reads go straight to the store. Every write, whether a full replacement
/// or a targeted edit, holds `edit_lock` from its read until the write queue
/// reports the outcome.
pub struct DataService {
    store: Arc<dyn DocumentStore>,
    edit_lock: Mutex<()>,
}

impl DataService {
    /// Create a service over `store`
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            edit_lock: Mutex::new(()),
        }
    }

    /// Current document
    ///
    /// # Errors
    ///
    /// Returns the store's read error.
    pub async fn document(&self) -> AppResult<StoreDocument> {
        self.store.load().await
    }

    /// Replace the whole document
    ///
    /// The document is normalized (sorted newest-first, one record per date,
    /// ids assigned, pound fields recomputed) and validated before it is
    /// queued.
    ///
    /// # Errors
    ///
    /// Returns a validation error without writing anything, or the write's
    /// own storage error.
    pub async fn replace(&self, mut document: StoreDocument) -> AppResult<()> {
        document.normalize();
        if let Err(e) = document.validate() {
            warn!(error = %e, "Rejected document replacement");
            return Err(e);
        }

        let started = Instant::now();
        let _guard = self.edit_lock.lock().await;
        self.store.save(&document).await?;
        AppLogger::log_document_mutation(
            "replace",
            document.measurements.len(),
            elapsed_ms(started),
        );
        Ok(())
    }

    /// Insert or update the measurement for the input's date
    ///
    /// # Errors
    ///
    /// Returns a validation error, or the write's storage error.
    pub async fn upsert_measurement(&self, input: MeasurementInput) -> AppResult<Measurement> {
        self.mutate("upsert_measurement", |document| {
            document.upsert_measurement(input)
        })
        .await
    }

    /// Delete a measurement by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or the write's storage error.
    pub async fn delete_measurement(&self, id: &str) -> AppResult<Measurement> {
        self.mutate("delete_measurement", |document| {
            document.delete_measurement(id)
        })
        .await
    }

    /// Shallow-merge goal targets
    ///
    /// # Errors
    ///
    /// Returns a validation error, or the write's storage error.
    pub async fn merge_goals(&self, update: &GoalsUpdate) -> AppResult<Goals> {
        self.mutate("merge_goals", |document| document.merge_goals(update))
            .await
    }

    /// Record the user's height in centimeters
    ///
    /// # Errors
    ///
    /// Returns a validation error, or the write's storage error.
    pub async fn set_height(&self, height_cm: f64) -> AppResult<f64> {
        self.mutate("set_height", |document| {
            document.set_height(height_cm)?;
            Ok(document.height)
        })
        .await
    }

    /// Write queue status, when the store has one
    #[must_use]
    pub fn queue_status(&self) -> Option<QueueStatus> {
        self.store.queue_status()
    }

    async fn mutate<T, F>(&self, operation: &str, edit: F) -> AppResult<T>
    where
        F: FnOnce(&mut StoreDocument) -> AppResult<T> + Send,
        T: Send,
    {
        let started = Instant::now();
        let _guard = self.edit_lock.lock().await;

        let mut document = self.store.load().await?;
        let outcome = edit(&mut document)?;
        self.store.save(&document).await?;

        debug!(operation, "Document edit persisted");
        AppLogger::log_document_mutation(
            operation,
            document.measurements.len(),
            elapsed_ms(started),
        );
        Ok(outcome)
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
