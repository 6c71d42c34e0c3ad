// ABOUTME: Persistence layer for the single JSON data document
// ABOUTME: DocumentStore abstraction, JSON file implementation, and the serialized write queue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage
//!
//! The whole data set lives in one JSON document. Reads load and parse the
//! file directly; writes replace the whole document and always go through
//! the [`WriteQueue`].

/// JSON file backed document store
pub mod json_file;

/// Serialized FIFO write queue
pub mod write_queue;

pub use json_file::JsonFileStore;
pub use write_queue::{PendingWrite, QueueState, QueueStatus, WriteQueue};

use crate::errors::AppResult;
use async_trait::async_trait;
use bodylog_core::models::StoreDocument;

/// Whole-document persistence
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Load the current document
    ///
    /// Implementations recover from a missing or unreadable document by
    /// returning the default document.
    async fn load(&self) -> AppResult<StoreDocument>;

    /// Replace the stored document
    ///
    /// # Errors
    ///
    /// Returns the storage error of this write.
    async fn save(&self, document: &StoreDocument) -> AppResult<()>;

    /// Write queue status, when the store has one
    fn queue_status(&self) -> Option<QueueStatus> {
        None
    }
}
