//! Domain events emitted by document hub mutations.
//!
//! Every successful mutation journals exactly one event; dependent views
//! use the event stream (or the revision counter it carries) as the
//! signal that the tree changed and must be re-flattened.

pub mod file;
pub mod folder;
pub mod share;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use file::FileEvent;
pub use folder::FolderEvent;
pub use share::ShareEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// Tree revision produced by the mutation.
    pub revision: u64,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// A file-related event.
    File(FileEvent),
    /// A folder-related event.
    Folder(FolderEvent),
    /// A share-related event.
    Share(ShareEvent),
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(revision: u64, payload: EventPayload) -> Self {
        Self {
            id: Uuid::now_v7(),
            timestamp: Utc::now(),
            revision,
            payload,
        }
    }
}

impl From<FileEvent> for EventPayload {
    fn from(event: FileEvent) -> Self {
        Self::File(event)
    }
}

impl From<FolderEvent> for EventPayload {
    fn from(event: FolderEvent) -> Self {
        Self::Folder(event)
    }
}

impl From<ShareEvent> for EventPayload {
    fn from(event: ShareEvent) -> Self {
        Self::Share(event)
    }
}
