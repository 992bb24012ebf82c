use async_trait::async_trait;
use basket_domain::Item;
use basket_core::BasketResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Metadata stamped on every save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// Version of the on-disk format.
    pub format_version: u32,
    /// ID of the process instance that performed the save.
    pub instance_id: Uuid,
    /// When this data was saved.
    pub saved_at: DateTime<Utc>,
}

impl StoreMetadata {
    pub fn new(format_version: u32, instance_id: Uuid) -> Self {
        Self {
            format_version,
            instance_id,
            saved_at: Utc::now(),
        }
    }
}

/// A loaded list together with the metadata of the save that produced it.
#[derive(Debug, Clone)]
pub struct LoadedList {
    pub items: Vec<Item>,
    pub metadata: StoreMetadata,
}

/// Abstract storage backend for the item sequence.
///
/// Frontends take this as an injected dependency, so the real file store
/// can be swapped for an in-memory double in tests. A save always writes
/// the full sequence; there are no partial updates.
#[async_trait]
pub trait PersistenceStore: Send + Sync {
    /// Persist the full item sequence, replacing whatever was stored.
    async fn save(&self, items: &[Item]) -> BasketResult<StoreMetadata>;

    /// Load the stored sequence. Errors on missing or unreadable data;
    /// callers decide whether that means "start empty".
    async fn load(&self) -> BasketResult<LoadedList>;

    /// Whether the backing storage currently holds data.
    async fn exists(&self) -> bool;

    /// Path to the backing file, when the backend has one.
    fn path(&self) -> Option<&Path>;
}
