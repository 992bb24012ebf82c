use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{LoadedList, PersistenceStore, StoreMetadata};
use basket_core::{BasketError, BasketResult};
use basket_domain::Item;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Current on-disk format: a versioned envelope around the item array.
const FORMAT_VERSION: u32 = 2;

/// JSON file backend. One file mirrors the full item sequence; array
/// order is display order.
///
/// Two layouts load:
/// - V2 (written here): `{ version, metadata, items }`.
/// - V1 (legacy): a bare JSON array of `{ id, name, completed }` objects,
///   the layout the original browser widget kept in its storage key.
///   Legacy ids were millisecond timestamps with an accepted collision
///   risk, so they are discarded and fresh UUIDs minted on load.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    instance_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonEnvelope {
    version: u32,
    metadata: StoreMetadata,
    items: Vec<Item>,
}

/// Shape of a V1 entry. The legacy id is ignored.
#[derive(Debug, Deserialize)]
struct LegacyItem {
    name: String,
    #[serde(default)]
    completed: bool,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            instance_id: Uuid::new_v4(),
        }
    }

    fn parse(&self, bytes: &[u8]) -> BasketResult<LoadedList> {
        if let Ok(envelope) = serde_json::from_slice::<JsonEnvelope>(bytes) {
            if envelope.version != FORMAT_VERSION {
                return Err(BasketError::Serialization(format!(
                    "unsupported format version: {}",
                    envelope.version
                )));
            }
            return Ok(LoadedList {
                items: envelope.items,
                metadata: envelope.metadata,
            });
        }

        // Legacy bare array. Names and completion flags survive in order;
        // ids are re-minted.
        let legacy: Vec<LegacyItem> = serde_json::from_slice(bytes)
            .map_err(|e| BasketError::Serialization(e.to_string()))?;
        tracing::info!(
            "loaded legacy list format from {} ({} items)",
            self.path.display(),
            legacy.len()
        );
        let items = legacy
            .into_iter()
            .map(|entry| {
                let mut item = Item::new(entry.name);
                item.completed = entry.completed;
                item
            })
            .collect();
        Ok(LoadedList {
            items,
            metadata: StoreMetadata::new(1, self.instance_id),
        })
    }
}

#[async_trait::async_trait]
impl PersistenceStore for JsonFileStore {
    async fn save(&self, items: &[Item]) -> BasketResult<StoreMetadata> {
        let metadata = StoreMetadata::new(FORMAT_VERSION, self.instance_id);
        let envelope = JsonEnvelope {
            version: FORMAT_VERSION,
            metadata: metadata.clone(),
            items: items.to_vec(),
        };

        let bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| BasketError::Serialization(e.to_string()))?;

        AtomicWriter::write_atomic(&self.path, &bytes).await?;

        tracing::info!(
            "saved {} items ({} bytes) to {}",
            items.len(),
            bytes.len(),
            self.path.display()
        );
        Ok(metadata)
    }

    async fn load(&self) -> BasketResult<LoadedList> {
        let bytes = AtomicWriter::read_all(&self.path).await?;
        let loaded = self.parse(&bytes)?;
        tracing::info!(
            "loaded {} items from {}",
            loaded.items.len(),
            self.path.display()
        );
        Ok(loaded)
    }

    async fn exists(&self) -> bool {
        self.path.exists()
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
