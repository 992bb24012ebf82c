use crate::traits::{LoadedList, PersistenceStore, StoreMetadata};
use basket_core::{BasketError, BasketResult};
use basket_domain::Item;
use std::path::Path;
use std::sync::Mutex;
use uuid::Uuid;

/// In-process store used as a test double for [`JsonFileStore`].
///
/// Mirrors the file store's contract: loading before the first save
/// errors the way a missing file does.
#[derive(Debug)]
pub struct MemoryStore {
    contents: Mutex<Option<Vec<Item>>>,
    instance_id: Uuid,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            contents: Mutex::new(None),
            instance_id: Uuid::new_v4(),
        }
    }

    /// Start pre-populated, as if a previous run had saved `items`.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            contents: Mutex::new(Some(items)),
            instance_id: Uuid::new_v4(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PersistenceStore for MemoryStore {
    async fn save(&self, items: &[Item]) -> BasketResult<StoreMetadata> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|_| BasketError::Internal("memory store lock poisoned".to_string()))?;
        *contents = Some(items.to_vec());
        Ok(StoreMetadata::new(2, self.instance_id))
    }

    async fn load(&self) -> BasketResult<LoadedList> {
        let contents = self
            .contents
            .lock()
            .map_err(|_| BasketError::Internal("memory store lock poisoned".to_string()))?;
        match contents.as_ref() {
            Some(items) => Ok(LoadedList {
                items: items.clone(),
                metadata: StoreMetadata::new(2, self.instance_id),
            }),
            None => Err(BasketError::NotFound("nothing stored yet".to_string())),
        }
    }

    async fn exists(&self) -> bool {
        self.contents
            .lock()
            .map(|contents| contents.is_some())
            .unwrap_or(false)
    }

    fn path(&self) -> Option<&Path> {
        None
    }
}
