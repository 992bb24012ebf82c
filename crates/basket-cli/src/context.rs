use basket_core::{BasketError, BasketResult};
use basket_domain::commands::{
    AddItem, ClearItems, Command, CommandContext, RemoveItem, RenameItem, ToggleItem,
};
use basket_domain::{Item, ItemFilter, ItemId, ListOperations};
use basket_persistence::{JsonFileStore, PersistenceStore};
use std::path::Path;

/// CLI-side list state: loaded once per invocation, saved back in full
/// after a mutating command.
pub struct CliContext<S: PersistenceStore = JsonFileStore> {
    pub items: Vec<Item>,
    store: S,
}

impl CliContext<JsonFileStore> {
    pub async fn load(path: impl AsRef<Path>) -> Self {
        Self::from_store(JsonFileStore::new(path)).await
    }
}

impl<S: PersistenceStore> CliContext<S> {
    /// Missing or unparsable storage is treated as an empty list; no
    /// error reaches the user.
    pub async fn from_store(store: S) -> Self {
        let items = if store.exists().await {
            match store.load().await {
                Ok(loaded) => loaded.items,
                Err(e) => {
                    tracing::warn!("could not load stored list, starting empty: {e}");
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };
        Self { items, store }
    }

    pub fn execute(&mut self, command: &dyn Command) -> BasketResult<()> {
        tracing::debug!("{}", command.description());
        let mut ctx = CommandContext {
            items: &mut self.items,
        };
        command.execute(&mut ctx)
    }

    pub async fn save(&self) -> BasketResult<()> {
        self.store.save(&self.items).await?;
        Ok(())
    }
}

impl<S: PersistenceStore> ListOperations for CliContext<S> {
    fn add_item(&mut self, name: &str) -> BasketResult<Item> {
        self.execute(&AddItem {
            name: name.to_string(),
        })?;
        self.items
            .last()
            .cloned()
            .ok_or_else(|| BasketError::Internal("item added but list is empty".into()))
    }

    fn list_items(&self, filter: ItemFilter) -> BasketResult<Vec<Item>> {
        Ok(self
            .items
            .iter()
            .filter(|i| filter.matches(i))
            .cloned()
            .collect())
    }

    fn get_item(&self, id: ItemId) -> BasketResult<Option<Item>> {
        Ok(self.items.iter().find(|i| i.id == id).cloned())
    }

    fn rename_item(&mut self, id: ItemId, name: &str) -> BasketResult<Item> {
        self.execute(&RenameItem {
            item_id: id,
            name: name.to_string(),
        })?;
        self.get_item(id)?
            .ok_or_else(|| BasketError::NotFound(format!("Item {id}")))
    }

    fn toggle_item(&mut self, id: ItemId) -> BasketResult<Item> {
        self.execute(&ToggleItem { item_id: id })?;
        self.get_item(id)?
            .ok_or_else(|| BasketError::NotFound(format!("Item {id}")))
    }

    fn remove_item(&mut self, id: ItemId) -> BasketResult<()> {
        self.execute(&RemoveItem { item_id: id })
    }

    fn clear_items(&mut self) -> BasketResult<usize> {
        let count = self.items.len();
        self.execute(&ClearItems)?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_persistence::MemoryStore;

    #[tokio::test]
    async fn empty_store_loads_as_empty_list() {
        let ctx = CliContext::from_store(MemoryStore::new()).await;
        assert!(ctx.items.is_empty());
    }

    #[tokio::test]
    async fn mutations_round_trip_through_the_store() {
        let mut ctx = CliContext::from_store(MemoryStore::new()).await;
        let item = ctx.add_item("Milk").unwrap();
        ctx.toggle_item(item.id).unwrap();
        ctx.save().await.unwrap();

        let store = ctx.store;
        let reloaded = CliContext::from_store(store).await;
        assert_eq!(reloaded.items.len(), 1);
        assert_eq!(reloaded.items[0].name, "Milk");
        assert!(reloaded.items[0].completed);
    }

    #[tokio::test]
    async fn rename_completed_item_is_rejected() {
        let mut ctx = CliContext::from_store(MemoryStore::new()).await;
        let item = ctx.add_item("Milk").unwrap();
        ctx.toggle_item(item.id).unwrap();

        let err = ctx.rename_item(item.id, "Oat milk").unwrap_err();
        assert!(matches!(err, BasketError::Validation(_)));
        assert_eq!(ctx.items[0].name, "Milk");
    }

    #[tokio::test]
    async fn list_respects_filter_without_mutating() {
        let mut ctx = CliContext::from_store(MemoryStore::new()).await;
        let milk = ctx.add_item("Milk").unwrap();
        ctx.add_item("Eggs").unwrap();
        ctx.toggle_item(milk.id).unwrap();

        let done = ctx.list_items(ItemFilter::Completed).unwrap();
        let open = ctx.list_items(ItemFilter::Incomplete).unwrap();
        let all = ctx.list_items(ItemFilter::All).unwrap();

        assert_eq!(done.len(), 1);
        assert_eq!(done[0].name, "Milk");
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].name, "Eggs");
        assert_eq!(all.len(), 2);
        assert_eq!(ctx.items.len(), 2);
    }
}
