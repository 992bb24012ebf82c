use crate::{Item, ItemFilter, ItemId};
use basket_core::BasketResult;

/// Shared surface for the TUI and CLI frontends. Adding a method here
/// forces both implementations to add it, so the two cannot drift.
///
/// Implementations mutate in-memory state only; persisting the sequence
/// after a mutation is the caller's responsibility.
pub trait ListOperations {
    /// Validate, trim, and append a new incomplete item.
    fn add_item(&mut self, name: &str) -> BasketResult<Item>;

    /// Items matching the filter, in display order. Never mutates.
    fn list_items(&self, filter: ItemFilter) -> BasketResult<Vec<Item>>;

    fn get_item(&self, id: ItemId) -> BasketResult<Option<Item>>;

    /// Rename an incomplete item; completed items refuse edits.
    fn rename_item(&mut self, id: ItemId, name: &str) -> BasketResult<Item>;

    /// Flip completion on exactly one item.
    fn toggle_item(&mut self, id: ItemId) -> BasketResult<Item>;

    fn remove_item(&mut self, id: ItemId) -> BasketResult<()>;

    /// Unconditional destructive clear. Returns how many items were dropped.
    fn clear_items(&mut self) -> BasketResult<usize>;
}
