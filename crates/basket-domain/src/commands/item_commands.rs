use super::{Command, CommandContext};
use crate::item::{validate_name, Item, ItemId};
use basket_core::{BasketError, BasketResult};

/// Append a new incomplete item at the end of the list.
pub struct AddItem {
    pub name: String,
}

impl Command for AddItem {
    fn execute(&self, context: &mut CommandContext) -> BasketResult<()> {
        let name = validate_name(&self.name)?;
        context.items.push(Item::new(name));
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add item: '{}'", self.name)
    }
}

/// Rename an item. Completed items are locked against edits.
pub struct RenameItem {
    pub item_id: ItemId,
    pub name: String,
}

impl Command for RenameItem {
    fn execute(&self, context: &mut CommandContext) -> BasketResult<()> {
        let name = validate_name(&self.name)?;
        let item = context
            .items
            .iter_mut()
            .find(|i| i.id == self.item_id)
            .ok_or_else(|| BasketError::NotFound(format!("Item {}", self.item_id)))?;
        if item.completed {
            return Err(BasketError::Validation(
                "completed items cannot be renamed".to_string(),
            ));
        }
        item.rename(name);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Rename item {} to '{}'", self.item_id, self.name)
    }
}

/// Flip an item's completed flag.
pub struct ToggleItem {
    pub item_id: ItemId,
}

impl Command for ToggleItem {
    fn execute(&self, context: &mut CommandContext) -> BasketResult<()> {
        let item = context
            .items
            .iter_mut()
            .find(|i| i.id == self.item_id)
            .ok_or_else(|| BasketError::NotFound(format!("Item {}", self.item_id)))?;
        item.toggle_completed();
        Ok(())
    }

    fn description(&self) -> String {
        format!("Toggle item {}", self.item_id)
    }
}

/// Remove one item, preserving the relative order of the rest.
pub struct RemoveItem {
    pub item_id: ItemId,
}

impl Command for RemoveItem {
    fn execute(&self, context: &mut CommandContext) -> BasketResult<()> {
        let pos = context
            .items
            .iter()
            .position(|i| i.id == self.item_id)
            .ok_or_else(|| BasketError::NotFound(format!("Item {}", self.item_id)))?;
        context.items.remove(pos);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Remove item {}", self.item_id)
    }
}

/// Drop every item. Destructive and unconditional.
pub struct ClearItems;

impl Command for ClearItems {
    fn execute(&self, context: &mut CommandContext) -> BasketResult<()> {
        context.items.clear();
        Ok(())
    }

    fn description(&self) -> String {
        "Clear all items".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(items: &mut Vec<Item>, cmd: impl Command) -> BasketResult<()> {
        let mut ctx = CommandContext { items };
        cmd.execute(&mut ctx)
    }

    #[test]
    fn add_appends_at_the_end() {
        let mut items = Vec::new();
        run(&mut items, AddItem { name: "Milk".into() }).unwrap();
        run(&mut items, AddItem { name: "Eggs".into() }).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "Eggs");
        assert!(!items[1].completed);
    }

    #[test]
    fn add_rejects_blank_name_without_mutating() {
        let mut items = Vec::new();
        let err = run(&mut items, AddItem { name: "   ".into() }).unwrap_err();
        assert!(matches!(err, BasketError::Validation(_)));
        assert!(items.is_empty());
    }

    #[test]
    fn add_trims_the_stored_name() {
        let mut items = Vec::new();
        run(&mut items, AddItem { name: "  Milk  ".into() }).unwrap();
        assert_eq!(items[0].name, "Milk");
    }

    #[test]
    fn toggle_touches_only_the_target() {
        let mut items = vec![
            Item::new("Milk".to_string()),
            Item::new("Eggs".to_string()),
            Item::new("Jam".to_string()),
        ];
        let target = items[1].id;
        run(&mut items, ToggleItem { item_id: target }).unwrap();
        assert!(!items[0].completed);
        assert!(items[1].completed);
        assert!(!items[2].completed);
    }

    #[test]
    fn toggle_unknown_id_is_not_found() {
        let mut items = vec![Item::new("Milk".to_string())];
        let err = run(
            &mut items,
            ToggleItem {
                item_id: uuid::Uuid::new_v4(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, BasketError::NotFound(_)));
    }

    #[test]
    fn rename_refused_for_completed_items() {
        let mut items = vec![Item::new("Milk".to_string())];
        let id = items[0].id;
        run(&mut items, ToggleItem { item_id: id }).unwrap();

        let err = run(
            &mut items,
            RenameItem {
                item_id: id,
                name: "Oat milk".into(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, BasketError::Validation(_)));
        assert_eq!(items[0].name, "Milk");
    }

    #[test]
    fn rename_updates_exactly_one_item() {
        let mut items = vec![Item::new("Milk".to_string()), Item::new("Eggs".to_string())];
        let id = items[0].id;
        run(
            &mut items,
            RenameItem {
                item_id: id,
                name: "  Oat milk ".into(),
            },
        )
        .unwrap();
        assert_eq!(items[0].name, "Oat milk");
        assert_eq!(items[1].name, "Eggs");
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut items = vec![
            Item::new("Milk".to_string()),
            Item::new("Eggs".to_string()),
            Item::new("Jam".to_string()),
        ];
        let middle = items[1].id;
        run(&mut items, RemoveItem { item_id: middle }).unwrap();
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Milk", "Jam"]);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut items = vec![Item::new("Milk".to_string()), Item::new("Eggs".to_string())];
        run(&mut items, ClearItems).unwrap();
        assert!(items.is_empty());
    }
}
