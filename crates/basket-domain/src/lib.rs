pub mod commands;
pub mod filter;
pub mod item;
pub mod operations;

pub use filter::ItemFilter;
pub use item::{validate_name, Item, ItemId};
pub use operations::ListOperations;
