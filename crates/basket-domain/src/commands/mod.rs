use basket_core::BasketResult;

pub mod item_commands;

pub use item_commands::*;

/// A mutation of the list, expressed as an object so frontends can
/// execute, log, and test intents uniformly.
pub trait Command: Send + Sync {
    fn execute(&self, context: &mut CommandContext) -> BasketResult<()>;

    /// Human-readable description for logging.
    fn description(&self) -> String;
}

/// Mutable view of the list state passed to commands.
pub struct CommandContext<'a> {
    pub items: &'a mut Vec<crate::Item>,
}
