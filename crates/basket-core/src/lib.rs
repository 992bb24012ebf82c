pub mod config;
pub mod error;
pub mod input;
pub mod result;
pub mod selection;

pub use config::AppConfig;
pub use error::BasketError;
pub use input::InputState;
pub use result::BasketResult;
pub use selection::SelectionState;
