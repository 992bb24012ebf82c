pub mod app;
pub mod dialog;
pub mod events;
pub mod ui;

pub use app::App;
