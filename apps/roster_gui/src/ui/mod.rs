//! UI layer: app shell and the roster panels.

pub mod app;
pub mod panels;

pub use app::RosterGuiApp;
