pub mod app;
pub mod export;
pub mod input;
pub mod logging;
pub mod preferences;
pub mod render;
pub mod session;

pub use app::{Widget, WidgetOverrides, mount};
