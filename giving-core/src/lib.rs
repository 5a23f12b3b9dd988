pub mod calculations;
pub mod config;
pub mod format;
pub mod models;
pub mod parse;

pub use config::{ConfigError, WidgetConfig};
pub use models::*;
