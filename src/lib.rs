pub mod api;
pub mod app;
pub mod config;
pub mod logger;
pub mod notify;
pub mod utils;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
