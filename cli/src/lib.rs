pub mod analysis;
pub mod config;
pub mod logging;
pub mod store;

pub use config::Config;
pub use store::{FileStore, LogSource};
