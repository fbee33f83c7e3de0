//! Configuration loading and the durable token cache.

mod loader;
mod token;
mod types;

pub use loader::ConfigError;
pub use token::TokenCache;
pub use types::{ChatConfig, Config, ServerConfig};
