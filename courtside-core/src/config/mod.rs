pub mod agent;
pub mod app;
pub mod error;
pub mod loader;
pub mod provider;
pub mod server;
pub mod tools;

pub use crate::constants::CONFIG_PATH;
pub use agent::AgentConfig;
pub use app::AppConfig;
pub use error::ConfigError;
pub use loader::{ensure_env_loaded, resolve_api_key};
pub use provider::ProviderConfig;
pub use server::ServerConfig;
pub use tools::{CourtConfig, FriendsConfig, ToolsConfig, WeatherConfig};
