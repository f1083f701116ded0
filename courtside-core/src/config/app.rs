use super::agent::AgentConfig;
use super::error::ConfigError;
use super::provider::ProviderConfig;
use super::server::ServerConfig;
use super::tools::ToolsConfig;
use std::path::Path;

/// Application configuration loaded from courtside.toml
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub server: ServerConfig,
    pub agent: AgentConfig,
    pub tools: ToolsConfig,
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Parse configuration from TOML text without touching the filesystem.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        super::loader::parse_config(content, Path::new("<inline>"))
    }
}
