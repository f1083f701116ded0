use super::AppConfig;
use super::agent::{AgentConfig, RawAgentConfig};
use super::error::ConfigError;
use super::provider::{ProviderConfig, RawProviderConfig};
use super::server::{RawServerConfig, ServerConfig};
use super::tools::{
    FriendsConfig, RawToolsConfig, ToolsConfig, WeatherConfig, default_courts,
};
use crate::constants::{CONFIG_PATH, ENV_PATH};
use dotenvy::from_filename;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use std::time::Duration;
use tracing::{debug, info, warn};

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    provider: RawProviderConfig,
    #[serde(default)]
    server: RawServerConfig,
    #[serde(default)]
    agent: RawAgentConfig,
    #[serde(default)]
    tools: RawToolsConfig,
}

/// Ensures environment variables are loaded from .env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        if from_filename(ENV_PATH).is_ok() {
            debug!(path = ENV_PATH, "Loaded environment file");
        }
    });
}

/// Resolve an API key from the environment variable named by `env_var`.
pub fn resolve_api_key(owner: &str, env_var: Option<&str>) -> Option<String> {
    let raw = env_var.map(str::trim)?;
    if raw.is_empty() {
        return None;
    }
    match env::var(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(owner, env_var = raw, %err, "API key environment variable is not set");
            None
        }
    }
}

/// Load and validate configuration.
///
/// An explicit path must exist. Without one, the default path is tried and
/// built-in defaults are used when it is absent.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(path) => read_config(path),
        None => match read_config(Path::new(CONFIG_PATH)) {
            Err(ConfigError::NotFound { path }) => {
                info!(path = %path.display(), "No configuration file found, using defaults");
                Ok(AppConfig::default())
            }
            other => other,
        },
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_config(&content, path)
}

pub(super) fn parse_config(content: &str, origin: &Path) -> Result<AppConfig, ConfigError> {
    let parsed: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;
    validate_and_build(parsed)
}

fn expand(value: &str) -> String {
    shellexpand::full(value)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

fn timeout(secs: Option<u64>, fallback: Duration, field: &'static str) -> Result<Duration, ConfigError> {
    match secs {
        None => Ok(fallback),
        Some(0) => Err(ConfigError::InvalidTimeout { field }),
        Some(secs) => Ok(Duration::from_secs(secs)),
    }
}

fn validate_and_build(parsed: RawConfig) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();

    let raw = parsed.provider;
    let provider = ProviderConfig {
        endpoint: raw
            .endpoint
            .map(|v| expand(&v))
            .unwrap_or(defaults.provider.endpoint),
        api_path: raw.api_path.unwrap_or(defaults.provider.api_path),
        api_key: raw.api_key.or(defaults.provider.api_key),
        model: raw.model.unwrap_or(defaults.provider.model),
        timeout: timeout(
            raw.timeout_secs,
            defaults.provider.timeout,
            "provider.timeout_secs",
        )?,
    };
    if provider.endpoint.trim().is_empty() {
        return Err(ConfigError::MissingEndpoint { section: "provider" });
    }
    if provider.model.trim().is_empty() {
        return Err(ConfigError::MissingModel);
    }

    let raw = parsed.server;
    let bind = match raw.bind {
        Some(value) => {
            let value = expand(&value);
            value
                .parse()
                .map_err(|source| ConfigError::InvalidBind { value, source })?
        }
        None => defaults.server.bind,
    };
    let server = ServerConfig {
        bind,
        cors_origins: raw.cors_origins.unwrap_or(defaults.server.cors_origins),
    };

    let raw = parsed.agent;
    let agent = AgentConfig {
        system_prompt: raw
            .system_prompt
            .filter(|prompt| !prompt.trim().is_empty())
            .unwrap_or(defaults.agent.system_prompt),
        fallback_text: raw
            .fallback_text
            .filter(|text| !text.trim().is_empty())
            .unwrap_or(defaults.agent.fallback_text),
        parallel_tools: raw.parallel_tools.unwrap_or(defaults.agent.parallel_tools),
        tool_timeout: timeout(
            raw.tool_timeout_secs,
            defaults.agent.tool_timeout,
            "agent.tool_timeout_secs",
        )?,
    };

    let raw = parsed.tools;
    let weather_defaults = WeatherConfig::default();
    let weather = WeatherConfig {
        endpoint: raw
            .weather
            .endpoint
            .map(|v| expand(&v))
            .unwrap_or(weather_defaults.endpoint),
        api_key: raw.weather.api_key.or(weather_defaults.api_key),
        units: raw.weather.units.unwrap_or(weather_defaults.units),
    };
    if weather.endpoint.trim().is_empty() {
        return Err(ConfigError::MissingEndpoint {
            section: "tools.weather",
        });
    }
    let courts = raw.courts.unwrap_or_else(default_courts);
    if let Some(index) = courts.iter().position(|court| court.name.trim().is_empty()) {
        return Err(ConfigError::EmptyCourtName { index });
    }
    let friends = FriendsConfig {
        available: raw
            .friends
            .available
            .unwrap_or_else(|| FriendsConfig::default().available),
    };

    Ok(AppConfig {
        provider,
        server,
        agent,
        tools: ToolsConfig {
            weather,
            courts,
            friends,
        },
    })
}
