use crate::constants::{
    DEFAULT_AVAILABLE_FRIENDS, DEFAULT_COURTS, DEFAULT_WEATHER_API_KEY_ENV,
    DEFAULT_WEATHER_ENDPOINT, DEFAULT_WEATHER_UNITS,
};
use serde::{Deserialize, Serialize};

/// Settings for the built-in tool backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolsConfig {
    pub weather: WeatherConfig,
    pub courts: Vec<CourtConfig>,
    pub friends: FriendsConfig,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            weather: WeatherConfig::default(),
            courts: default_courts(),
            friends: FriendsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherConfig {
    pub endpoint: String,
    /// Name of the environment variable holding the OpenWeatherMap key.
    pub api_key: Option<String>,
    pub units: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_WEATHER_ENDPOINT.to_string(),
            api_key: Some(DEFAULT_WEATHER_API_KEY_ENV.to_string()),
            units: DEFAULT_WEATHER_UNITS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtConfig {
    pub name: String,
    pub available: bool,
}

pub(crate) fn default_courts() -> Vec<CourtConfig> {
    DEFAULT_COURTS
        .iter()
        .map(|(name, available)| CourtConfig {
            name: (*name).to_string(),
            available: *available,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendsConfig {
    /// Friends reported as free by `checkFriendsAvailability`.
    pub available: Vec<String>,
}

impl Default for FriendsConfig {
    fn default() -> Self {
        Self {
            available: DEFAULT_AVAILABLE_FRIENDS
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct RawToolsConfig {
    #[serde(default)]
    pub(super) weather: RawWeatherConfig,
    pub(super) courts: Option<Vec<CourtConfig>>,
    #[serde(default)]
    pub(super) friends: RawFriendsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct RawWeatherConfig {
    pub(super) endpoint: Option<String>,
    pub(super) api_key: Option<String>,
    pub(super) units: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct RawFriendsConfig {
    pub(super) available: Option<Vec<String>>,
}
