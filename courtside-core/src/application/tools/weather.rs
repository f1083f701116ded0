use crate::application::tooling::{Tool, ToolExecError};
use crate::config::{WeatherConfig, resolve_api_key};
use crate::types::ToolDefinition;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

pub const NAME: &str = "getWeather";
const SERVICE: &str = "OpenWeatherMap";

/// Current conditions for a city from the OpenWeatherMap API.
pub struct WeatherTool {
    definition: ToolDefinition,
    http: Client,
    endpoint: String,
    api_key: Option<String>,
    units: String,
}

impl WeatherTool {
    pub fn from_config(config: &WeatherConfig) -> Self {
        let api_key = resolve_api_key(NAME, config.api_key.as_deref());
        Self::new(config.endpoint.clone(), api_key, config.units.clone())
    }

    /// Build with an already-resolved key.
    pub fn new(endpoint: String, api_key: Option<String>, units: String) -> Self {
        Self {
            definition: definition(),
            http: Client::new(),
            endpoint,
            api_key,
            units,
        }
    }
}

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        NAME,
        "Get the current weather for a city",
        json!({
            "type": "object",
            "properties": {
                "location": { "type": "string", "description": "City name" }
            },
            "required": ["location"]
        }),
    )
}

#[async_trait]
impl Tool for WeatherTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn invoke(&self, arguments: Value) -> Result<Value, ToolExecError> {
        let location = arguments
            .get("location")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|location| !location.is_empty())
            .ok_or_else(|| ToolExecError::Arguments("location must be a non-empty string".into()))?;
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ToolExecError::missing_api_key(SERVICE))?;

        info!(location, units = self.units.as_str(), "Fetching current weather");
        let response: WeatherResponse = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", location),
                ("appid", api_key),
                ("units", self.units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ToolExecError::http(SERVICE, e))?
            .error_for_status()
            .map_err(|e| ToolExecError::http(SERVICE, e))?
            .json()
            .await
            .map_err(|e| ToolExecError::http(SERVICE, e))?;
        debug!(location, "Received weather response");

        response.into_report(&self.units)
    }
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    #[serde(default)]
    weather: Vec<WeatherCondition>,
    main: Option<WeatherMain>,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct WeatherMain {
    temp: f64,
}

impl WeatherResponse {
    fn into_report(self, units: &str) -> Result<Value, ToolExecError> {
        let forecast = self
            .weather
            .into_iter()
            .next()
            .map(|condition| condition.description)
            .ok_or_else(|| ToolExecError::invalid_response(SERVICE, "missing weather conditions"))?;
        let main = self
            .main
            .ok_or_else(|| ToolExecError::invalid_response(SERVICE, "missing temperature"))?;

        Ok(json!({
            "forecast": forecast,
            "temp": format!("{}{}", main.temp, temperature_suffix(units)),
        }))
    }
}

fn temperature_suffix(units: &str) -> &'static str {
    match units {
        "imperial" => "°F",
        "standard" => "K",
        _ => "°C",
    }
}
