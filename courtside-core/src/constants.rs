//! Application constants
//!
//! Single source of truth for paths and built-in defaults.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/courtside.toml";

/// Default environment file path
pub const ENV_PATH: &str = ".env";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_API_PATH: &str = "/v1/chat/completions";
pub const DEFAULT_OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_BIND: &str = "127.0.0.1:5001";
pub const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_TOOL_TIMEOUT_SECS: u64 = 15;

pub const DEFAULT_WEATHER_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_WEATHER_API_KEY_ENV: &str = "WEATHER_API_KEY";
pub const DEFAULT_WEATHER_UNITS: &str = "metric";

pub const DEFAULT_AVAILABLE_FRIENDS: &[&str] = &["Sarah"];
pub const DEFAULT_COURTS: &[(&str, bool)] = &[
    ("Victoria Park Courts", true),
    ("Riverside Tennis Club", false),
];

/// Annotation attached to every tool-path reply.
pub const TOOL_REASONING: &str = "Agent used tools";

/// Reply text used when the model answers with empty content.
pub const DEFAULT_FALLBACK_TEXT: &str = "I'm not sure, but I'll do my best to help!";

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a Tennis Coach Agent. When asked about playing tennis, prefer using tools (getWeather, findTennisCourts, checkFriendsAvailability). For anything else, respond helpfully in text.";
