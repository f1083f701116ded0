//! Built-in tennis-planning tools.

pub mod courts;
pub mod friends;
pub mod weather;

pub use courts::TennisCourtsTool;
pub use friends::FriendsAvailabilityTool;
pub use weather::WeatherTool;

use crate::application::tooling::{RegistryError, ToolRegistry};
use crate::config::ToolsConfig;

/// Build the process-wide registry holding the three built-in tools.
pub fn builtin_registry(config: &ToolsConfig) -> Result<ToolRegistry, RegistryError> {
    ToolRegistry::builder()
        .register(WeatherTool::from_config(&config.weather))
        .register(TennisCourtsTool::new(config.courts.clone()))
        .register(FriendsAvailabilityTool::new(
            config.friends.available.iter().cloned(),
        ))
        .build()
}
