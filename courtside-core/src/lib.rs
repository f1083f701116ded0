pub mod application;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::{agent, tooling, tools};
pub use config::AppConfig;
pub use domain::types;
pub use infrastructure::{model, server};
