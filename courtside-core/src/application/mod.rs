//! # Application Module
//!
//! Turn orchestration and everything tools need to run.
//!
//! ## Submodules
//!
//! - [`agent`] - One request/response turn: model call, then tool path or text path
//! - [`tooling`] - Tool registry, argument validation, and the invoker
//! - [`tools`] - The built-in tennis-planning tools

pub mod agent;
pub mod tooling;
pub mod tools;
