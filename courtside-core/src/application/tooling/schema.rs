//! Compiled tool parameter schemas.

use jsonschema::{JSONSchema, ValidationError};
use serde_json::Value;
use std::fmt;

/// A tool's `parameters` schema, compiled once when the registry is built.
pub struct ArgumentSchema {
    compiled: JSONSchema,
}

impl ArgumentSchema {
    pub fn compile(schema: &Value) -> Result<Self, String> {
        JSONSchema::compile(schema)
            .map(|compiled| Self { compiled })
            .map_err(|error| error.to_string())
    }

    /// Check model-supplied arguments. Every violation is reported, each
    /// prefixed with the JSON pointer of the offending value.
    pub fn validate(&self, arguments: &Value) -> Result<(), String> {
        self.compiled.validate(arguments).map_err(|errors| {
            errors
                .map(|error| describe(&error))
                .collect::<Vec<_>>()
                .join("; ")
        })
    }
}

impl fmt::Debug for ArgumentSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ArgumentSchema")
    }
}

fn describe(error: &ValidationError<'_>) -> String {
    format!("arguments{}: {error}", error.instance_path)
}
