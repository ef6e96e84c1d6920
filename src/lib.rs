//! # ai-tool-schema
//!
//! Turns JSON schemas (derived with `schemars` or supplied as raw mappings)
//! into function-calling tool descriptors and encodes the matching
//! `tool_choice` value.
//!
//! ## Overview
//!
//! A schema's root `title` becomes the function name, its root `description`
//! becomes the function description, and the rest of the schema (with every
//! `title` key removed at any depth) becomes the function parameters:
//!
//! ```json
//! [{"type": "function", "function": {"name": "...", "description": "...", "parameters": {...}}}]
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use ai_tool_schema::{encode_tool_choice, ToolChoice, ToolSchemaManager};
//! use schemars::JsonSchema;
//! use serde_json::json;
//!
//! /// Look up the current weather.
//! #[derive(JsonSchema)]
//! #[allow(dead_code)]
//! struct GetWeather {
//!     city: String,
//! }
//!
//! # fn main() -> ai_tool_schema::Result<()> {
//! let manager = ToolSchemaManager::from_type::<GetWeather>()?;
//! let tools = manager.to_value()?;
//! assert_eq!(tools[0]["function"]["name"], "GetWeather");
//!
//! let choice = encode_tool_choice(ToolChoice::ToolName, Some(&manager))?;
//! assert_eq!(choice.to_value()?["function"]["name"], "GetWeather");
//!
//! let answer = manager.validate(&json!({"city": "Oslo"}))?;
//! assert!(answer.is_valid());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`schema`] | Schema sources and recursive key stripping |
//! | [`tool`] | Tool descriptor building and the schema manager |
//! | [`choice`] | `tool_choice` encoding |
//! | [`validation`] | Tool answer validation results |

pub mod choice;
pub mod schema;
pub mod tool;
pub mod validation;

// Re-export main types for convenience
pub use choice::{encode_tool_choice, encode_tool_choice_str, ToolChoice, ToolChoiceValue};
pub use schema::{strip_key, SchemaExport, SchemaObject, SchemaSource};
pub use tool::{build_tools_schema, ToolDefinition, ToolSchemaManager, ToolsSchema};
pub use validation::{ValidationError, ValidationResult};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
