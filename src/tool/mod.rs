//! Tool descriptors built from schemas.
//!
//! | Item | Description |
//! |------|-------------|
//! | [`build_tools_schema`] | Schema source to single-entry tool list |
//! | [`ToolSchemaManager`] | Immutable source + descriptor aggregate with validation |
//! | [`ToolDefinition`] | `{type: "function", function: {...}}` wire type |

pub mod builder;
pub mod manager;
pub mod types;

pub use builder::{build_tool_definition, build_tools_schema, STRIPPED_KEY};
pub use manager::{ToolSchemaManager, ToolSchemaManagerBuilder};
pub use types::{FunctionDefinition, ToolDefinition, ToolsSchema, FUNCTION_TOOL_TYPE};
