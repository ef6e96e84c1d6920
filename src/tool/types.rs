//! Tool descriptor definitions in the OpenAI function-calling wire format.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The only tool type the function-calling API accepts.
pub const FUNCTION_TOOL_TYPE: &str = "function";

/// Tool definition (for function calling)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub tool_type: String, // "function"
    pub function: FunctionDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub parameters: Map<String, Value>, // JSON Schema without "title"
}

impl ToolDefinition {
    pub fn function(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Map<String, Value>,
    ) -> Self {
        Self {
            tool_type: FUNCTION_TOOL_TYPE.to_string(),
            function: FunctionDefinition {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.function.name
    }
}

/// Tool list sent in the `tools` request field; one schema yields one entry.
pub type ToolsSchema = Vec<ToolDefinition>;
