//! Schema-to-tool-descriptor conversion.

use crate::schema::{json_type_name, strip_key_from_map, SchemaSource};
use crate::tool::types::{ToolDefinition, ToolsSchema};
use crate::{Error, ErrorContext, Result};
use serde_json::{Map, Value};
use tracing::debug;

/// Key promoted to the tool name and stripped from the parameters at every depth.
pub const STRIPPED_KEY: &str = "title";

const DESCRIPTION_KEY: &str = "description";

/// Build the single-entry tool list for `source`.
///
/// The root `title` becomes the function name. A root `description` in the
/// schema takes precedence over `description_override`; without either the
/// description is empty.
pub fn build_tools_schema(
    source: &SchemaSource,
    description_override: Option<&str>,
) -> Result<ToolsSchema> {
    let working = source.working_mapping()?;
    let tool = build_tool_definition(&working, description_override)?;
    debug!(
        tool = %tool.function.name,
        source = source.kind(),
        parameters = tool.function.parameters.len(),
        "built tool schema"
    );
    Ok(vec![tool])
}

/// Convert one schema mapping into a [`ToolDefinition`].
pub fn build_tool_definition(
    schema: &Map<String, Value>,
    description_override: Option<&str>,
) -> Result<ToolDefinition> {
    let name = extract_name(schema)?;
    let mut parameters = strip_key_from_map(schema, STRIPPED_KEY);

    let description = match parameters.remove(DESCRIPTION_KEY) {
        Some(Value::String(description)) => description,
        Some(other) => {
            return Err(Error::malformed_with_context(
                "schema 'description' must be a string",
                ErrorContext::new()
                    .with_field_path(DESCRIPTION_KEY)
                    .with_details(format!("got {}", json_type_name(&other)))
                    .with_source("tool_builder"),
            ))
        }
        None => description_override.unwrap_or_default().to_string(),
    };

    Ok(ToolDefinition::function(name, description, parameters))
}

fn extract_name(schema: &Map<String, Value>) -> Result<String> {
    let context = || {
        ErrorContext::new()
            .with_field_path(STRIPPED_KEY)
            .with_source("tool_builder")
    };
    match schema.get(STRIPPED_KEY) {
        Some(Value::String(name)) if !name.is_empty() => Ok(name.clone()),
        Some(Value::String(_)) => Err(Error::malformed_with_context(
            "schema 'title' must not be empty",
            context(),
        )),
        Some(other) => Err(Error::malformed_with_context(
            "schema 'title' must be a string",
            context().with_details(format!("got {}", json_type_name(other))),
        )),
        None => Err(Error::malformed_with_context(
            "schema has no 'title'",
            context(),
        )),
    }
}
