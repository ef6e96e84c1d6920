//! Immutable aggregate binding a schema source to its tool descriptor.

use crate::schema::{SchemaObject, SchemaSource};
use crate::tool::builder::build_tools_schema;
use crate::tool::types::{ToolDefinition, ToolsSchema};
use crate::validation::{SchemaValidator, ValidationResult, DEFAULT_DRAFT};
use crate::{Error, Result};
use jsonschema::Draft;
use schemars::JsonSchema;
use serde_json::{Map, Value};
use tracing::debug;

/// A schema source together with the tool list derived from it.
///
/// The tool list and name are computed once, at construction, and never change.
///
/// ```
/// use ai_tool_schema::{SchemaSource, ToolSchemaManager};
/// use serde_json::json;
///
/// let source = SchemaSource::from_value(json!({
///     "title": "get_weather",
///     "type": "object",
///     "properties": {"city": {"type": "string"}}
/// })).unwrap();
///
/// let manager = ToolSchemaManager::new(source).unwrap();
/// assert_eq!(manager.tool_name(), "get_weather");
/// assert_eq!(manager.tools_schema().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ToolSchemaManager {
    source: SchemaSource,
    description: String,
    draft: Draft,
    tools_schema: ToolsSchema,
    tool_name: String,
}

impl ToolSchemaManager {
    pub fn new(source: SchemaSource) -> Result<Self> {
        Self::builder().source(source).build()
    }

    /// Build with a fallback description, used only when the schema has none.
    pub fn with_description(source: SchemaSource, description: impl Into<String>) -> Result<Self> {
        Self::builder().source(source).description(description).build()
    }

    pub fn from_type<T: JsonSchema + 'static>() -> Result<Self> {
        Self::new(SchemaSource::of::<T>())
    }

    pub fn from_mapping(schema: Map<String, Value>) -> Result<Self> {
        Self::new(SchemaSource::Mapping(schema))
    }

    pub fn builder() -> ToolSchemaManagerBuilder {
        ToolSchemaManagerBuilder::new()
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tools_schema(&self) -> &ToolsSchema {
        &self.tools_schema
    }

    /// The single tool definition.
    pub fn tool(&self) -> &ToolDefinition {
        &self.tools_schema[0]
    }

    pub fn source(&self) -> &SchemaSource {
        &self.source
    }

    /// The description passed at construction (empty if none).
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn draft(&self) -> Draft {
        self.draft
    }

    /// Wire JSON for the request `tools` field.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(&self.tools_schema)?)
    }

    /// Validate a tool answer against the full schema of the held schema object.
    ///
    /// Mismatches come back as an invalid [`ValidationResult`]. Managers built
    /// from a raw mapping have no exporter and fail with
    /// [`Error::SchemaExportUnavailable`].
    pub fn validate(&self, instance: &Value) -> Result<ValidationResult> {
        let object = self
            .source
            .as_object()
            .ok_or(Error::SchemaExportUnavailable)?;
        let schema = Value::Object(object.export()?);
        let result = SchemaValidator::with_draft(&schema, self.draft)?.validate(instance);
        debug!(
            tool = %self.tool_name,
            valid = result.is_valid(),
            "validated tool answer"
        );
        Ok(result)
    }
}

/// Builder for [`ToolSchemaManager`].
///
/// Accepts the schema object and raw mapping as separate optional inputs;
/// [`build`](Self::build) requires exactly one of them.
#[derive(Debug, Default)]
pub struct ToolSchemaManagerBuilder {
    object: Option<SchemaObject>,
    raw_schema: Option<Map<String, Value>>,
    description: Option<String>,
    draft: Option<Draft>,
}

impl ToolSchemaManagerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(self, source: SchemaSource) -> Self {
        match source {
            SchemaSource::Object(object) => self.schema_object(object),
            SchemaSource::Mapping(map) => self.raw_schema(map),
        }
    }

    pub fn schema_object(mut self, object: SchemaObject) -> Self {
        self.object = Some(object);
        self
    }

    pub fn schema_type<T: JsonSchema + 'static>(self) -> Self {
        self.schema_object(SchemaObject::of::<T>())
    }

    pub fn raw_schema(mut self, schema: Map<String, Value>) -> Self {
        self.raw_schema = Some(schema);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// JSON Schema draft used by [`ToolSchemaManager::validate`].
    pub fn draft(mut self, draft: Draft) -> Self {
        self.draft = Some(draft);
        self
    }

    pub fn build(self) -> Result<ToolSchemaManager> {
        let source = SchemaSource::from_parts(self.object, self.raw_schema)?;
        let description = self.description.unwrap_or_default();
        let tools_schema = build_tools_schema(&source, Some(description.as_str()))?;
        let tool_name = tools_schema[0].function.name.clone();
        Ok(ToolSchemaManager {
            source,
            description,
            draft: self.draft.unwrap_or(DEFAULT_DRAFT),
            tools_schema,
            tool_name,
        })
    }
}
