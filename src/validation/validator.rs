//! Instance validation against exported tool schemas using JSON Schema.

use crate::validation::error::{ValidationError, ValidationResult};
use crate::{Error, ErrorContext, Result};
use jsonschema::{Draft, JSONSchema};
use serde_json::Value;
use tracing::debug;

/// Draft used when the caller does not pick one.
pub const DEFAULT_DRAFT: Draft = Draft::Draft7;

/// Compiled JSON Schema validator for tool answers.
pub struct SchemaValidator {
    schema: JSONSchema,
}

impl SchemaValidator {
    /// Compile `schema` with the default draft.
    pub fn new(schema: &Value) -> Result<Self> {
        Self::with_draft(schema, DEFAULT_DRAFT)
    }

    pub fn with_draft(schema: &Value, draft: Draft) -> Result<Self> {
        let schema = JSONSchema::options()
            .with_draft(draft)
            .compile(schema)
            .map_err(|e| {
                Error::invalid_schema_with_context(
                    format!("failed to compile schema: {}", e),
                    ErrorContext::new()
                        .with_field_path(e.schema_path.to_string())
                        .with_source("schema_validator"),
                )
            })?;
        Ok(Self { schema })
    }

    /// Validate `instance`, reporting every mismatch as a value.
    pub fn validate(&self, instance: &Value) -> ValidationResult {
        match self.schema.validate(instance) {
            Ok(()) => ValidationResult::success(instance.clone()),
            Err(errors) => {
                let errors: Vec<ValidationError> = errors
                    .map(|e| {
                        ValidationError::new(
                            e.to_string(),
                            Some(e.instance_path.to_string()),
                            Some(e.instance.clone().into_owned()),
                        )
                        .schema_path(e.schema_path.to_string())
                    })
                    .collect();
                debug!(errors = errors.len(), "instance failed schema validation");
                ValidationResult::failure(errors)
            }
        }
    }

    pub fn is_valid(&self, instance: &Value) -> bool {
        self.schema.is_valid(instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> Value {
        json!({
            "title": "Foo",
            "type": "object",
            "properties": {"x": {"type": "string"}},
            "required": ["x"]
        })
    }

    #[test]
    fn test_valid_instance() {
        let validator = SchemaValidator::new(&schema()).unwrap();
        let result = validator.validate(&json!({"x": "hi"}));
        assert!(result.is_valid());
        assert_eq!(result.data(), Some(&json!({"x": "hi"})));
        assert!(validator.is_valid(&json!({"x": "hi"})));
    }

    #[test]
    fn test_type_mismatch_reports_path_and_value() {
        let validator = SchemaValidator::new(&schema()).unwrap();
        let result = validator.validate(&json!({"x": 5}));
        assert!(!result.is_valid());
        let error = result.first_error().unwrap();
        assert_eq!(error.path.as_deref(), Some("/x"));
        assert_eq!(error.value, Some(json!(5)));
        assert_eq!(error.schema_path.as_deref(), Some("/properties/x/type"));
        assert!(error.message.contains("string"));
    }

    #[test]
    fn test_missing_required_property() {
        let validator = SchemaValidator::new(&schema()).unwrap();
        let result = validator.validate(&json!({}));
        assert!(!result.is_valid());
        assert!(result.error_messages()[0].contains("\"x\""));
    }

    #[test]
    fn test_invalid_schema_is_an_error() {
        let result = SchemaValidator::new(&json!({"type": 12}));
        assert!(matches!(result, Err(Error::InvalidSchema { .. })));
    }
}
