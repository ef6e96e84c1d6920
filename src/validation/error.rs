//! Value types reporting schema/instance mismatches.

use std::fmt;

/// Validation error with location information.
///
/// Contains details about what failed and where in the data structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error message describing what was expected and what was found
    pub message: String,
    /// JSON pointer to the error location in the instance (e.g., "/x", "/items/0")
    pub path: Option<String>,
    /// JSON pointer to the schema keyword that failed (e.g., "/properties/x/type")
    pub schema_path: Option<String>,
    /// The invalid value that caused the error
    pub value: Option<serde_json::Value>,
}

impl ValidationError {
    /// Create a new validation error.
    ///
    /// # Arguments
    ///
    /// * `message` - Error description
    /// * `path` - Optional JSON pointer to the error location
    /// * `value` - Optional invalid value
    pub fn new(
        message: impl Into<String>,
        path: Option<String>,
        value: Option<serde_json::Value>,
    ) -> Self {
        Self {
            message: message.into(),
            path,
            schema_path: None,
            value,
        }
    }

    /// Create an error with a path.
    pub fn with_path(message: impl Into<String>, path: String) -> Self {
        Self::new(message, Some(path), None)
    }

    /// Create an error without path.
    pub fn without_path(message: impl Into<String>) -> Self {
        Self::new(message, None, None)
    }

    pub fn schema_path(mut self, schema_path: impl Into<String>) -> Self {
        self.schema_path = Some(schema_path.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path.as_deref() {
            Some(path) if !path.is_empty() => write!(f, "{}: {}", path, self.message),
            _ => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result of validation operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Whether validation passed
    pub valid: bool,
    /// List of validation errors (empty if valid)
    pub errors: Vec<ValidationError>,
    /// Validated data (None if invalid)
    pub data: Option<serde_json::Value>,
}

impl ValidationResult {
    /// Create a successful validation result.
    pub fn success(data: serde_json::Value) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            data: Some(data),
        }
    }

    /// Create a failed validation result.
    pub fn failure(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: false,
            errors,
            data: None,
        }
    }

    /// Check if validation passed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Get the validated data.
    ///
    /// Returns None if validation failed.
    pub fn data(&self) -> Option<&serde_json::Value> {
        self.data.as_ref()
    }

    /// First reported error, if any.
    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Get errors as formatted strings.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// Convert to Result, returning all errors if invalid.
    pub fn into_result(self) -> Result<serde_json::Value, Vec<ValidationError>> {
        if self.valid {
            Ok(self.data.unwrap_or(serde_json::Value::Null))
        } else {
            Err(self.errors)
        }
    }
}

impl From<ValidationError> for ValidationResult {
    fn from(error: ValidationError) -> Self {
        Self::failure(vec![error])
    }
}

impl From<Vec<ValidationError>> for ValidationResult {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::failure(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_without_path() {
        let error = ValidationError::without_path("Invalid type");
        assert_eq!(error.to_string(), "Invalid type");
        assert!(error.path.is_none());
    }

    #[test]
    fn test_validation_error_display_with_path() {
        let error = ValidationError::with_path("5 is not of type \"string\"", "/x".to_string())
            .schema_path("/properties/x/type");
        assert_eq!(error.to_string(), "/x: 5 is not of type \"string\"");
        assert_eq!(error.schema_path.as_deref(), Some("/properties/x/type"));
    }

    #[test]
    fn test_root_path_is_not_prefixed() {
        let error = ValidationError::with_path("bad root", String::new());
        assert_eq!(error.to_string(), "bad root");
    }

    #[test]
    fn test_validation_result_success() {
        let data = serde_json::json!({"x": "hi"});
        let result = ValidationResult::success(data.clone());

        assert!(result.is_valid());
        assert_eq!(result.data(), Some(&data));
        assert!(result.first_error().is_none());
    }

    #[test]
    fn test_validation_result_into_result_failure() {
        let errors = vec![ValidationError::without_path("Test error")];
        let result: ValidationResult = errors.clone().into();

        assert!(!result.is_valid());
        assert_eq!(result.error_messages(), vec!["Test error".to_string()]);
        assert_eq!(result.into_result(), Err(errors));
    }
}
