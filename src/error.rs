use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Schema key path that caused the error (e.g., "title", "properties.x")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected type, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "tool_builder", "schema_validator")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for tool schema construction and choice encoding.
///
/// Every variant is a caller-side contract violation. Schema/instance
/// mismatches found during validation are reported as
/// [`crate::validation::ValidationResult`] values instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Input contract error: provide exactly one schema source (got {provided})")]
    InputContract { provided: usize },

    #[error("Malformed schema: {message}{}", format_context(.context))]
    MalformedSchema {
        message: String,
        context: ErrorContext,
    },

    #[error("Invalid tool choice: {0}")]
    InvalidChoice(String),

    #[error("Missing tool name: a forced tool choice needs a tool schema manager with a resolved name")]
    MissingToolName,

    #[error("Schema export unavailable: validation requires a schema object source, not a raw mapping")]
    SchemaExportUnavailable,

    #[error("Invalid schema: {message}{}", format_context(.context))]
    InvalidSchema {
        message: String,
        context: ErrorContext,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new malformed-schema error with structured context
    pub fn malformed_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::MalformedSchema {
            message: msg.into(),
            context,
        }
    }

    /// Create a new invalid-schema error with structured context
    pub fn invalid_schema_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::InvalidSchema {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::MalformedSchema { context, .. } | Error::InvalidSchema { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }
}
