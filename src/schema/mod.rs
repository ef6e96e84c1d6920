//! Schema sources and schema rewriting.
//!
//! A tool is described either by a schema object (anything that can export
//! itself as a JSON schema, typically a `schemars::JsonSchema` type) or by a
//! raw JSON mapping. [`SchemaSource`] holds exactly one of the two.

pub mod rewrite;

pub use rewrite::{strip_key, strip_key_from_map};

use crate::{Error, ErrorContext, Result};
use schemars::schema::RootSchema;
use schemars::JsonSchema;
use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Schema-export operation of a schema object.
pub trait SchemaExport: Send + Sync {
    /// Export the full JSON schema, including the root `title`.
    fn export_schema(&self) -> Result<Value>;

    /// Human-readable name used in logs.
    fn type_name(&self) -> &str {
        "schema"
    }
}

impl SchemaExport for RootSchema {
    fn export_schema(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

struct TypeSchema<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T: JsonSchema> SchemaExport for TypeSchema<T> {
    fn export_schema(&self) -> Result<Value> {
        json_schema_from_type::<T>()
    }

    fn type_name(&self) -> &str {
        std::any::type_name::<T>()
    }
}

/// Generate the JSON schema for a `schemars` type.
pub fn json_schema_from_type<T: JsonSchema>() -> Result<Value> {
    let schema = schemars::schema_for!(T);
    Ok(serde_json::to_value(&schema)?)
}

/// Shared handle to a schema object.
#[derive(Clone)]
pub struct SchemaObject {
    inner: Arc<dyn SchemaExport>,
}

impl SchemaObject {
    pub fn new(export: impl SchemaExport + 'static) -> Self {
        Self {
            inner: Arc::new(export),
        }
    }

    /// Schema object backed by the `schemars` derivation of `T`.
    pub fn of<T: JsonSchema + 'static>() -> Self {
        Self::new(TypeSchema::<T> {
            _marker: PhantomData,
        })
    }

    pub fn type_name(&self) -> &str {
        self.inner.type_name()
    }

    /// Export the schema and require it to be a JSON object.
    pub fn export(&self) -> Result<Map<String, Value>> {
        match self.inner.export_schema()? {
            Value::Object(map) => Ok(map),
            other => Err(Error::malformed_with_context(
                "schema export did not produce a JSON object",
                ErrorContext::new()
                    .with_details(format!("got {}", json_type_name(&other)))
                    .with_source(self.type_name().to_string()),
            )),
        }
    }
}

impl fmt::Debug for SchemaObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SchemaObject").field(&self.type_name()).finish()
    }
}

/// Where a tool schema comes from.
#[derive(Debug, Clone)]
pub enum SchemaSource {
    /// A schema object that can re-export its schema on demand.
    Object(SchemaObject),
    /// A raw schema mapping supplied directly.
    Mapping(Map<String, Value>),
}

impl SchemaSource {
    pub fn of<T: JsonSchema + 'static>() -> Self {
        SchemaSource::Object(SchemaObject::of::<T>())
    }

    /// Build a source from two optional inputs, exactly one of which must be set.
    pub fn from_parts(
        object: Option<SchemaObject>,
        mapping: Option<Map<String, Value>>,
    ) -> Result<Self> {
        match (object, mapping) {
            (Some(object), None) => Ok(SchemaSource::Object(object)),
            (None, Some(mapping)) => Ok(SchemaSource::Mapping(mapping)),
            (None, None) => Err(Error::InputContract { provided: 0 }),
            (Some(_), Some(_)) => Err(Error::InputContract { provided: 2 }),
        }
    }

    /// Raw mapping source from any JSON value; non-objects are rejected.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(SchemaSource::Mapping(map)),
            other => Err(Error::malformed_with_context(
                "raw schema must be a JSON object",
                ErrorContext::new().with_details(format!("got {}", json_type_name(&other))),
            )),
        }
    }

    /// The working mapping: the exported schema for objects, a copy of the mapping otherwise.
    pub fn working_mapping(&self) -> Result<Map<String, Value>> {
        match self {
            SchemaSource::Object(object) => object.export(),
            SchemaSource::Mapping(map) => Ok(map.clone()),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SchemaSource::Object(_) => "object",
            SchemaSource::Mapping(_) => "mapping",
        }
    }

    pub fn as_object(&self) -> Option<&SchemaObject> {
        match self {
            SchemaSource::Object(object) => Some(object),
            SchemaSource::Mapping(_) => None,
        }
    }
}

impl From<SchemaObject> for SchemaSource {
    fn from(object: SchemaObject) -> Self {
        SchemaSource::Object(object)
    }
}

impl From<Map<String, Value>> for SchemaSource {
    fn from(map: Map<String, Value>) -> Self {
        SchemaSource::Mapping(map)
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
