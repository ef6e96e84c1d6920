//! Tool choice encoding for the `tool_choice` request field.

use crate::tool::types::FUNCTION_TOOL_TYPE;
use crate::tool::ToolSchemaManager;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

/// Whether, and which, tool the model must call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolChoice {
    /// Model decides whether to call a tool
    Auto,
    /// Model must call some tool
    Required,
    /// Model must not call a tool
    None,
    /// Model must call the tool of the supplied manager
    ToolName,
}

impl ToolChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolChoice::Auto => "auto",
            ToolChoice::Required => "required",
            ToolChoice::None => "none",
            ToolChoice::ToolName => "tool_name",
        }
    }

    pub fn encode(self, manager: Option<&ToolSchemaManager>) -> Result<ToolChoiceValue> {
        encode_tool_choice(self, manager)
    }
}

impl std::fmt::Display for ToolChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ToolChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(ToolChoice::Auto),
            "required" => Ok(ToolChoice::Required),
            "none" => Ok(ToolChoice::None),
            "tool_name" => Ok(ToolChoice::ToolName),
            _ => Err(Error::InvalidChoice(s.to_string())),
        }
    }
}

/// Wire value of a tool choice: a mode string or a named function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolChoiceValue {
    Mode(String),
    Function(NamedToolChoice),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedToolChoice {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionName {
    pub name: String,
}

impl ToolChoiceValue {
    /// Force a call to the function called `name`.
    pub fn function(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::MissingToolName);
        }
        Ok(ToolChoiceValue::Function(NamedToolChoice {
            tool_type: FUNCTION_TOOL_TYPE.to_string(),
            function: FunctionName { name },
        }))
    }

    pub fn as_mode(&self) -> Option<&str> {
        match self {
            ToolChoiceValue::Mode(mode) => Some(mode.as_str()),
            ToolChoiceValue::Function(_) => None,
        }
    }

    pub fn function_name(&self) -> Option<&str> {
        match self {
            ToolChoiceValue::Mode(_) => None,
            ToolChoiceValue::Function(named) => Some(named.function.name.as_str()),
        }
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Encode `choice` into its wire value.
///
/// `ToolName` resolves the name from `manager` and fails with
/// [`Error::MissingToolName`] without one.
pub fn encode_tool_choice(
    choice: ToolChoice,
    manager: Option<&ToolSchemaManager>,
) -> Result<ToolChoiceValue> {
    let value = match choice {
        ToolChoice::Auto | ToolChoice::Required | ToolChoice::None => {
            ToolChoiceValue::Mode(choice.as_str().to_string())
        }
        ToolChoice::ToolName => {
            let manager = manager.ok_or(Error::MissingToolName)?;
            ToolChoiceValue::function(manager.tool_name())?
        }
    };
    trace!(choice = %choice, "encoded tool choice");
    Ok(value)
}

/// Parse `choice` from text and encode it.
pub fn encode_tool_choice_str(
    choice: &str,
    manager: Option<&ToolSchemaManager>,
) -> Result<ToolChoiceValue> {
    encode_tool_choice(choice.parse()?, manager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manager() -> ToolSchemaManager {
        let map = json!({"title": "Foo"}).as_object().cloned().unwrap();
        ToolSchemaManager::from_mapping(map).unwrap()
    }

    #[test]
    fn test_mode_encodings() {
        for (choice, wire) in [
            (ToolChoice::Auto, "auto"),
            (ToolChoice::Required, "required"),
            (ToolChoice::None, "none"),
        ] {
            let value = encode_tool_choice(choice, None).unwrap();
            assert_eq!(value.to_value().unwrap(), json!(wire));
            assert_eq!(value.as_mode(), Some(wire));
        }
    }

    #[test]
    fn test_modes_ignore_manager() {
        let manager = manager();
        let value = encode_tool_choice(ToolChoice::Auto, Some(&manager)).unwrap();
        assert_eq!(value, ToolChoiceValue::Mode("auto".to_string()));
    }

    #[test]
    fn test_tool_name_encoding() {
        let manager = manager();
        let value = ToolChoice::ToolName.encode(Some(&manager)).unwrap();
        assert_eq!(
            value.to_value().unwrap(),
            json!({"type": "function", "function": {"name": "Foo"}})
        );
        assert_eq!(value.function_name(), Some("Foo"));
    }

    #[test]
    fn test_tool_name_without_manager() {
        assert!(matches!(
            encode_tool_choice(ToolChoice::ToolName, None),
            Err(Error::MissingToolName)
        ));
        assert!(matches!(
            ToolChoiceValue::function(""),
            Err(Error::MissingToolName)
        ));
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!("auto".parse::<ToolChoice>().unwrap(), ToolChoice::Auto);
        assert_eq!(
            "tool_name".parse::<ToolChoice>().unwrap(),
            ToolChoice::ToolName
        );
        match "any".parse::<ToolChoice>() {
            Err(Error::InvalidChoice(text)) => assert_eq!(text, "any"),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(matches!(
            encode_tool_choice_str("AUTO", None),
            Err(Error::InvalidChoice(_))
        ));
    }

    #[test]
    fn test_serde_round_names() {
        assert_eq!(
            serde_json::to_value(ToolChoice::ToolName).unwrap(),
            json!("tool_name")
        );
        let choice: ToolChoice = serde_json::from_value(json!("required")).unwrap();
        assert_eq!(choice, ToolChoice::Required);
        assert!(serde_json::from_value::<ToolChoice>(json!("sometimes")).is_err());
    }

    #[test]
    fn test_wire_value_deserializes_both_shapes() {
        let mode: ToolChoiceValue = serde_json::from_value(json!("none")).unwrap();
        assert_eq!(mode.as_mode(), Some("none"));
        let named: ToolChoiceValue =
            serde_json::from_value(json!({"type": "function", "function": {"name": "Foo"}}))
                .unwrap();
        assert_eq!(named.function_name(), Some("Foo"));
    }
}
