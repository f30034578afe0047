use crate::error::ClassifyError;
use serde_json::Value;

/// Raw email content handed to a classifier for a single call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmailText(String);

impl EmailText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for EmailText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for EmailText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl TryFrom<&Value> for EmailText {
    type Error = ClassifyError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Self(text.clone())),
            other => Err(ClassifyError::InvalidInput {
                found: json_kind(other),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
