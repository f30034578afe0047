use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub const DEFAULT_TITLE: &str = "Phishing Email Detector";
pub const DEFAULT_DESCRIPTION: &str =
    "Enter an email text to check if it's phishing or legitimate.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Phishing,
    Legitimate,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Phishing => "Phishing",
            Label::Legitimate => "Legitimate",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
}

/// Describes the form the front-end renders around the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceConfig {
    pub title: String,
    pub description: String,
    pub inputs: Vec<FieldKind>,
    pub outputs: Vec<FieldKind>,
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            inputs: vec![FieldKind::Text],
            outputs: vec![FieldKind::Text],
        }
    }
}

/// `text` is kept as a raw JSON value so the server can reject non-strings
/// with a proper error instead of a generic deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub text: Value,
}

impl ClassifyRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Value::String(text.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub label: Label,
}

/// Positional request: one entry per input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub data: Vec<Value>,
}

/// Positional response: one entry per output field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub data: Vec<Label>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
