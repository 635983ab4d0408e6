use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::builder::Parameters;
use crate::error::BuilderResult;

/// Rendered query text together with its parameter bindings.
///
/// Serializes to the statement shape accepted by the Neo4j transactional
/// HTTP endpoint: `{"statement": "...", "parameters": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    #[serde(rename = "statement")]
    text: String,
    #[serde(default)]
    parameters: Parameters,
}

impl Statement {
    pub fn new(text: impl Into<String>, parameters: Parameters) -> Self {
        Statement {
            text: text.into(),
            parameters,
        }
    }

    /// The query text, clauses separated by `\n`.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Values for the `$name` placeholders written into the text.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn into_parts(self) -> (String, Parameters) {
        (self.text, self.parameters)
    }

    pub fn to_json(&self) -> BuilderResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn from_json(value: Value) -> BuilderResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
