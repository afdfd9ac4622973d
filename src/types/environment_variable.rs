use serde::{Deserialize, Serialize};

use super::common::null_as_default;

/// Key/value pair exposed to checks as an environment variable
///
/// Used both as the global `/v1/variables` resource and embedded in checks
/// and groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EnvironmentVariable {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub locked: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub secret: bool,
}

impl EnvironmentVariable {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            locked: false,
            secret: false,
        }
    }

    /// Mark the variable as secret; Checkly never returns its value again
    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }
}
