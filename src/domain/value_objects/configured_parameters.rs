//! Configured parameter set - resolved values for template parameters
//!
//! Persisted per (environment, module) as an ARM parameters document:
//!
//! ```json
//! {
//!   "$schema": "https://schema.management.azure.com/schemas/2019-04-01/deploymentParameters.json#",
//!   "contentVersion": "1.0.0.0",
//!   "parameters": { "location": { "value": "eastus" } }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

const PARAMETERS_SCHEMA: &str =
    "https://schema.management.azure.com/schemas/2019-04-01/deploymentParameters.json#";
const CONTENT_VERSION: &str = "1.0.0.0";

/// Mapping from parameter name to resolved value
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfiguredParameters {
    values: BTreeMap<String, Value>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ParameterValue {
    #[serde(default)]
    value: Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct ParametersDocument {
    #[serde(rename = "$schema", default = "default_schema")]
    schema: String,
    #[serde(rename = "contentVersion", default = "default_content_version")]
    content_version: String,
    #[serde(default)]
    parameters: BTreeMap<String, ParameterValue>,
}

fn default_schema() -> String {
    PARAMETERS_SCHEMA.to_string()
}

fn default_content_version() -> String {
    CONTENT_VERSION.to_string()
}

impl ConfiguredParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// Parse an ARM parameters document
    pub fn from_document(content: &str) -> Result<Self, serde_json::Error> {
        let doc: ParametersDocument = serde_json::from_str(content)?;
        Ok(Self {
            values: doc
                .parameters
                .into_iter()
                .map(|(name, p)| (name, p.value))
                .collect(),
        })
    }

    /// Render as a pretty-printed ARM parameters document
    pub fn to_document(&self) -> Result<String, serde_json::Error> {
        let doc = ParametersDocument {
            schema: default_schema(),
            content_version: default_content_version(),
            parameters: self
                .values
                .iter()
                .map(|(name, value)| (name.clone(), ParameterValue { value: value.clone() }))
                .collect(),
        };
        serde_json::to_string_pretty(&doc)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ConfiguredParameters {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
