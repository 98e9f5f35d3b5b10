//! Template entity - a compiled infrastructure template
//!
//! Only the parts of the compiled (ARM JSON) document that provisioning needs
//! are modelled: declared parameters and declared outputs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A declared template parameter.
///
/// The declaration is kept as the raw attribute mapping so that attributes we
/// do not interpret (`allowedValues`, `metadata`, ...) survive untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateParameter {
    attributes: Map<String, Value>,
}

impl TemplateParameter {
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self { attributes }
    }

    /// Declaration with a `defaultValue` attribute
    pub fn with_default(default_value: Value) -> Self {
        let mut attributes = Map::new();
        attributes.insert("type".to_string(), Value::String("string".to_string()));
        attributes.insert("defaultValue".to_string(), default_value);
        Self { attributes }
    }

    /// Declaration without a default
    pub fn required(kind: &str) -> Self {
        let mut attributes = Map::new();
        attributes.insert("type".to_string(), Value::String(kind.to_string()));
        Self { attributes }
    }

    pub fn has_default(&self) -> bool {
        self.attributes.contains_key("defaultValue")
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.attributes.get("defaultValue")
    }

    pub fn kind(&self) -> Option<&str> {
        self.attributes.get("type").and_then(Value::as_str)
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }
}

/// A declared template output
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TemplateOutput {
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// A compiled template: parameters and outputs metadata
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Template {
    #[serde(default)]
    pub parameters: BTreeMap<String, TemplateParameter>,
    #[serde(default)]
    pub outputs: BTreeMap<String, TemplateOutput>,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameter(mut self, name: impl Into<String>, parameter: TemplateParameter) -> Self {
        self.parameters.insert(name.into(), parameter);
        self
    }

    pub fn with_output(mut self, name: impl Into<String>, kind: impl Into<String>) -> Self {
        self.outputs
            .insert(name.into(), TemplateOutput { kind: kind.into() });
        self
    }

    /// Parameters that must be supplied (no `defaultValue` declared)
    pub fn required_parameters(&self) -> impl Iterator<Item = (&String, &TemplateParameter)> {
        self.parameters.iter().filter(|(_, p)| !p.has_default())
    }

    /// Parse a compiled ARM JSON document
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPILED: &str = r#"{
        "$schema": "https://schema.management.azure.com/schemas/2018-05-01/subscriptionDeploymentTemplate.json#",
        "contentVersion": "1.0.0.0",
        "parameters": {
            "name": { "type": "string", "minLength": 1 },
            "location": { "type": "string" },
            "dbName": { "type": "string", "defaultValue": "app" }
        },
        "resources": [],
        "outputs": {
            "WEBSITE_URL": { "type": "string", "value": "[reference('web').outputs.uri.value]" }
        }
    }"#;

    #[test]
    fn parses_parameters_and_outputs() {
        let template = Template::from_json(COMPILED).unwrap();

        assert_eq!(template.parameters.len(), 3);
        assert!(template.parameters["dbName"].has_default());
        assert!(!template.parameters["location"].has_default());
        assert_eq!(template.parameters["name"].attributes()["minLength"], 1);
        assert_eq!(template.outputs["WEBSITE_URL"].kind, "string");
    }

    #[test]
    fn required_parameters_skip_defaults() {
        let template = Template::from_json(COMPILED).unwrap();
        let required: Vec<_> = template.required_parameters().map(|(n, _)| n.as_str()).collect();
        assert_eq!(required, vec!["location", "name"]);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let template = Template::from_json("{}").unwrap();
        assert!(template.parameters.is_empty());
        assert!(template.outputs.is_empty());
    }
}
