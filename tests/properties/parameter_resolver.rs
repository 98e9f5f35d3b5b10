//! Property tests for parameter resolution.

use std::cell::Cell;
use std::collections::BTreeSet;

use proptest::prelude::*;
use serde_json::{json, Value};

use provisio::domain::entities::{Environment, Template, TemplateParameter};
use provisio::domain::ports::{PromptError, Prompter};
use provisio::domain::services::ParameterResolver;
use provisio::domain::value_objects::ConfiguredParameters;
use provisio::ProvisionError;

/// Prompter that counts calls and refuses all of them
#[derive(Default)]
struct CountingPrompter {
    calls: Cell<usize>,
}

impl CountingPrompter {
    fn refuse(&self) -> PromptError {
        self.calls.set(self.calls.get() + 1);
        PromptError::new("unexpected prompt")
    }
}

impl Prompter for CountingPrompter {
    fn ask_input(&self, _message: &str, _default: Option<&str>) -> Result<String, PromptError> {
        Err(self.refuse())
    }

    fn ask_confirm(&self, _message: &str, _default: bool) -> Result<bool, PromptError> {
        Err(self.refuse())
    }

    fn ask_select(
        &self,
        _message: &str,
        _items: &[String],
        _default: usize,
    ) -> Result<usize, PromptError> {
        Err(self.refuse())
    }
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,11}"
}

fn template_from(required: &BTreeSet<String>, defaulted: &BTreeSet<String>) -> Template {
    let mut template = Template::new();
    for name in defaulted {
        template =
            template.with_parameter(name.clone(), TemplateParameter::with_default(json!("x")));
    }
    // Required entries replace defaulted ones with the same name.
    for name in required {
        template = template.with_parameter(name.clone(), TemplateParameter::required("string"));
    }
    template
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: When every required parameter already has a configured value,
    /// resolution never prompts and reports nothing updated.
    #[test]
    fn property_configured_parameters_never_prompt(
        required in proptest::collection::btree_set(name_strategy(), 0..8),
        defaulted in proptest::collection::btree_set(name_strategy(), 0..4),
        interactive in any::<bool>(),
    ) {
        let template = template_from(&required, &defaulted);
        let mut existing = ConfiguredParameters::new();
        for name in &required {
            existing.insert(name.clone(), json!(format!("value-{}", name)));
        }

        let prompter = CountingPrompter::default();
        let resolver = ParameterResolver::new(&prompter, interactive);
        let mut env = Environment::new("dev");
        let before = env.clone();

        let resolution = resolver.resolve(&template, existing.clone(), &mut env).unwrap();

        prop_assert_eq!(prompter.calls.get(), 0);
        prop_assert!(!resolution.updated);
        prop_assert_eq!(resolution.parameters, existing);
        prop_assert_eq!(env, before);
    }

    /// PROPERTY: Without prompting, the first unconfigured required parameter
    /// (in name order) is reported as missing.
    #[test]
    fn property_non_interactive_reports_first_missing(
        required in proptest::collection::btree_set(name_strategy(), 1..8),
        configured_mask in proptest::collection::vec(any::<bool>(), 8),
    ) {
        let template = template_from(&required, &BTreeSet::new());
        let mut existing = ConfiguredParameters::new();
        for (name, configured) in required.iter().zip(configured_mask.iter()) {
            if *configured {
                existing.insert(name.clone(), Value::String("v".to_string()));
            }
        }

        let expected = required.iter().find(|name| !existing.contains(name)).cloned();

        let prompter = CountingPrompter::default();
        let resolver = ParameterResolver::new(&prompter, false);
        let mut env = Environment::new("dev");
        let result = resolver.resolve(&template, existing, &mut env);

        prop_assert_eq!(prompter.calls.get(), 0);
        match expected {
            Some(name) => {
                let is_missing = matches!(
                    &result,
                    Err(ProvisionError::MissingParameter { name: missing }) if *missing == name
                );
                prop_assert!(is_missing);
            }
            None => prop_assert!(result.is_ok()),
        }
    }
}
