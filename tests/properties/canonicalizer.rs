//! Property tests for output canonicalization.

use std::collections::BTreeMap;

use proptest::prelude::*;
use serde_json::json;

use provisio::domain::entities::{DeploymentOutput, Template};
use provisio::domain::services::canonicalize_outputs;

fn flip_case(name: &str, mask: &[bool]) -> String {
    name.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Canonicalizing an already canonical mapping changes nothing.
    #[test]
    fn property_canonicalize_is_idempotent(
        declared in proptest::collection::btree_set("[A-Z_]{1,12}", 0..6),
        extra in proptest::collection::btree_set("[a-z]{1,8}", 0..4),
        mask in proptest::collection::vec(any::<bool>(), 1..12),
    ) {
        let mut template = Template::new();
        for name in &declared {
            template = template.with_output(name.clone(), "string");
        }

        let mut outputs = BTreeMap::new();
        for name in declared.iter().chain(extra.iter()) {
            outputs.insert(flip_case(name, &mask), DeploymentOutput::new("String", json!(name)));
        }

        let once = canonicalize_outputs(&template, &outputs);
        let twice = canonicalize_outputs(&template, &once);

        prop_assert_eq!(&once, &twice);
    }

    /// PROPERTY: Every declared output comes back under its declared name and type.
    #[test]
    fn property_declared_names_restored(
        declared in proptest::collection::btree_set("[A-Z][A-Z_]{0,11}", 1..6),
        mask in proptest::collection::vec(any::<bool>(), 1..12),
    ) {
        let mut template = Template::new();
        for name in &declared {
            template = template.with_output(name.clone(), "string");
        }

        let outputs: BTreeMap<String, DeploymentOutput> = declared
            .iter()
            .map(|name| (flip_case(name, &mask), DeploymentOutput::new("String", json!(1))))
            .collect();

        let canonical = canonicalize_outputs(&template, &outputs);

        for name in &declared {
            let kind = canonical.get(name).map(|o| o.kind.clone());
            prop_assert_eq!(kind.as_deref(), Some("string"));
        }
        prop_assert_eq!(canonical.len(), declared.len());
    }
}
