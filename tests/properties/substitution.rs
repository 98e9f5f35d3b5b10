//! Property tests for parameter file substitution.

use proptest::prelude::*;

use provisio::domain::services::substitute;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Text without `$` passes through untouched.
    #[test]
    fn property_plain_text_unchanged(input in "[^$]{0,64}") {
        let out = substitute(&input, |_| Some("X".to_string())).unwrap();
        prop_assert_eq!(out, input);
    }

    /// PROPERTY: Substitution never panics on arbitrary input.
    #[test]
    fn property_never_panics(input in ".{0,64}") {
        let _ = substitute(&input, |name| Some(name.to_lowercase()));
    }

    /// PROPERTY: A braced reference expands to the looked-up value.
    #[test]
    fn property_braced_reference_expands(
        name in "[A-Z_][A-Z0-9_]{0,15}",
        value in "[a-z0-9-]{0,16}",
    ) {
        let input = format!("{{\"v\": \"${{{}}}\"}}", name);
        let expected = format!("{{\"v\": \"{}\"}}", value);
        let out = substitute(&input, |n| (n == name).then(|| value.clone())).unwrap();
        prop_assert_eq!(out, expected);
    }
}
