//! Property tests for argument normalization.

use proptest::prelude::*;

use scully_deploy::domain::value_objects::{
    normalize_build_args, normalize_scully_args, PASSTHROUGH,
};

fn arg_string() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ A-Za-z0-9_=/.-]{0,40}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: non-empty build args always start with the passthrough token.
    #[test]
    fn property_build_args_start_with_passthrough(raw in arg_string()) {
        let normalized = normalize_build_args(&raw);
        if raw.trim().is_empty() {
            prop_assert_eq!(normalized, "");
        } else {
            prop_assert!(normalized.starts_with(PASSTHROUGH), "got {normalized:?}");
        }
    }

    /// PROPERTY: build-arg normalization is idempotent.
    #[test]
    fn property_build_args_idempotent(raw in arg_string()) {
        let once = normalize_build_args(&raw);
        prop_assert_eq!(normalize_build_args(&once), once.clone());
    }

    /// PROPERTY: scully args lose exactly one leading passthrough token.
    #[test]
    fn property_scully_args_strip_one_prefix(raw in arg_string()) {
        let body = raw.trim();
        prop_assume!(!body.is_empty());
        let prefixed = format!("{PASSTHROUGH}{body}");
        prop_assert_eq!(normalize_scully_args(&prefixed), body.trim_start().to_string());
    }
}
