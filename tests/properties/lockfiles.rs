//! Property tests for the lock file parsers.

use proptest::prelude::*;

use scully_deploy::domain::services::lockfile::{
    descriptor_name, find_npm_version, find_yarn_version,
};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,12}").unwrap()
}

fn package_name() -> impl Strategy<Value = String> {
    (proptest::option::of(segment()), segment()).prop_map(|(scope, name)| match scope {
        Some(scope) => format!("@{}/{}", scope, name),
        None => name,
    })
}

fn version() -> impl Strategy<Value = String> {
    (0u32..20, 0u32..20, 0u32..200).prop_map(|(a, b, c)| format!("{}.{}.{}", a, b, c))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the yarn parser never panics on arbitrary input.
    #[test]
    fn property_yarn_parser_never_panics(content in "\\PC{0,200}") {
        let _ = find_yarn_version(&content, "@scullyio/scully");
    }

    /// PROPERTY: the npm parser never panics on arbitrary input.
    #[test]
    fn property_npm_parser_never_panics(content in "\\PC{0,200}") {
        let _ = find_npm_version(&content, "@scullyio/scully");
    }

    /// PROPERTY: descriptor names strip the range, keeping any scope.
    #[test]
    fn property_descriptor_name_strips_range(name in package_name(), range in version()) {
        let descriptor = format!("{}@^{}", name, range);
        prop_assert_eq!(descriptor_name(&descriptor), name.as_str());
        let berry = format!("{}@npm:{}", name, range);
        prop_assert_eq!(descriptor_name(&berry), name.as_str());
    }

    /// PROPERTY: a classic yarn entry is found by its exact name.
    #[test]
    fn property_yarn_entry_found(name in package_name(), v in version()) {
        let lock = format!("\"{name}@^{v}\":\n  version \"{v}\"\n");
        prop_assert_eq!(find_yarn_version(&lock, &name).unwrap(), Some(v));
    }
}
