//! Property tests for the no-watch version gate.

use proptest::prelude::*;
use semver::Version;

use scully_deploy::domain::policies::{needs_no_watch_flag, NO_WATCH_MAX_VERSION};

proptest! {
    /// PROPERTY: the flag is needed exactly for versions at or below 0.0.85.
    #[test]
    fn property_gate_matches_ordering(major in 0u64..3, minor in 0u64..3, patch in 0u64..200) {
        let version = Version::new(major, minor, patch);
        prop_assert_eq!(needs_no_watch_flag(&version), version <= NO_WATCH_MAX_VERSION);
    }

    /// PROPERTY: any pre-release of 0.0.85 still needs the flag.
    #[test]
    fn property_prerelease_of_threshold_needs_flag(tag in "[a-z]{1,8}(\\.[1-9][0-9]{0,2})?") {
        let version = Version::parse(&format!("0.0.85-{}", tag)).unwrap();
        prop_assert!(needs_no_watch_flag(&version));
    }
}
