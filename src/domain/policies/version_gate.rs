//! Generator compatibility policy
//!
//! Scully releases up to and including 0.0.85 watch the file system unless
//! told otherwise, which never terminates in CI. Those releases need `--nw`.

use semver::{BuildMetadata, Version};

/// Legacy "no watch" flag understood by old Scully releases
pub const NO_WATCH_FLAG: &str = "--nw";

/// Newest generator version that still needs [`NO_WATCH_FLAG`]
pub const NO_WATCH_MAX_VERSION: Version = Version::new(0, 0, 85);

/// True when `version <= 0.0.85` under semver precedence
///
/// Pre-releases sort before their release, so `0.0.85-beta` also needs the flag.
pub fn needs_no_watch_flag(version: &Version) -> bool {
    // Build metadata takes no part in precedence
    let mut version = version.clone();
    version.build = BuildMetadata::EMPTY;
    version <= NO_WATCH_MAX_VERSION
}

/// Prepend [`NO_WATCH_FLAG`] to normalized generator arguments when required
pub fn apply_no_watch_flag(mut args: Vec<String>, version: &Version) -> Vec<String> {
    if needs_no_watch_flag(version) {
        args.insert(0, NO_WATCH_FLAG.to_string());
    }
    args
}
