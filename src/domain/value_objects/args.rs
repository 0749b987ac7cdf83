//! Free-form argument strings supplied by the workflow
//!
//! Arguments are normalized as strings first, then split into words with
//! POSIX shell rules. Their content is never interpreted.

/// Token that tells `npm run` / `yarn run` to pass what follows to the script
pub const PASSTHROUGH: &str = "-- ";

/// Normalize `build-args` so they reach the build tool, not the package manager
///
/// `""` stays empty, `"foo"` becomes `"-- foo"`, `"-- foo"` is unchanged.
pub fn normalize_build_args(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with(PASSTHROUGH) {
        trimmed.to_string()
    } else {
        format!("{}{}", PASSTHROUGH, trimmed)
    }
}

/// Normalize `scully-args` by stripping one leading `"-- "`
///
/// The generator invocation supplies its own separator.
pub fn normalize_scully_args(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix(PASSTHROUGH)
        .unwrap_or(trimmed)
        .to_string()
}

/// Split an argument string into words; `None` on unbalanced quotes
pub fn split_args(args: &str) -> Option<Vec<String>> {
    shlex::split(args)
}
