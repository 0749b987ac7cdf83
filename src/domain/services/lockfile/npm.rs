//! `package-lock.json` lookup

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PackageLock {
    /// lockfileVersion 2 and 3, keyed by install path
    #[serde(default)]
    packages: BTreeMap<String, PackageLockEntry>,
    /// lockfileVersion 1 and 2, keyed by package name
    #[serde(default)]
    dependencies: BTreeMap<String, PackageLockEntry>,
}

#[derive(Debug, Deserialize)]
struct PackageLockEntry {
    #[serde(default)]
    version: Option<String>,
}

/// Find the resolved version of a top-level `package`
///
/// `Err` carries the JSON parse message; `Ok(None)` means no entry.
pub fn find_version(content: &str, package: &str) -> Result<Option<String>, String> {
    let lock: PackageLock = serde_json::from_str(content).map_err(|e| e.to_string())?;

    let from_dependencies = lock
        .dependencies
        .get(package)
        .and_then(|entry| entry.version.clone());
    if from_dependencies.is_some() {
        return Ok(from_dependencies);
    }

    Ok(lock
        .packages
        .get(&format!("node_modules/{}", package))
        .and_then(|entry| entry.version.clone()))
}
