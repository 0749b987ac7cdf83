//! Package manager value object

use std::fmt;

/// Lock file whose presence selects Yarn
pub const YARN_LOCKFILE: &str = "yarn.lock";

/// Lock file read when npm is in use
pub const NPM_LOCKFILE: &str = "package-lock.json";

/// Package manager used to install, build and run the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Yarn,
    Npm,
}

impl PackageManager {
    /// Choose the package manager from the outcome of the `yarn.lock` existence check
    pub fn detect(yarn_lock_present: bool) -> Self {
        if yarn_lock_present {
            PackageManager::Yarn
        } else {
            PackageManager::Npm
        }
    }

    /// Executable name
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        }
    }

    /// Arguments for a locked install that fails on manifest drift
    pub fn install_args(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Yarn => &["install", "--frozen-lockfile"],
            PackageManager::Npm => &["ci"],
        }
    }

    /// Lock file the generator version is resolved from
    pub fn lockfile_name(&self) -> &'static str {
        match self {
            PackageManager::Yarn => YARN_LOCKFILE,
            PackageManager::Npm => NPM_LOCKFILE,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}
