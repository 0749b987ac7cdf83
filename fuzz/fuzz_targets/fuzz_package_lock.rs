#![no_main]

use libfuzzer_sys::fuzz_target;
use scully_deploy::domain::services::lockfile::find_npm_version;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz package-lock.json lookup - this should never panic
        let _ = find_npm_version(content, "@scullyio/scully");
    }
});
