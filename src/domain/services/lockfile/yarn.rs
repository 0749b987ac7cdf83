//! `yarn.lock` lookup
//!
//! Handles both layouts:
//!
//! ```text
//! "@scullyio/scully@^0.0.85", "@scullyio/scully@~0.0.80":     # classic (v1)
//!   version "0.0.85"
//!
//! "@scullyio/scully@npm:^1.0.0":                               # Berry
//!   version: 1.0.0
//! ```
//!
//! Berry lock files are YAML and go through `serde_yaml_ng`; classic lock
//! files are not YAML and are read line by line.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_yaml_ng::Value;

/// One top-level block of the lock file
#[derive(Debug, Clone, PartialEq, Eq)]
struct LockEntry {
    descriptors: Vec<String>,
    version: Option<String>,
}

/// Indentation of an entry's own fields
const FIELD_INDENT: usize = 2;

/// Top-level key Berry writes ahead of the package entries
const BERRY_METADATA: &str = "__metadata";

/// Fields of a Berry entry this lookup reads
#[derive(Debug, Deserialize)]
struct BerryEntry {
    #[serde(default)]
    version: Option<Value>,
}

/// Package name of a descriptor such as `@scope/pkg@^1.0.0` or `pkg@npm:1.0.0`
pub fn descriptor_name(descriptor: &str) -> &str {
    // A leading '@' belongs to the scope, not the range separator
    let start = usize::from(descriptor.starts_with('@'));
    match descriptor[start..].find('@') {
        Some(idx) => &descriptor[..start + idx],
        None => descriptor,
    }
}

fn is_berry(content: &str) -> bool {
    content
        .lines()
        .any(|line| line.trim_end().strip_suffix(':') == Some(BERRY_METADATA))
}

fn parse_berry(content: &str) -> Result<Vec<LockEntry>, String> {
    let entries: BTreeMap<String, BerryEntry> =
        serde_yaml_ng::from_str(content).map_err(|e| e.to_string())?;
    Ok(entries
        .into_iter()
        .filter(|(key, _)| key != BERRY_METADATA)
        .map(|(key, entry)| LockEntry {
            descriptors: split_header(&key),
            version: entry.version.as_ref().and_then(scalar_string),
        })
        .collect())
}

/// Unquoted scalar; an unquoted `1.0` comes back from YAML as a number
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_classic(content: &str) -> Result<Vec<LockEntry>, String> {
    let mut entries = Vec::new();
    let mut current: Option<LockEntry> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim_end();
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let indent = line.len() - trimmed.len();
        if indent == 0 {
            let header = trimmed.strip_suffix(':').ok_or_else(|| {
                format!("line {}: expected an entry header ending in ':'", idx + 1)
            })?;
            if let Some(entry) = current.take() {
                entries.push(entry);
            }
            current = Some(LockEntry {
                descriptors: split_header(header),
                version: None,
            });
            continue;
        }

        let entry = current
            .as_mut()
            .ok_or_else(|| format!("line {}: field outside of any entry", idx + 1))?;
        if indent == FIELD_INDENT {
            if let Some(version) = field_value(trimmed, "version") {
                entry.version = Some(version);
            }
        }
    }

    entries.extend(current);
    Ok(entries)
}

/// `"a@1", "a@2"` (classic) or `"a@npm:1, a@npm:2"` (Berry)
fn split_header(header: &str) -> Vec<String> {
    header
        .split(',')
        .map(|d| d.trim().trim_matches('"').to_string())
        .filter(|d| !d.is_empty())
        .collect()
}

/// Value of a classic `key "value"` line
fn field_value(line: &str, key: &str) -> Option<String> {
    let rest = line.strip_prefix(key)?;
    if !rest.starts_with(' ') {
        return None;
    }
    Some(rest.trim().trim_matches('"').to_string())
}

/// Find the resolved version of `package`
///
/// `Err` carries a parse message; `Ok(None)` means no entry.
pub fn find_version(content: &str, package: &str) -> Result<Option<String>, String> {
    let entries = if is_berry(content) {
        parse_berry(content)?
    } else {
        parse_classic(content)?
    };
    Ok(entries
        .into_iter()
        .find(|entry| {
            entry
                .descriptors
                .iter()
                .any(|d| descriptor_name(d) == package)
        })
        .and_then(|entry| entry.version))
}
