//! Config validation: unknown-key detection with edit-distance suggestions.
//!
//! The raw TOML is walked before serde sees it, so a typo such as
//! `[sever]` produces a warning pointing at `server` instead of being
//! silently ignored. Warnings never make a config fail to load.

use std::collections::HashSet;

/// A non-fatal config warning (typo, unused key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

/// Maximum edit distance for a suggestion
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Every valid dotted key path of `GlidConfig`.
///
/// Must be kept in step with the structs in `glid_config.rs`.
pub fn known_config_keys() -> HashSet<&'static str> {
    [
        "well",
        "well.name",
        "well.field",
        "server",
        "server.addr",
        "output",
        "output.format",
    ]
    .into_iter()
    .collect()
}

/// Collect dotted key paths of a TOML tree, tables included.
///
/// `{ a = { b = 1, c = 2 } }` yields `["a", "a.b", "a.c"]`.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let Some(table) = value.as_table() else {
        return Vec::new();
    };

    let mut keys = Vec::new();
    for (k, v) in table {
        let path = if prefix.is_empty() {
            k.clone()
        } else {
            format!("{prefix}.{k}")
        };
        if v.is_table() {
            let nested = walk_toml_keys(v, &path);
            keys.push(path);
            keys.extend(nested);
        } else {
            keys.push(path);
        }
    }
    keys
}

/// Levenshtein edit distance over chars.
fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diag + usize::from(ca != cb);
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diag = above;
        }
    }

    row[b_chars.len()]
}

/// Closest known key within `MAX_SUGGESTION_DISTANCE`, ties broken alphabetically.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|k| (edit_distance(unknown, k), *k))
        .filter(|(d, _)| *d <= MAX_SUGGESTION_DISTANCE)
        .min()
        .map(|(_, k)| k.to_string())
}

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// Parse errors yield no warnings; they are reported by deserialization.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let Ok(value) = raw_toml.parse::<toml::Value>() else {
        return Vec::new();
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}
