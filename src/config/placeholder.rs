//! Placeholder substitution for configuration strings.
//!
//! Configuration values may embed `{name}` tokens that are resolved at
//! provisioning time. Resolution is a pure function over a lookup map the
//! caller supplies; nothing ambient or global is consulted.

use std::collections::HashMap;

/// Substitute `{name}` tokens in `template` with values from `lookup`.
///
/// A token whose name is absent from the map is replaced with the empty
/// string. An opening brace with no closing brace is copied through
/// literally. The function is idempotent once no tokens remain.
///
/// # Arguments
/// * `template` - The string to resolve
/// * `lookup` - Map of placeholder names to their values
///
/// # Returns
/// The resolved string
pub fn resolve(template: &str, lookup: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                if let Some(value) = lookup.get(name) {
                    out.push_str(value);
                }
                // unknown names resolve to the empty string
                rest = &after[end + 1..];
            }
            None => {
                // unterminated token, keep the remainder as-is
                out.push('{');
                out.push_str(after);
                return out;
            }
        }
    }

    out.push_str(rest);
    out
}

/// A placeholder lookup built by the caller and passed into provisioning.
///
/// The composition root decides which names are resolvable; providers only
/// ever see the finished map. [`Replacer::from_env`] exposes process
/// environment variables under `env.`-prefixed names, so configuration can
/// reference `{env.HOME}` and friends.
#[derive(Debug, Clone, Default)]
pub struct Replacer {
    vars: HashMap<String, String>,
}

impl Replacer {
    /// Create an empty replacer; every token resolves to the empty string
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a replacer exposing the process environment as `{env.NAME}`
    pub fn from_env() -> Self {
        let vars = std::env::vars()
            .map(|(key, value)| (format!("env.{}", key), value))
            .collect();
        Self { vars }
    }

    /// Add or overwrite a placeholder value
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) -> &mut Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Resolve all `{name}` tokens in `template` against this replacer
    pub fn replace_all(&self, template: &str) -> String {
        resolve(template, &self.vars)
    }
}
