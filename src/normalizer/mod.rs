use std::collections::HashMap;

use serde_json::Value;

use crate::config::settings::NormalizerSettings;

/// Identity assigned when a name field is missing or not a string.
pub const UNKNOWN_PLAYER: &str = "Unknown";

/// Normalization policy applied to incoming player names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeMode {
    /// Collapse known spelling variants through the alias table and
    /// title-case everything else.
    Aliases,
    /// Trust the source: names arrive canonical and pass through trimmed.
    Identity,
}

/// Maps raw player-name values to canonical identities
///
/// Built once from configuration. Downstream components only ever see the
/// output, so the alias policy can change without touching them.
#[derive(Debug, Clone)]
pub struct NameNormalizer {
    mode: NormalizeMode,
    aliases: HashMap<String, String>,
}

impl NameNormalizer {
    pub fn from_settings(settings: &NormalizerSettings) -> Self {
        let aliases = settings
            .aliases
            .iter()
            .map(|entry| (lookup_key(entry.variant), entry.canonical.to_string()))
            .collect();
        Self {
            mode: settings.mode,
            aliases,
        }
    }

    /// Resolve a raw field value to a canonical display name.
    ///
    /// Non-string values become [`UNKNOWN_PLAYER`] rather than an error; the
    /// parser decides what to do with records carrying one.
    pub fn normalize(&self, raw: &Value) -> String {
        let Some(name) = raw.as_str() else {
            return UNKNOWN_PLAYER.to_string();
        };
        match self.mode {
            NormalizeMode::Identity => name.trim().to_string(),
            NormalizeMode::Aliases => self.resolve(name),
        }
    }

    fn resolve(&self, name: &str) -> String {
        match self.aliases.get(&lookup_key(name)) {
            Some(canonical) => canonical.clone(),
            None => title_case(name),
        }
    }
}

/// Lower-cased, whitespace-free form used as the alias lookup key.
fn lookup_key(name: &str) -> String {
    name.split_whitespace().collect::<String>().to_lowercase()
}

/// First letter of each word upper-cased, the rest lowered.
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str().to_lowercase()),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
