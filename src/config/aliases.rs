/// Alias configuration for player-name cleanup
///
/// Form submissions spell the same player several ways. Each entry maps one
/// observed variant to the official display name. Variants may be written
/// naturally (spaces, any casing); lookups normalize both sides the same
/// way, so "Srikanth K", "srikanthk" and "SRIKANTH K" all hit one entry.
#[derive(Debug, Clone)]
pub struct AliasEntry {
    pub variant: &'static str,
    pub canonical: &'static str,
}

impl AliasEntry {
    pub fn new(variant: &'static str, canonical: &'static str) -> Self {
        Self { variant, canonical }
    }
}

/// Get the list of known spelling variants and their official names
///
/// Identity entries like "SrikanthK" are not redundant: without one, the
/// title-case fallback would flatten the name to "Srikanthk".
pub fn get_aliases() -> Vec<AliasEntry> {
    vec![
        AliasEntry::new("SrikanthK", "SrikanthK"),
        AliasEntry::new("Srikanth K", "SrikanthK"),
        AliasEntry::new("SrikanthV", "SrikanthV"),
        AliasEntry::new("Ravi Gupta", "Ravi Gupta"),
        AliasEntry::new("Ravi L", "Ravi L"),
        AliasEntry::new("Jayasankar", "Jayasankar"),
        AliasEntry::new("Jayashankar", "Jayasankar"),
        AliasEntry::new("Sridhar", "Sridhar"),
        AliasEntry::new("Sreedhar", "Sridhar"),
    ]
}
