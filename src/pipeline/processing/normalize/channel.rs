use std::collections::{BTreeMap, HashMap};

/// Maps raw channel/platform spellings to canonical lowercase identifiers
#[derive(Debug, Clone, Default)]
pub struct ChannelNormalizer {
    /// lowercased spelling -> canonical name
    aliases: HashMap<String, String>,
}

impl ChannelNormalizer {
    /// Build from a canonical -> spellings table. Canonical names always map
    /// to themselves, and lookups ignore case.
    pub fn from_aliases(table: &BTreeMap<String, Vec<String>>) -> Self {
        let mut aliases = HashMap::new();
        for (canonical, spellings) in table {
            aliases.insert(canonical.trim().to_lowercase(), canonical.clone());
            for spelling in spellings {
                aliases.insert(spelling.trim().to_lowercase(), canonical.clone());
            }
        }
        Self { aliases }
    }

    /// Trimmed canonical name; unknown channels pass through trimmed
    pub fn normalize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return String::new();
        }
        self.aliases
            .get(&trimmed.to_lowercase())
            .cloned()
            .unwrap_or_else(|| trimmed.to_string())
    }
}
