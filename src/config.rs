//! Category configuration and highlight preferences
//!
//! The static `POS_CONFIGS` table is the only configuration surface for the
//! analysis pipeline: adding a grammatical category is one new table row.
//! User preferences (which categories are highlighted) persist in
//! `~/.config/poslight/highlighting.yaml`.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Grammatical category assigned by the tagger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Conjunction,
    Pronoun,
    Auxiliary,
    Modal,
}

impl PosTag {
    /// Tagger-facing name, e.g. `#Noun`
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "#Noun",
            PosTag::Verb => "#Verb",
            PosTag::Adjective => "#Adjective",
            PosTag::Adverb => "#Adverb",
            PosTag::Conjunction => "#Conjunction",
            PosTag::Pronoun => "#Pronoun",
            PosTag::Auxiliary => "#Auxiliary",
            PosTag::Modal => "#Modal",
        }
    }
}

/// One highlightable category: which tag to query, which style class the
/// decorations get, which preference key enables it, and which other
/// categories' words must never also be claimed by this one.
#[derive(Debug, Clone)]
pub struct PosConfig {
    pub tag: PosTag,
    pub class_name: &'static str,
    pub setting_key: &'static str,
    pub exclusion_tags: &'static [PosTag],
}

/// Static registry of highlighted categories, in priority order.
///
/// The first category in this list to claim a range wins it; later
/// categories never re-decorate the same span.
pub static POS_CONFIGS: &[PosConfig] = &[
    PosConfig {
        tag: PosTag::Noun,
        class_name: "pos-noun",
        setting_key: "nouns",
        // Pronouns are tagged as nouns by most taggers; never style them as nouns
        exclusion_tags: &[PosTag::Pronoun],
    },
    PosConfig {
        tag: PosTag::Verb,
        class_name: "pos-verb",
        setting_key: "verbs",
        exclusion_tags: &[PosTag::Auxiliary, PosTag::Modal],
    },
    PosConfig {
        tag: PosTag::Adjective,
        class_name: "pos-adjective",
        setting_key: "adjectives",
        exclusion_tags: &[],
    },
    PosConfig {
        tag: PosTag::Adverb,
        class_name: "pos-adverb",
        setting_key: "adverbs",
        exclusion_tags: &[],
    },
    PosConfig {
        tag: PosTag::Conjunction,
        class_name: "pos-conjunction",
        setting_key: "conjunctions",
        exclusion_tags: &[],
    },
];

/// Per-category highlight preferences that persist across sessions
///
/// A key absent from the map means "enabled" (fail-open), so a freshly
/// installed editor highlights everything until the user opts out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighlightPrefs {
    #[serde(default)]
    pub categories: HashMap<String, bool>,
}

impl HighlightPrefs {
    /// Whether a category's setting key is enabled (absent key = enabled)
    pub fn is_enabled(&self, setting_key: &str) -> bool {
        self.categories.get(setting_key).copied().unwrap_or(true)
    }

    /// Toggle one category, returning the new value
    pub fn toggle(&mut self, setting_key: &str) -> bool {
        let next = !self.is_enabled(setting_key);
        self.categories.insert(setting_key.to_string(), next);
        next
    }

    /// Load preferences from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::prefs_file() else {
            tracing::debug!("No config directory available, using default preferences");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load preferences from a specific path, or return defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Preferences file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(prefs) => {
                    tracing::info!("Loaded highlight preferences from {}", path.display());
                    prefs
                }
                Err(e) => {
                    tracing::warn!("Failed to parse preferences at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read preferences at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save preferences to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::prefs_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save preferences to a specific path
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize preferences: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write preferences to {}: {}", path.display(), e))?;

        tracing::info!("Saved highlight preferences to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_is_enabled() {
        let prefs = HighlightPrefs::default();
        assert!(prefs.is_enabled("nouns"), "Missing key should fail open");
        assert!(prefs.is_enabled("no-such-category"));
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut prefs = HighlightPrefs::default();
        assert!(!prefs.toggle("verbs"), "First toggle should disable");
        assert!(!prefs.is_enabled("verbs"));
        assert!(prefs.toggle("verbs"), "Second toggle should re-enable");
        assert!(prefs.is_enabled("verbs"));
    }

    #[test]
    fn test_config_table_has_unique_keys() {
        let mut seen = std::collections::HashSet::new();
        for config in POS_CONFIGS {
            assert!(
                seen.insert(config.setting_key),
                "Duplicate setting key {}",
                config.setting_key
            );
        }
    }

    #[test]
    fn test_config_table_never_excludes_itself() {
        for config in POS_CONFIGS {
            assert!(
                !config.exclusion_tags.contains(&config.tag),
                "{:?} excludes itself",
                config.tag
            );
        }
    }
}
