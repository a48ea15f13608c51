use serde::{Deserialize, Serialize};

use super::preference::{resolve_initial_theme, PreferenceSource};
use super::types::Theme;

/// Provider options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Seed used instead of the host preference when set.
    #[serde(default)]
    pub default_theme: Option<Theme>,
}

impl ThemeConfig {
    pub fn with_default(theme: Theme) -> Self {
        Self {
            default_theme: Some(theme),
        }
    }

    pub fn resolve_seed(&self, preference: &dyn PreferenceSource) -> Theme {
        resolve_initial_theme(self.default_theme, preference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::preference::FixedPreference;

    #[test]
    fn test_deserialize_default_theme() {
        let config: ThemeConfig = serde_json::from_str(r#"{"default_theme":"light"}"#).unwrap();
        assert_eq!(config, ThemeConfig::with_default(Theme::Light));

        let empty: ThemeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ThemeConfig::default());

        assert!(serde_json::from_str::<ThemeConfig>(r#"{"default_theme":"system"}"#).is_err());
    }

    #[test]
    fn test_resolve_seed_prefers_explicit_default() {
        let prefers_dark = FixedPreference(Some(true));
        assert_eq!(ThemeConfig::with_default(Theme::Light).resolve_seed(&prefers_dark), Theme::Light);
        assert_eq!(ThemeConfig::default().resolve_seed(&prefers_dark), Theme::Dark);
    }
}
