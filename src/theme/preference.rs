//! Where the initial theme comes from when the provider is not told one.

use tracing::debug;

use super::types::Theme;

#[cfg(target_arch = "wasm32")]
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// A read-only "does the user prefer dark?" query.
///
/// `None` means the host has no such signal.
pub trait PreferenceSource {
    fn prefers_dark(&self) -> Option<bool>;
}

/// The browser's `prefers-color-scheme` media query.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaQueryPreference;

impl PreferenceSource for MediaQueryPreference {
    #[cfg(target_arch = "wasm32")]
    fn prefers_dark(&self) -> Option<bool> {
        let query = web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()?;
        Some(query.matches())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn prefers_dark(&self) -> Option<bool> {
        None
    }
}

/// The operating system's appearance setting.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPreference;

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceSource for SystemPreference {
    fn prefers_dark(&self) -> Option<bool> {
        match dark_light::detect() {
            dark_light::Mode::Dark => Some(true),
            dark_light::Mode::Light => Some(false),
            dark_light::Mode::Default => None,
        }
    }
}

/// A preference pinned to a value, or to "no signal" with `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedPreference(pub Option<bool>);

impl PreferenceSource for FixedPreference {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// The preference source for the platform this build targets.
pub fn host_preference() -> Box<dyn PreferenceSource> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(MediaQueryPreference)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(SystemPreference)
    }
}

/// Pick the seed for a new store. An explicit default wins, then the host
/// preference, and `Dark` when the host offers nothing.
pub fn resolve_initial_theme(explicit: Option<Theme>, preference: &dyn PreferenceSource) -> Theme {
    if let Some(theme) = explicit {
        debug!(%theme, "Using explicit default theme");
        return theme;
    }

    let theme = match preference.prefers_dark() {
        Some(true) => Theme::Dark,
        Some(false) => Theme::Light,
        None => Theme::Dark,
    };
    debug!(%theme, "Resolved theme from host preference");
    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_default_wins() {
        for prefers in [Some(true), Some(false), None] {
            let pref = FixedPreference(prefers);
            assert_eq!(resolve_initial_theme(Some(Theme::Light), &pref), Theme::Light);
            assert_eq!(resolve_initial_theme(Some(Theme::Dark), &pref), Theme::Dark);
        }
    }

    #[test]
    fn test_preference_used_without_default() {
        assert_eq!(resolve_initial_theme(None, &FixedPreference(Some(true))), Theme::Dark);
        assert_eq!(resolve_initial_theme(None, &FixedPreference(Some(false))), Theme::Light);
    }

    #[test]
    fn test_missing_signal_falls_back_to_dark() {
        assert_eq!(resolve_initial_theme(None, &FixedPreference(None)), Theme::Dark);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_media_query_unavailable_off_wasm() {
        assert_eq!(MediaQueryPreference.prefers_dark(), None);
        assert_eq!(resolve_initial_theme(None, &MediaQueryPreference), Theme::Dark);
    }
}
