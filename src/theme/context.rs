use leptos::context::Provider;
use leptos::prelude::*;
use tracing::warn;

use super::config::ThemeConfig;
use super::error::ScopeError;
use super::preference::{host_preference, PreferenceSource};
use super::store::ThemeStore;
use super::surface::{ClassSurface, DocumentRoot, MemorySurface};
use super::types::Theme;

/// Handle to the nearest theme store, shared through Leptos context.
///
/// Operations fail with [`ScopeError`] once the owning provider is disposed.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: ReadSignal<Theme>,
    store: StoredValue<ThemeStore, LocalStorage>,
}

impl ThemeContext {
    /// Current theme. Tracked when read inside a reactive scope.
    pub fn theme(&self) -> Result<Theme, ScopeError> {
        self.theme.try_get().ok_or(ScopeError)
    }

    pub fn set_theme(&self, next: Theme) -> Result<(), ScopeError> {
        self.store
            .try_update_value(|store| store.set_theme(next))
            .ok_or(ScopeError)
    }

    /// Flip the theme and return the new value.
    pub fn toggle_theme(&self) -> Result<Theme, ScopeError> {
        self.store
            .try_update_value(ThemeStore::toggle_theme)
            .ok_or(ScopeError)
    }

    pub fn signal(&self) -> ReadSignal<Theme> {
        self.theme
    }
}

/// Build a store for the current reactive owner without providing it.
///
/// The store is seeded once from `config` and `preference`, and is disposed
/// together with the owner.
pub fn create_theme(
    config: ThemeConfig,
    surface: Box<dyn ClassSurface>,
    preference: &dyn PreferenceSource,
) -> ThemeContext {
    let seed = config.resolve_seed(preference);
    let (theme, set_theme) = signal(seed);

    let mut store = ThemeStore::new(seed, surface);
    store.subscribe(move |next| set_theme.set(next));

    ThemeContext {
        theme,
        store: StoredValue::new_local(store),
    }
}

/// Create a store and make it visible to everything under the current owner.
pub fn provide_theme(
    config: ThemeConfig,
    surface: Box<dyn ClassSurface>,
    preference: &dyn PreferenceSource,
) -> ThemeContext {
    let context = create_theme(config, surface, preference);
    provide_context(context);
    context
}

/// The nearest enclosing theme store.
pub fn use_theme() -> Result<ThemeContext, ScopeError> {
    use_context::<ThemeContext>().ok_or(ScopeError)
}

/// Owns a theme store for its children and mirrors it onto `<html class>`.
#[component]
pub fn ThemeProvider(
    /// Initial theme; the browser's color-scheme preference is used when omitted
    #[prop(optional)]
    default_theme: Option<Theme>,
    children: Children,
) -> impl IntoView {
    let surface: Box<dyn ClassSurface> = match DocumentRoot::locate() {
        Some(root) => Box::new(root),
        None => {
            warn!("No document root available, theme classes will not be applied");
            Box::new(MemorySurface::new())
        }
    };
    let preference = host_preference();
    let context = create_theme(ThemeConfig { default_theme }, surface, preference.as_ref());

    view! { <Provider value=context>{children()}</Provider> }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use leptos::reactive::owner::Owner;

    use super::*;
    use crate::theme::preference::FixedPreference;

    #[test]
    fn test_use_theme_without_provider_fails() {
        Owner::new().with(|| {
            assert_eq!(use_theme().err(), Some(ScopeError));
        });
    }

    #[test]
    fn test_signal_follows_store() {
        Owner::new().with(|| {
            let surface = MemorySurface::new();
            let ctx = create_theme(
                ThemeConfig::with_default(Theme::Light),
                Box::new(surface.clone()),
                &FixedPreference(None),
            );

            assert_eq!(ctx.toggle_theme(), Ok(Theme::Dark));
            assert_eq!(ctx.signal().get_untracked(), Theme::Dark);
            assert_eq!(ctx.theme(), Ok(Theme::Dark));
            assert_eq!(surface.classes(), vec!["dark"]);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_provider_mounts_without_dom() {
        let seen = Arc::new(Mutex::new(None));

        Owner::new().with(|| {
            let sink = seen.clone();
            let _view = view! {
                <ThemeProvider default_theme=Theme::Light>
                    {
                        *sink.lock().unwrap() = Some(use_theme().and_then(|ctx| ctx.theme()));
                    }
                </ThemeProvider>
            };
        });

        assert_eq!(*seen.lock().unwrap(), Some(Ok(Theme::Light)));
    }

    #[test]
    fn test_create_theme_does_not_provide() {
        Owner::new().with(|| {
            create_theme(ThemeConfig::default(), Box::new(MemorySurface::new()), &FixedPreference(None));
            assert!(use_theme().is_err());
        });
    }
}
