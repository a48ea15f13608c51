mod config;
mod context;
mod error;
mod preference;
mod store;
mod surface;
mod types;

pub use config::ThemeConfig;
pub use context::{create_theme, provide_theme, use_theme, ThemeContext, ThemeProvider, ThemeProviderProps};
pub use error::{ParseThemeError, ScopeError};
#[cfg(not(target_arch = "wasm32"))]
pub use preference::SystemPreference;
pub use preference::{host_preference, resolve_initial_theme, FixedPreference, MediaQueryPreference, PreferenceSource};
pub use store::{SubscriptionId, ThemeStore};
pub use surface::{sync_theme_classes, ClassSurface, DocumentRoot, MemorySurface};
pub use types::Theme;
