pub mod app;
pub mod components;
pub mod pages;
pub mod telemetry;
pub mod theme;

pub use theme::{use_theme, ScopeError, Theme, ThemeConfig, ThemeContext, ThemeProvider, ThemeStore};
