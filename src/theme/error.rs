use thiserror::Error;

/// A theme operation ran where no `ThemeProvider` is reachable, or after the
/// provider that owned the store was torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("theme operations used outside a theme scope")]
pub struct ScopeError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid theme {0:?}: expected \"light\" or \"dark\"")]
pub struct ParseThemeError(pub String);

