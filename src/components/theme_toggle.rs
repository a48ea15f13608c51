use leptos::prelude::*;
use tracing::error;

use crate::theme::use_theme;

/// Icon button that flips between light and dark.
///
/// Its label names the theme it switches to, so screen readers announce the
/// action rather than the current state.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    use_theme().map(|ctx| {
        let theme = ctx.signal();
        let on_toggle = move |_| {
            if let Err(e) = ctx.toggle_theme() {
                error!(error = %e, "Theme toggle failed");
            }
        };

        view! {
            <button
                type="button"
                class="btn btn-icon theme-toggle"
                aria-label=move || format!("Switch to {} theme", theme.get().toggled())
                on:click=on_toggle
            >
                <span class="theme-toggle-icon" aria-hidden="true">
                    {move || if theme.get().is_dark() { "\u{263E}" } else { "\u{2600}" }}
                </span>
            </button>
        }
    })
}
