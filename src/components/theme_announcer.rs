use leptos::prelude::*;

use crate::theme::use_theme;

/// Polite live region reporting the active theme.
#[component]
pub fn ThemeAnnouncer() -> impl IntoView {
    use_theme().map(|ctx| {
        let theme = ctx.signal();
        view! {
            <div class="sr-only" role="status" aria-live="polite">
                {move || format!("Theme changed to {}", theme.get())}
            </div>
        }
    })
}
