use leptos::prelude::*;

use crate::components::theme_announcer::ThemeAnnouncer;
use crate::components::theme_toggle::ThemeToggle;
use crate::theme::use_theme;

#[component]
pub fn ThemeDemoPage() -> impl IntoView {
    use_theme().map(|ctx| {
        let theme = ctx.signal();

        view! {
            <div class="page theme-demo-page">
                <div class="page-header">
                    <ThemeToggle />
                </div>

                <div class="container">
                    <div class="hero">
                        <h1 class="hero-title">"Light & Dark Mode"</h1>
                    </div>

                    <div class="card">
                        <div class="card-header">
                            <h3 class="card-title">"Interactive Elements"</h3>
                            <p class="card-description">
                                "See how buttons and cards adapt to the current theme"
                            </p>
                        </div>
                        <div class="card-content">
                            <div class="button-grid">
                                <button type="button" class="btn btn-primary">"Primary"</button>
                                <button type="button" class="btn btn-outline">"Outline"</button>
                                <button type="button" class="btn btn-secondary">"Secondary"</button>
                                <button type="button" class="btn btn-ghost">"Ghost"</button>
                            </div>
                            <div class="theme-readout">
                                <p>
                                    <span class="theme-readout-label">"Current theme:"</span>
                                    " "
                                    <span class="theme-readout-value">
                                        {move || format!("\"{}\"", theme.get())}
                                    </span>
                                </p>
                            </div>
                        </div>
                    </div>
                </div>

                <ThemeAnnouncer />
            </div>
        }
    })
}
