use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::pages::theme_demo::ThemeDemoPage;
use crate::theme::{Theme, ThemeProvider};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeProvider default_theme=Theme::Light>
            <Router>
                <main class="content">
                    <ErrorBoundary fallback=|errors| {
                        view! {
                            <div class="error-panel">
                                <p>"Something went wrong:"</p>
                                <ul>
                                    {move || {
                                        errors
                                            .get()
                                            .into_iter()
                                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                            .collect_view()
                                    }}
                                </ul>
                            </div>
                        }
                    }>
                        <Routes fallback=|| view! { <p>"Page not found"</p> }>
                            <Route path=path!("/") view=ThemeDemoPage />
                        </Routes>
                    </ErrorBoundary>
                </main>
            </Router>
        </ThemeProvider>
    }
}
