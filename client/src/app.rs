//! Root application component, HTML shell, and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::{OWNER_NAME, OWNER_ROLE};
use crate::pages::home::HomePage;
use crate::state::theme::{Mode, ThemeProvider, bootstrap_script};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `<html>` starts in the default mode; the inline script swaps in the
/// stored preference before first paint.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class=Mode::default().as_str()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=bootstrap_script()></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Establishes the theme before any section renders and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=format!("{OWNER_NAME} | {OWNER_ROLE}")/>
        <Meta name="description" content=format!("{OWNER_NAME}, {OWNER_ROLE}. Projects, services, and contact.")/>

        <ThemeProvider>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </Router>
        </ThemeProvider>
    }
}
