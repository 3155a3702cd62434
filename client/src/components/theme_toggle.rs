//! Button that flips between dark and light mode.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::state::theme::{Mode, use_theme};

/// Label describing what a click will do.
#[must_use]
pub fn toggle_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Dark => "Switch to light mode",
        Mode::Light => "Switch to dark mode",
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            type="button"
            class="theme-toggle"
            on:click=move |_| theme.toggle()
            title=move || toggle_label(theme.mode())
            aria-label=move || toggle_label(theme.mode())
        >
            {move || {
                let kind = match theme.mode() {
                    Mode::Dark => IconKind::Sun,
                    Mode::Light => IconKind::Moon,
                };
                view! { <Icon kind=kind/> }
            }}
        </button>
    }
}
