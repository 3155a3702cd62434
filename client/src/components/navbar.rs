//! Top navigation: owner name, section links, theme toggle, mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only local state is whether the mobile dropdown is open. Choosing a
//! link from the dropdown closes it.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::theme_toggle::ThemeToggle;
use crate::content::{NAV_ITEMS, OWNER_NAME};
use crate::state::theme::{ThemedClass, use_theme};

const NAV_LINK: ThemedClass = ThemedClass::new("navbar__link navbar__link--dark", "navbar__link navbar__link--light");
const MOBILE_MENU: ThemedClass =
    ThemedClass::new("navbar__menu navbar__menu--dark", "navbar__menu navbar__menu--light");

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme();
    let menu_open = RwSignal::new(false);

    view! {
        <nav class="navbar">
            <a href="#home" class="navbar__brand">{OWNER_NAME}</a>

            <div class="navbar__links">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        view! {
                            <a href=item.href class=move || NAV_LINK.pick(theme.mode())>
                                {item.label}
                            </a>
                        }
                    })
                    .collect_view()}
                <ThemeToggle/>
            </div>

            <div class="navbar__mobile-controls">
                <ThemeToggle/>
                <button
                    type="button"
                    class="navbar__menu-button"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || {
                        let kind = if menu_open.get() { IconKind::Close } else { IconKind::Menu };
                        view! { <Icon kind=kind size=24/> }
                    }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class=move || MOBILE_MENU.pick(theme.mode())>
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    class=move || NAV_LINK.pick(theme.mode())
                                    on:click=move |_| menu_open.set(false)
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
