//! Landing banner with greeting, role, calls to action, and portrait.

use leptos::prelude::*;

use crate::components::button::{ButtonSize, ButtonVariant, button_class};
use crate::content::{OWNER_EMAIL, OWNER_FIRST_NAME, OWNER_ROLE, PORTRAIT_PATH, RESUME_FILE_NAME, RESUME_PATH};
use crate::state::theme::{ThemedClass, use_theme};

const INTRO: ThemedClass = ThemedClass::new("hero__intro hero__intro--dark", "hero__intro hero__intro--light");
const ROLE: ThemedClass = ThemedClass::new("hero__role hero__role--dark", "hero__role hero__role--light");
const PORTRAIT_FRAME: ThemedClass =
    ThemedClass::new("hero__portrait hero__portrait--dark", "hero__portrait hero__portrait--light");

#[component]
pub fn Hero() -> impl IntoView {
    let theme = use_theme();
    let mailto = format!("mailto:{OWNER_EMAIL}");

    view! {
        <section id="home" class="hero">
            <div class="hero__text">
                <h2 class="hero__greeting">"Hello " <span class="accent">"."</span></h2>
                <div class="hero__name-row">
                    <span class="accent-rule"></span>
                    <p class=move || INTRO.pick(theme.mode())>{format!("I'm {OWNER_FIRST_NAME}")}</p>
                </div>
                <h1 class=move || ROLE.pick(theme.mode())>{OWNER_ROLE}</h1>
                <div class="hero__actions">
                    <a href=mailto class=button_class(ButtonVariant::Primary, ButtonSize::Lg, "hero__cta")>
                        "Got a project?"
                    </a>
                    <a
                        href=RESUME_PATH
                        download=RESUME_FILE_NAME
                        class=button_class(ButtonVariant::Outline, ButtonSize::Lg, "hero__cta")
                    >
                        "My resume"
                    </a>
                </div>
            </div>
            <div class="hero__visual">
                <div class="hero__ring"></div>
                <div class=move || PORTRAIT_FRAME.pick(theme.mode())>
                    <img src=PORTRAIT_PATH alt=OWNER_FIRST_NAME class="hero__photo"/>
                </div>
            </div>
        </section>
    }
}
