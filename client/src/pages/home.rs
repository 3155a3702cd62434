//! The single portfolio page.

use leptos::prelude::*;

use crate::components::about_services::AboutServices;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::projects::Projects;
use crate::components::tech_stack::TechStack;
use crate::state::theme::{ThemedClass, use_theme};

const PAGE: ThemedClass = ThemedClass::new("page page--dark", "page page--light");

#[component]
pub fn HomePage() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class=move || PAGE.pick(theme.mode())>
            <Navbar/>
            <main>
                <Hero/>
                <TechStack/>
                <AboutServices/>
                <Projects/>
                <Contact/>
            </main>
            <Footer/>
        </div>
    }
}
