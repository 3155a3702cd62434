//! Services list beside the "About me" text.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::{ABOUT_TEXT, SERVICES, ServiceIcon};
use crate::state::theme::{ThemedClass, use_theme};

const ICON_BOX: ThemedClass = ThemedClass::new("service__icon service__icon--dark", "service__icon service__icon--light");
const BODY: ThemedClass = ThemedClass::new("about__body about__body--dark", "about__body about__body--light");

fn icon_for(icon: ServiceIcon) -> IconKind {
    match icon {
        ServiceIcon::Code => IconKind::Code,
        ServiceIcon::Server => IconKind::Server,
    }
}

#[component]
pub fn AboutServices() -> impl IntoView {
    let theme = use_theme();

    view! {
        <section id="about" class="about">
            <ul class="services">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <li class="service">
                                <span class="service__dot"></span>
                                <span class=move || ICON_BOX.pick(theme.mode())>
                                    <Icon kind=icon_for(service.icon) size=24/>
                                </span>
                                <h3 class="service__title">{service.title}</h3>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="about__text">
                <h2 class="about__title">"About me"</h2>
                <p class=move || BODY.pick(theme.mode())>{ABOUT_TEXT}</p>
            </div>
        </section>
    }
}
