//! Footer with name, credit line, and social links.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::{FOOTER_CREDIT, OWNER_NAME, SOCIAL_LINKS, SocialKind};
use crate::state::theme::{ThemedClass, use_theme};

const FOOTER: ThemedClass = ThemedClass::new("footer footer--dark", "footer footer--light");

fn icon_for(kind: SocialKind) -> IconKind {
    match kind {
        SocialKind::Mail => IconKind::Mail,
        SocialKind::Github => IconKind::Github,
        SocialKind::Linkedin => IconKind::Linkedin,
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let theme = use_theme();

    view! {
        <footer class=move || FOOTER.pick(theme.mode())>
            <h3 class="footer__name">{OWNER_NAME}</h3>
            <p class="footer__credit">{FOOTER_CREDIT}</p>
            <div class="footer__links">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a href=link.href class="footer__link" aria-label=link.label title=link.label>
                                <Icon kind=icon_for(link.kind)/>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}
