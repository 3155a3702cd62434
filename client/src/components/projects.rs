//! Projects gallery backed by `GET /api/projects`.
//!
//! SYSTEM CONTEXT
//! ==============
//! One fetch is issued when the section mounts. Its outcome is written once
//! into local [`ProjectsState`]; there is no retry until the next mount.

use leptos::prelude::*;

use crate::components::button::{ButtonSize, ButtonVariant, button_class};
use crate::components::icons::{Icon, IconKind};
use crate::net::types::Project;
use crate::state::projects::{ProjectsState, is_reversed};
use crate::state::theme::{ThemedClass, use_theme};

const CARD_TITLE: ThemedClass = ThemedClass::new("project__title project__title--dark", "project__title project__title--light");
const TAG: ThemedClass = ThemedClass::new("project__tag project__tag--dark", "project__tag project__tag--light");
const DESCRIPTION: ThemedClass =
    ThemedClass::new("project__description project__description--dark", "project__description project__description--light");
const LIVE_LINK: ThemedClass = ThemedClass::new("project__live project__live--dark", "project__live project__live--light");
const IMAGE_FRAME: ThemedClass = ThemedClass::new("project__frame project__frame--dark", "project__frame project__frame--light");

#[component]
pub fn Projects() -> impl IntoView {
    let state = RwSignal::new(ProjectsState::Loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_projects().await;
        if let Err(e) = &result {
            log::warn!("projects fetch failed: {e}");
        }
        // The section may have unmounted while the request was in flight.
        let _ = state.try_set(ProjectsState::from_fetch(result));
    });

    view! {
        <section
            id="projects"
            class="projects"
            aria-busy=move || (!state.with(ProjectsState::is_settled)).to_string()
        >
            <div class="projects__header">
                <h2 class="projects__title">"Projects"</h2>
                <div class="projects__rule"></div>
            </div>
            {move || match state.get() {
                ProjectsState::Loading => {
                    view! { <p class="projects__status">"Loading projects..."</p> }.into_any()
                }
                ProjectsState::Failed(message) => {
                    view! { <p class="projects__status projects__status--error" role="alert">{message}</p> }
                        .into_any()
                }
                ProjectsState::Loaded(items) if items.is_empty() => {
                    view! { <p class="projects__status">"No projects yet."</p> }.into_any()
                }
                ProjectsState::Loaded(items) => {
                    view! {
                        <div class="projects__list">
                            {items
                                .into_iter()
                                .enumerate()
                                .map(|(index, project)| {
                                    view! { <ProjectCard project=project reversed=is_reversed(index)/> }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

/// One project row; `reversed` puts the image first.
#[component]
fn ProjectCard(project: Project, reversed: bool) -> impl IntoView {
    let theme = use_theme();
    let Project { title, description, tags, github_url, live_url, image, .. } = project;
    let alt = format!("{title} preview");
    let row_class = if reversed { "project project--reversed" } else { "project" };

    view! {
        <article class=row_class>
            <div class="project__content">
                <h3 class=move || CARD_TITLE.pick(theme.mode())>{title}</h3>
                <ul class="project__tags">
                    {tags
                        .into_iter()
                        .map(|tag| view! { <li class=move || TAG.pick(theme.mode())>{tag}</li> })
                        .collect_view()}
                </ul>
                <p class=move || DESCRIPTION.pick(theme.mode())>{description}</p>
                <div class="project__actions">
                    <a
                        href=github_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class=button_class(ButtonVariant::Primary, ButtonSize::Lg, "")
                    >
                        "View Github"
                    </a>
                    <a
                        href=live_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class=move || LIVE_LINK.pick(theme.mode())
                    >
                        "View project "
                        <Icon kind=IconKind::ExternalLink size=16/>
                    </a>
                </div>
            </div>
            <div class="project__media">
                <div class=move || IMAGE_FRAME.pick(theme.mode())>
                    <img src=image alt=alt class="project__image" loading="lazy"/>
                </div>
            </div>
        </article>
    }
}
