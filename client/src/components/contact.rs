//! Contact form posting to `POST /api/contact`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation happens locally first; only a valid form leaves the page.
//! The submit button stays disabled while a request is in flight, so each
//! mount has at most one outstanding submission.

use leptos::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::state::contact::{ContactField, ContactState, NoticeKind};
use crate::state::theme::{ThemedClass, use_theme};

const SECTION: ThemedClass = ThemedClass::new("contact contact--dark", "contact contact--light");
const LABEL: ThemedClass = ThemedClass::new("contact__label contact__label--dark", "contact__label contact__label--light");
const INPUT: ThemedClass = ThemedClass::new("contact__input contact__input--dark", "contact__input contact__input--light");

#[component]
pub fn Contact() -> impl IntoView {
    let theme = use_theme();
    let contact = RwSignal::new(ContactState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut pending = None;
        contact.update(|c| pending = c.begin_submit());
        let Some(submission) = pending else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_contact(&submission).await;
            let _ = contact.try_update(|c| c.finish(&result));
            if let Err(e) = result {
                log::warn!("contact submission failed: {e}");
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(crate::state::contact::FAILED_NOTICE);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = submission;
    };

    view! {
        <section id="contact" class=move || SECTION.pick(theme.mode())>
            <form class="contact__layout" on:submit=on_submit novalidate=true>
                <div class="contact__intro">
                    <div class="contact__eyebrow">
                        <span class="accent-rule"></span>
                        <span>"Contacts"</span>
                    </div>
                    <h2 class="contact__title">"Have a project?" <br/> "Let's talk!"</h2>
                    <Button
                        variant=ButtonVariant::Primary
                        size=ButtonSize::Lg
                        class="contact__submit"
                        submit=true
                        disabled=move || contact.with(ContactState::is_submitting)
                    >
                        {move || if contact.with(ContactState::is_submitting) { "Sending..." } else { "Submit" }}
                    </Button>
                    {move || {
                        contact
                            .with(|c| c.notice.clone())
                            .map(|notice| {
                                let class = match notice.kind {
                                    NoticeKind::Success => "contact__notice contact__notice--success",
                                    NoticeKind::Error => "contact__notice contact__notice--error",
                                };
                                view! { <p class=class role="status">{notice.text}</p> }
                            })
                    }}
                </div>
                <div class="contact__fields">
                    <ContactInput contact=contact field=ContactField::Name label="Name" input_type="text"/>
                    <ContactInput contact=contact field=ContactField::Email label="Email" input_type="email"/>
                    <ContactInput contact=contact field=ContactField::Message label="Message" input_type="textarea"/>
                </div>
            </form>
        </section>
    }
}

fn field_id(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "contact-name",
        ContactField::Email => "contact-email",
        ContactField::Message => "contact-message",
    }
}

/// Labeled input bound to one field of the form state.
#[component]
fn ContactInput(
    contact: RwSignal<ContactState>,
    field: ContactField,
    label: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    let theme = use_theme();
    let id = field_id(field);
    let value = move || contact.with(|c| c.field(field).to_owned());
    let on_input = move |ev: leptos::ev::Event| contact.update(|c| c.set_field(field, event_target_value(&ev)));

    let control = if input_type == "textarea" {
        view! {
            <textarea
                id=id
                name=id
                rows="4"
                class=move || INPUT.pick(theme.mode())
                prop:value=value
                on:input=on_input
            ></textarea>
        }
            .into_any()
    } else {
        view! {
            <input
                id=id
                name=id
                type=input_type
                class=move || INPUT.pick(theme.mode())
                prop:value=value
                on:input=on_input
            />
        }
            .into_any()
    };

    view! {
        <div class="contact__field">
            <label for=id class=move || LABEL.pick(theme.mode())>{label}</label>
            {control}
        </div>
    }
}
