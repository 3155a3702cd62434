//! Shared button with visual variants and sizes.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

use crate::util::class_names::class_list;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Link,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn--primary",
            Self::Outline => "btn--outline",
            Self::Ghost => "btn--ghost",
            Self::Link => "btn--link",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            Self::Default => "btn--md",
            Self::Sm => "btn--sm",
            Self::Lg => "btn--lg",
            Self::Icon => "btn--icon",
        }
    }
}

/// Full class attribute for a button.
#[must_use]
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    class_list(&["btn", variant.class(), size.class(), extra])
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(into, optional)] class: String,
    #[prop(optional)] submit: bool,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let kind = if submit { "submit" } else { "button" };
    view! {
        <button
            type=kind
            class=button_class(variant, size, &class)
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}
