//! Scrolling strip of technology names.
//!
//! The list is rendered twice back to back; the stylesheet slides the track
//! by half its width so the loop has no visible seam. Hovering pauses it.

#[cfg(test)]
#[path = "tech_stack_test.rs"]
mod tech_stack_test;

use leptos::prelude::*;

use crate::content::TECH_STACK;
use crate::state::theme::{ThemedClass, use_theme};

const MARQUEE_COPIES: usize = 2;

const STRIP: ThemedClass = ThemedClass::new("tech-strip tech-strip--dark", "tech-strip tech-strip--light");

/// One entry in the marquee track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarqueeItem {
    pub label: &'static str,
    /// Repeated copies are hidden from assistive technology.
    pub decorative: bool,
}

#[must_use]
pub fn marquee_items(labels: &[&'static str]) -> Vec<MarqueeItem> {
    (0..MARQUEE_COPIES)
        .flat_map(|copy| labels.iter().map(move |label| MarqueeItem { label, decorative: copy > 0 }))
        .collect()
}

#[component]
pub fn TechStack() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class=move || STRIP.pick(theme.mode())>
            <div class="marquee">
                <div class="marquee__track">
                    {marquee_items(&TECH_STACK)
                        .into_iter()
                        .map(|item| {
                            view! {
                                <span class="marquee__item" aria-hidden=item.decorative.then_some("true")>
                                    {item.label}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
