//! Mirrors the current theme onto the `<html>` element.
//!
//! The stylesheet keys its palettes off a `dark` or `light` class on the
//! document root. Exactly one of the two is present at any time; unrelated
//! classes are left alone.

#[cfg(test)]
#[path = "theme_marker_test.rs"]
mod theme_marker_test;

use crate::state::theme::Mode;

const MODE_TOKENS: [&str; 2] = ["dark", "light"];

/// Applies a [`Mode`] to whatever the style system reads.
pub trait ModeMarker: Send + Sync {
    /// Make `mode` the only mode marker present. Idempotent.
    fn reflect(&self, mode: Mode);
}

/// The document's root element. No-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl ModeMarker for DocumentRoot {
    fn reflect(&self, mode: Mode) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            {
                let current = el.class_name();
                let next = reflected_class_name(&current, mode);
                if next != current {
                    el.set_class_name(&next);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = mode;
        }
    }
}

/// Rewrite a class attribute so it carries `mode` and not the other token.
#[must_use]
pub fn reflected_class_name(current: &str, mode: Mode) -> String {
    let mut classes: Vec<&str> = current
        .split_whitespace()
        .filter(|class| !MODE_TOKENS.contains(class))
        .collect();
    classes.push(mode.as_str());
    classes.join(" ")
}
