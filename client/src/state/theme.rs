//! Light/dark theme state shared by every section of the page.
//!
//! DESIGN
//! ======
//! `ThemeStore` is the single writer for the current [`Mode`]. It is created
//! once in the app root from the persisted preference and injected into the
//! view tree through Leptos context as a [`Theme`] handle. Sections read the
//! mode through [`Theme::mode`] and never mutate it except via
//! [`Theme::toggle`].
//!
//! Every toggle mutates the cell, writes through to storage, then reflects
//! the new mode on `<html>`, in that order, before returning.
//!
//! ERROR HANDLING
//! ==============
//! A failed storage write leaves the session functional: the mode and the
//! root marker still change, only the preference is lost on reload.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

use crate::util::theme_marker::{DocumentRoot, ModeMarker};
use crate::util::theme_storage::{BrowserStorage, PreferenceStore, STORAGE_KEY};

/// Two-valued display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Dark,
    Light,
}

impl Mode {
    /// String form used for storage and as the root class token.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a stored value. Anything other than `dark`/`light` is rejected.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Owns the current mode plus the storage and marker collaborators.
pub struct ThemeStore {
    mode: Mode,
    storage: Box<dyn PreferenceStore>,
    marker: Box<dyn ModeMarker>,
}

impl ThemeStore {
    /// Load the persisted preference (falling back to [`Mode::Dark`]) and
    /// reflect it on the root element.
    pub fn initialize(storage: Box<dyn PreferenceStore>, marker: Box<dyn ModeMarker>) -> Self {
        let mode = storage.load().unwrap_or_default();
        marker.reflect(mode);
        Self { mode, storage, marker }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Flip the mode, persist it, then reflect it. Returns the new mode.
    pub fn toggle(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        if let Err(e) = self.storage.save(self.mode) {
            #[cfg(feature = "hydrate")]
            log::warn!("theme preference not saved: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
        }
        self.marker.reflect(self.mode);
        self.mode
    }
}

/// Copyable handle to the page-wide theme cell, provided via context.
///
/// Server HTML is always rendered in [`Mode::default`] because the server
/// cannot see `localStorage`. Until the hydrated tree has claimed that markup
/// the handle keeps reporting the default; afterwards it reports the store.
#[derive(Clone, Copy)]
pub struct Theme {
    store: RwSignal<ThemeStore>,
    settled: RwSignal<bool>,
}

impl Theme {
    /// Handle that reports the default mode until [`Theme::settle`].
    #[must_use]
    pub fn pending(store: ThemeStore) -> Self {
        Self { store: RwSignal::new(store), settled: RwSignal::new(false) }
    }

    /// Start reporting the store's mode to the view tree.
    pub fn settle(self) {
        self.settled.set(true);
    }

    /// Mode to render with. Tracks when read inside a reactive closure.
    pub fn mode(self) -> Mode {
        if self.settled.get() {
            self.store.with(ThemeStore::mode)
        } else {
            Mode::default()
        }
    }

    pub fn toggle(self) {
        self.store.update(|store| {
            store.toggle();
        });
        self.settled.set(true);
    }
}

/// Establish the theme for its children. Must wrap every themed section.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let store = ThemeStore::initialize(Box::new(BrowserStorage), Box::new(DocumentRoot));
    let theme = Theme::pending(store);
    provide_context(theme);
    // Effects only run in the browser, after hydration has claimed the
    // server markup rendered with the default mode.
    Effect::new(move || theme.settle());
    children()
}

/// Fetch the theme handle from context.
///
/// # Panics
///
/// Panics when called outside a [`ThemeProvider`]; that is a wiring mistake,
/// not a runtime condition.
pub fn use_theme() -> Theme {
    use_context::<Theme>().expect("use_theme must be called inside a ThemeProvider")
}

/// Inline script for `<head>` that applies the stored mode to `<html>`
/// before first paint, ahead of the WASM bundle loading.
#[must_use]
pub fn bootstrap_script() -> String {
    format!(
        "(function(){{try{{var m=localStorage.getItem('{key}');\
if(m!=='{dark}'&&m!=='{light}'){{m='{fallback}';}}\
var c=document.documentElement.classList;c.remove('{dark}','{light}');c.add(m);}}catch(e){{}}}})();",
        key = STORAGE_KEY,
        dark = Mode::Dark.as_str(),
        light = Mode::Light.as_str(),
        fallback = Mode::default().as_str(),
    )
}

/// A class string for each mode, chosen per render from the current mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemedClass {
    pub dark: &'static str,
    pub light: &'static str,
}

impl ThemedClass {
    #[must_use]
    pub const fn new(dark: &'static str, light: &'static str) -> Self {
        Self { dark, light }
    }

    #[must_use]
    pub fn pick(self, mode: Mode) -> &'static str {
        match mode {
            Mode::Dark => self.dark,
            Mode::Light => self.light,
        }
    }
}
