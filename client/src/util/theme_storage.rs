//! Durable storage for the theme preference.
//!
//! The preference lives under a single `localStorage` key scoped to the
//! site's origin. Reads and writes are synchronous; failures surface as
//! "absent" on load and as an error string on save so the caller can degrade.

#[cfg(test)]
#[path = "theme_storage_test.rs"]
mod theme_storage_test;

use crate::state::theme::Mode;

/// `localStorage` key holding `"dark"` or `"light"`.
pub const STORAGE_KEY: &str = "theme";

/// Key/value persistence for the chosen [`Mode`].
pub trait PreferenceStore: Send + Sync {
    /// Stored mode, or `None` when missing, unreadable, or not a valid mode.
    fn load(&self) -> Option<Mode>;

    /// Overwrite the stored mode.
    ///
    /// # Errors
    ///
    /// Returns an error string when storage is disabled, full, or absent.
    fn save(&self, mode: Mode) -> Result<(), String>;
}

/// Browser `localStorage`. Off-browser builds have no storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or_else(|| "no window".to_owned())?
        .local_storage()
        .map_err(|_| "local storage access denied".to_owned())?
        .ok_or_else(|| "local storage disabled".to_owned())
}

impl PreferenceStore for BrowserStorage {
    fn load(&self) -> Option<Mode> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage().ok()?.get_item(STORAGE_KEY).ok()??;
            Mode::parse(&raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, mode: Mode) -> Result<(), String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(STORAGE_KEY, mode.as_str())
                .map_err(|_| "local storage write rejected".to_owned())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = mode;
            Err("local storage unavailable outside the browser".to_owned())
        }
    }
}
