//! Theme selection for the dashboard chrome.
//!
//! The chosen theme persists as a `"dark"` / `"light"` string through
//! [`crate::util::storage`]; with nothing stored, the operating system
//! preference decides. Applying a theme sets `data-theme` on the root
//! element, which the stylesheet keys off.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::storage;

const THEME_KEY: &str = "stayhub_theme";

fn parse_theme(stored: &str) -> Option<bool> {
    match stored {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

fn encode_theme(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// The theme to start with: the stored choice, or the system preference when
/// the user has never picked one.
pub fn read_preference() -> bool {
    match storage::load_string(THEME_KEY).as_deref().and_then(parse_theme) {
        Some(choice) => choice,
        None => system_prefers_dark(),
    }
}

/// Reflect the theme onto the document root.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", encode_theme(dark));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Flip the theme, persist the choice, and apply it.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    storage::save_string(THEME_KEY, encode_theme(next));
    apply(next);
    next
}
