//! Location fragment and contact-trigger helpers.
//!
//! The contact overlay opens for the reserved `#contact` fragment and for
//! clicks on any element carrying `data-contact-trigger`. Closing removes the
//! fragment with `history.pushState` so the page does not reload or jump.
//!
//! TRADE-OFFS
//! ==========
//! Browser lookups return empty values outside `hydrate`; fragment removal is
//! best-effort and only logged when the History API refuses it.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

/// Fragment that opens the contact overlay.
pub const CONTACT_FRAGMENT: &str = "#contact";

/// Attribute marking an element as a contact overlay trigger.
pub const CONTACT_TRIGGER_ATTR: &str = "data-contact-trigger";

/// Whether a `location.hash` value asks for the contact overlay.
#[must_use]
pub fn fragment_opens_contact(hash: &str) -> bool {
    hash == CONTACT_FRAGMENT
}

/// Relative URL for the current page with the fragment dropped.
#[must_use]
pub fn url_without_fragment(pathname: &str, search: &str) -> String {
    let path = if pathname.is_empty() { "/" } else { pathname };
    format!("{path}{search}")
}

/// URL to push when closing the overlay, or `None` if `hash` is not the
/// contact fragment and the address bar should be left alone.
#[must_use]
pub fn contact_fragment_replacement(hash: &str, pathname: &str, search: &str) -> Option<String> {
    fragment_opens_contact(hash).then(|| url_without_fragment(pathname, search))
}

/// The current `location.hash`, including the leading `#`, or empty.
#[must_use]
pub fn current_hash() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.location().hash().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Remove `#contact` from the address bar without reloading.
///
/// Does nothing when the current fragment is something else.
pub fn clear_contact_fragment() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let Some(url) = contact_fragment_replacement(
            &location.hash().unwrap_or_default(),
            &location.pathname().unwrap_or_default(),
            &location.search().unwrap_or_default(),
        ) else {
            return;
        };
        let pushed = window
            .history()
            .and_then(|history| history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url)));
        if let Err(err) = pushed {
            log::warn!("failed to clear contact fragment: {err:?}");
        }
    }
}

/// Whether a click landed on (or inside) a contact trigger element.
#[cfg(feature = "hydrate")]
pub fn is_contact_trigger(ev: &web_sys::Event) -> bool {
    use wasm_bindgen::JsCast;

    let selector = format!("[{CONTACT_TRIGGER_ATTR}]");
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(&selector).ok().flatten())
        .is_some()
}

/// Open `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let opened = web_sys::window().map(|w| w.open_with_url_and_target(url, "_blank"));
        if let Some(Err(err)) = opened {
            log::warn!("failed to open {url}: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
