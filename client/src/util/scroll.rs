//! Smooth scrolling to in-page sections.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Element id targeted by an in-page `#id` link.
#[must_use]
pub fn section_id(href: &str) -> &str {
    href.strip_prefix('#').unwrap_or(href)
}

/// Smoothly scroll the section named by `href` (e.g. `#skills`) into view.
///
/// Unknown ids are ignored.
pub fn scroll_to_section(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(section_id(href)))
        else {
            log::debug!("no section for {href}");
            return;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

/// Smoothly scroll the window back to the top.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
}
