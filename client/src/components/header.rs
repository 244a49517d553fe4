//! Fixed top bar with section navigation and the mobile menu.

use leptos::prelude::*;

use crate::content::{NAVIGATION_LINKS, PORTFOLIO};
use crate::util::scroll::scroll_to_section;

fn nav_buttons(class: &'static str, on_pick: impl Fn(&'static str) + Copy + 'static) -> impl IntoView {
    NAVIGATION_LINKS
        .iter()
        .map(|link| {
            view! {
                <button class=class on:click=move |_| on_pick(link.href)>
                    {link.name}
                </button>
            }
        })
        .collect_view()
}

#[component]
pub fn Header() -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let resume = PORTFOLIO.profile.resume;

    let go_to = move |href: &'static str| {
        scroll_to_section(href);
        menu_open.set(false);
    };

    view! {
        <header class="header">
            <nav class="header__bar">
                <button class="header__logo" on:click=move |_| go_to("#home") title="Back to top">
                    "LP"
                </button>

                <div class="header__links">
                    {nav_buttons("header__link", go_to)}
                    <button class="header__link" data-contact-trigger="">
                        "Contact"
                    </button>
                    <a class="header__resume" href=resume target="_blank" rel="noopener noreferrer">
                        "Resume"
                    </a>
                </div>

                <button
                    class="header__menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </nav>

            <Show when=move || menu_open.get()>
                <div class="header__mobile-menu">
                    {nav_buttons("header__mobile-link", go_to)}
                    <button
                        class="header__mobile-link"
                        data-contact-trigger=""
                        on:click=move |_| menu_open.set(false)
                    >
                        "Contact"
                    </button>
                    <a
                        class="header__mobile-link header__resume"
                        href=resume
                        target="_blank"
                        rel="noopener noreferrer"
                        on:click=move |_| menu_open.set(false)
                    >
                        "Resume"
                    </a>
                </div>
            </Show>
        </header>
    }
}
