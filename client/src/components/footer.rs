//! Site footer: bio, social links, quick links, contact details, copyright.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::content::{NAVIGATION_LINKS, PORTFOLIO, SocialIcon};
use crate::util::clock::current_year;
use crate::util::scroll::{scroll_to_section, scroll_to_top};

/// Text glyph standing in for each social icon.
#[must_use]
pub fn social_glyph(icon: SocialIcon) -> &'static str {
    match icon {
        SocialIcon::LinkedIn => "in",
        SocialIcon::GitHub => "GH",
        SocialIcon::Mail => "✉",
    }
}

#[must_use]
pub fn copyright_line(year: i32, name: &str) -> String {
    format!("© {year} {name}. Made with ♥ and lots of ☕")
}

#[component]
pub fn Footer() -> impl IntoView {
    let profile = PORTFOLIO.profile;
    let year = current_year();

    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__columns">
                    <div class="footer__brand">
                        <h3>{profile.name}</h3>
                        <p>{profile.bio}</p>
                        <div class="footer__social">
                            {PORTFOLIO
                                .social_links
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            class="footer__social-link"
                                            href=social.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            title=social.name
                                            aria-label=social.name
                                        >
                                            {social_glyph(social.icon)}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="footer__links">
                        <h4>"Quick Links"</h4>
                        <ul>
                            {NAVIGATION_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <button on:click=move |_| scroll_to_section(link.href)>{link.name}</button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                            <li>
                                <button data-contact-trigger="">"Contact"</button>
                            </li>
                        </ul>
                    </div>

                    <div class="footer__contact">
                        <h4>"Get In Touch"</h4>
                        <a href=format!("mailto:{}", profile.email)>"✉ " {profile.email}</a>
                        <a href=format!("tel:{}", profile.phone)>"📱 " {profile.phone}</a>
                        <a
                            class="button button--gradient"
                            href=profile.resume
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "📄 Download Resume"
                        </a>
                    </div>
                </div>

                <div class="footer__bottom">
                    <span>{copyright_line(year, profile.name)}</span>
                    <div class="footer__bottom-right">
                        <span class="footer__credits">"Built with Rust, Leptos & Canvas 2D"</span>
                        <button class="footer__top" title="Back to top" on:click=move |_| scroll_to_top()>
                            "↑"
                        </button>
                    </div>
                </div>
            </div>
        </footer>
    }
}
