//! Landing section: animated scene behind the profile introduction.

use leptos::prelude::*;

use crate::components::hero_canvas::HeroCanvas;
use crate::content::PORTFOLIO;

#[component]
pub fn Hero() -> impl IntoView {
    let profile = PORTFOLIO.profile;

    view! {
        <section id="home" class="hero">
            <HeroCanvas/>
            <div class="hero__overlay">
                <div class="hero__content">
                    <div class="hero__avatar">
                        <img src=profile.image alt=profile.name width="160" height="160"/>
                    </div>
                    <h1 class="hero__name">{profile.name}</h1>
                    <p class="hero__title">{profile.title}</p>
                    <div class="hero__actions">
                        <a
                            class="hero__button hero__button--primary"
                            href=profile.github
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "View GitHub"
                        </a>
                        <a
                            class="hero__button hero__button--secondary"
                            href=profile.linkedin
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "LinkedIn"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
