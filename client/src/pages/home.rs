//! The single portfolio page.

use leptos::prelude::*;

use crate::components::contact_modal::ContactModal;
use crate::components::experience::Experience;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::projects::Projects;
use crate::components::skills::Skills;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <Hero/>
            <Skills/>
            <Projects/>
            <Experience/>
            <Footer/>
            <ContactModal/>
        </div>
    }
}
