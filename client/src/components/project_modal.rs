//! Detail overlay for a single project.

use leptos::prelude::*;

use crate::content::Project;

/// Fullscreen modal with the project's write-up and links.
///
/// Closes on backdrop click, the close button, or Escape.
#[component]
pub fn ProjectModal(project: Project, on_close: Callback<()>) -> impl IntoView {
    let body_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(body) = body_ref.get() {
            if let Err(err) = body.focus() {
                log::warn!("project modal could not take focus: {err:?}");
            }
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="modal__backdrop" on:click=move |_| on_close.run(())>
            <div
                class="modal project-modal"
                role="dialog"
                aria-modal="true"
                tabindex="-1"
                node_ref=body_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <button class="modal__close" on:click=move |_| on_close.run(()) title="Close">
                    "✕"
                </button>
                <div class="project-modal__body">
                    <div class="project-modal__heading">
                        <h2>{project.title}</h2>
                        <p class="project-modal__category">{project.category}</p>
                    </div>

                    <div class="project-modal__columns">
                        <div>
                            <h3>"Overview"</h3>
                            <p>{project.details.overview}</p>
                            <h3>"Technologies"</h3>
                            <div class="tags">
                                {project
                                    .technologies
                                    .iter()
                                    .map(|tech| view! { <span class="tag">{*tech}</span> })
                                    .collect_view()}
                            </div>
                        </div>
                        <div>
                            <h3>"Challenges"</h3>
                            <p>{project.details.challenges}</p>
                            <h3>"Solutions"</h3>
                            <p>{project.details.solutions}</p>
                            <h3>"Impact"</h3>
                            <p>{project.details.impact}</p>
                        </div>
                    </div>

                    <div class="project-modal__links">
                        <a class="button button--primary" href=project.demo_url target="_blank" rel="noopener noreferrer">
                            "👁 View Demo"
                        </a>
                        <a class="button button--muted" href=project.github_url target="_blank" rel="noopener noreferrer">
                            "Source Code"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
