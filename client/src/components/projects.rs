//! Projects section: card grid, detail modal, and summary stats.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;

use crate::components::project_modal::ProjectModal;
use crate::components::stats::{StatTile, StatsStrip};
use crate::content::{PORTFOLIO, Project, distinct_categories};
use crate::util::location::open_in_new_tab;

/// Technologies listed on a card before collapsing into "+N more".
pub const CARD_TECH_LIMIT: usize = 3;

/// Decorative glyph for a project category, if it has one.
#[must_use]
pub fn category_glyph(category: &str) -> Option<&'static str> {
    match category {
        "AI/ML Research" => Some("🧠"),
        "Generative AI" => Some("🎨"),
        "Web Application" => Some("💻"),
        _ => None,
    }
}

/// Technologies shown on a card and the "+N more" label for the rest.
#[must_use]
pub fn card_technologies(technologies: &'static [&'static str]) -> (&'static [&'static str], Option<String>) {
    if technologies.len() <= CARD_TECH_LIMIT {
        return (technologies, None);
    }
    let hidden = technologies.len() - CARD_TECH_LIMIT;
    (&technologies[..CARD_TECH_LIMIT], Some(format!("+{hidden} more")))
}

/// Stats strip: project count, category count, and two fixed figures.
#[must_use]
pub fn project_stats(projects: &[Project]) -> Vec<StatTile> {
    vec![
        StatTile::new(format!("{}+", projects.len()), "Projects", "blue"),
        StatTile::new(distinct_categories(projects).to_string(), "Categories", "purple"),
        StatTile::new("87%", "Success Rate", "green"),
        StatTile::new("500+", "Users Helped", "yellow"),
    ]
}

#[component]
fn ProjectCard(project: Project, on_open: Callback<Project>) -> impl IntoView {
    let (techs, more) = card_technologies(project.technologies);

    view! {
        <article class="card project-card" on:click=move |_| on_open.run(project)>
            <div class="project-card__banner">
                <div class="project-card__glyph">{category_glyph(project.category)}</div>
                <Show when=move || project.featured>
                    <span class="project-card__badge">"Featured"</span>
                </Show>
            </div>
            <div class="project-card__body">
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__description">{project.description}</p>
                <div class="tags">
                    {techs.iter().map(|tech| view! { <span class="tag tag--small">{*tech}</span> }).collect_view()}
                    {more.map(|label| view! { <span class="tag tag--small tag--muted">{label}</span> })}
                </div>
                <div class="project-card__footer">
                    <span class="project-card__category">{project.category}</span>
                    <div class="project-card__actions">
                        <button
                            class="icon-button"
                            title="Open demo"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                open_in_new_tab(project.demo_url);
                            }
                        >
                            "↗"
                        </button>
                        <button
                            class="icon-button icon-button--muted"
                            title="View source"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                open_in_new_tab(project.github_url);
                            }
                        >
                            "</>"
                        </button>
                    </div>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let selected = RwSignal::new(None::<Project>);
    let on_open = Callback::new(move |project: Project| selected.set(Some(project)));
    let on_close = Callback::new(move |()| selected.set(None));

    view! {
        <section id="projects" class="section">
            <div class="section__inner">
                <div class="section__heading">
                    <h2>"Featured " <span class="accent">"Projects"</span></h2>
                    <p>"Explore my latest work in AI/ML, web development, and innovative technology solutions"</p>
                </div>

                <div class="projects__grid">
                    {PORTFOLIO
                        .projects
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project on_open=on_open/> })
                        .collect_view()}
                </div>

                <StatsStrip tiles=project_stats(PORTFOLIO.projects)/>
            </div>

            {move || selected.get().map(|project| view! { <ProjectModal project=project on_close=on_close/> })}
        </section>
    }
}
