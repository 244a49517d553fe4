//! Skills section: per-category proficiency bars and a top-skills strip.
//!
//! Each bar starts empty and fills to its percentage after a staggered delay
//! (`index * 200 ms` within its category), giving the cascading fill effect.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use leptos::prelude::*;

use crate::content::{PORTFOLIO, Skill, skills_by_category};

/// Stagger between consecutive bars in a category.
pub const BAR_STAGGER_MS: u32 = 200;

/// Number of skills highlighted in the summary strip.
pub const SUMMARY_COUNT: usize = 4;

/// Fill delay for the bar at `index` within its category.
#[must_use]
pub fn bar_delay_ms(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(BAR_STAGGER_MS))
}

#[must_use]
pub fn bar_width_style(percentage: u8) -> String {
    format!("width: {}%", percentage.min(100))
}

/// The leading skills shown in the summary strip.
#[must_use]
pub fn summary_skills(skills: &[Skill]) -> &[Skill] {
    &skills[..skills.len().min(SUMMARY_COUNT)]
}

#[component]
fn SkillBar(skill: Skill, index: usize) -> impl IntoView {
    let filled = RwSignal::new(0_u8);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::util::clock::sleep_ms(bar_delay_ms(index)).await;
        if filled.try_set(skill.percentage).is_some() {
            log::debug!("skill bar for {} was removed before it filled", skill.name);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = index;

    view! {
        <div class="skill-bar">
            <div class="skill-bar__label">
                <h4 class="skill-bar__name">{skill.name}</h4>
                <span class="skill-bar__value">{format!("{}%", skill.percentage)}</span>
            </div>
            <div class="skill-bar__track">
                <div class="skill-bar__fill" style=move || bar_width_style(filled.get())></div>
            </div>
            <p class="skill-bar__category">{skill.category}</p>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let groups = skills_by_category(PORTFOLIO.skills);

    view! {
        <section id="skills" class="section section--shaded">
            <div class="section__inner">
                <div class="section__heading">
                    <h2>"Skills & " <span class="accent">"Expertise"</span></h2>
                    <p>
                        "A comprehensive overview of my technical skills and proficiency levels across different domains"
                    </p>
                </div>

                <div class="skills__grid">
                    {groups
                        .into_iter()
                        .map(|(category, skills)| {
                            view! {
                                <div class="card skills__category">
                                    <h3>{category}</h3>
                                    {skills
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, skill)| view! { <SkillBar skill=skill index=index/> })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="skills__summary">
                    {summary_skills(PORTFOLIO.skills)
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="skills__summary-item">
                                    <div class="skills__summary-value">{format!("{}%", skill.percentage)}</div>
                                    <div class="skills__summary-name">{skill.name}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
