//! Experience section: internships, certifications, stats, and a timeline.
//!
//! DESIGN
//! ======
//! Cards match on [`ExperienceItem`] so each variant picks its own icon,
//! colour tone, and extra row (technology tags or credential id). The
//! timeline lists entries newest-first, alternating sides.

#[cfg(test)]
#[path = "experience_test.rs"]
mod experience_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::stats::{StatTile, StatsStrip};
use crate::content::{ExperienceItem, PORTFOLIO, certificates, internships, latest_year};

/// Which side of the centre line a timeline entry sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Self::Left } else { Self::Right }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Left => "timeline__entry timeline__entry--left",
            Self::Right => "timeline__entry timeline__entry--right",
        }
    }
}

/// Colour tone and icon for a card.
#[must_use]
pub fn card_style(item: &ExperienceItem) -> (&'static str, &'static str) {
    match item {
        ExperienceItem::Internship(_) => ("internship", "💼"),
        ExperienceItem::Certificate(_) => ("certificate", "🏅"),
    }
}

/// Entries in timeline order (most recent first).
#[must_use]
pub fn timeline(items: &[ExperienceItem]) -> Vec<ExperienceItem> {
    items.iter().rev().copied().collect()
}

#[must_use]
pub fn experience_stats(items: &[ExperienceItem]) -> Vec<StatTile> {
    let latest = latest_year(items).map_or_else(|| "N/A".to_owned(), |year| year.to_string());
    vec![
        StatTile::new(internships(items).len().to_string(), "Internships", "blue"),
        StatTile::new(certificates(items).len().to_string(), "Certificates", "purple"),
        StatTile::new(latest, "Latest Year", "green"),
        StatTile::new("100%", "Completion Rate", "yellow"),
    ]
}

#[component]
fn ExperienceCard(item: ExperienceItem) -> impl IntoView {
    let (tone, icon) = card_style(&item);

    let extra = match item {
        ExperienceItem::Internship(internship) => view! {
            <div class="tags">
                {internship
                    .technologies
                    .iter()
                    .map(|tech| view! { <span class="tag tag--small">{*tech}</span> })
                    .collect_view()}
            </div>
        }
        .into_any(),
        ExperienceItem::Certificate(certificate) => view! {
            <p class="experience-card__credential">{format!("Credential ID: {}", certificate.credential_id)}</p>
        }
        .into_any(),
    };

    view! {
        <div class=format!("experience-card experience-card--{tone}")>
            <div class="experience-card__icon">{icon}</div>
            <div class="experience-card__body">
                <div class="experience-card__top">
                    <h3>{item.title()}</h3>
                    <span class="experience-card__period">{item.period()}</span>
                </div>
                <p class="experience-card__org">{item.organization()}</p>
                <p class="experience-card__description">{item.description()}</p>
                {extra}
            </div>
        </div>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    let items = PORTFOLIO.experience;
    let internship_cards: Vec<ExperienceItem> =
        items.iter().copied().filter(|item| matches!(item, ExperienceItem::Internship(_))).collect();
    let certificate_cards: Vec<ExperienceItem> =
        items.iter().copied().filter(|item| matches!(item, ExperienceItem::Certificate(_))).collect();

    let internship_block = (!internship_cards.is_empty()).then(|| {
        view! {
            <div class="experience__group">
                <h3 class="experience__group-title">"💼 Professional Experience"</h3>
                <div class="experience__list">
                    {internship_cards.into_iter().map(|item| view! { <ExperienceCard item=item/> }).collect_view()}
                </div>
            </div>
        }
    });

    let certificate_block = (!certificate_cards.is_empty()).then(|| {
        view! {
            <div class="experience__group">
                <h3 class="experience__group-title">"🏅 Certifications"</h3>
                <div class="experience__grid">
                    {certificate_cards.into_iter().map(|item| view! { <ExperienceCard item=item/> }).collect_view()}
                </div>
            </div>
        }
    });

    view! {
        <section id="experience" class="section section--shaded">
            <div class="section__inner">
                <div class="section__heading">
                    <h2>"Experience & " <span class="accent">"Achievements"</span></h2>
                    <p>"My professional journey through internships and industry-recognized certifications"</p>
                </div>

                {internship_block}
                {certificate_block}

                <StatsStrip tiles=experience_stats(items)/>

                <div class="timeline">
                    <div class="timeline__line"></div>
                    {timeline(items)
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| {
                            view! {
                                <div class=TimelineSide::for_index(index).class()>
                                    <div class="timeline__card">
                                        <h4>{item.title()}</h4>
                                        <p>{item.period()}</p>
                                    </div>
                                    <div class="timeline__dot"></div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
