//! Four-up figure strip shared by the projects and experience sections.

use leptos::prelude::*;

/// One figure in a stats strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatTile {
    pub value: String,
    pub label: &'static str,
    /// Colour modifier for the value (`blue`, `purple`, `green`, `yellow`).
    pub tone: &'static str,
}

impl StatTile {
    pub fn new(value: impl Into<String>, label: &'static str, tone: &'static str) -> Self {
        Self { value: value.into(), label, tone }
    }
}

#[component]
pub fn StatsStrip(tiles: Vec<StatTile>) -> impl IntoView {
    view! {
        <div class="stats">
            {tiles
                .into_iter()
                .map(|tile| {
                    view! {
                        <div class="stats__tile">
                            <div class=format!("stats__value stats__value--{}", tile.tone)>{tile.value}</div>
                            <div class="stats__label">{tile.label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
