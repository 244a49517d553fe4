use super::*;

// =============================================================
// Cards
// =============================================================

#[test]
fn known_categories_have_glyphs() {
    assert_eq!(category_glyph("AI/ML Research"), Some("🧠"));
    assert_eq!(category_glyph("Generative AI"), Some("🎨"));
    assert_eq!(category_glyph("Web Application"), Some("💻"));
    assert_eq!(category_glyph("Embedded"), None);
}

#[test]
fn short_technology_lists_are_shown_whole() {
    static TECHS: [&str; 3] = ["Rust", "Leptos", "Axum"];
    let (shown, more) = card_technologies(&TECHS);
    assert_eq!(shown, &TECHS[..]);
    assert_eq!(more, None);
}

#[test]
fn long_technology_lists_collapse_into_more_label() {
    static TECHS: [&str; 5] = ["Python", "PyTorch", "OpenCV", "NumPy", "Flask"];
    let (shown, more) = card_technologies(&TECHS);
    assert_eq!(shown, &["Python", "PyTorch", "OpenCV"]);
    assert_eq!(more.as_deref(), Some("+2 more"));
}

#[test]
fn empty_technology_list_has_no_label() {
    let (shown, more) = card_technologies(&[]);
    assert!(shown.is_empty());
    assert!(more.is_none());
}

// =============================================================
// Stats strip
// =============================================================

#[test]
fn stats_count_projects_and_categories() {
    let stats = project_stats(PORTFOLIO.projects);
    assert_eq!(stats[0].value, format!("{}+", PORTFOLIO.projects.len()));
    assert_eq!(stats[1].value, distinct_categories(PORTFOLIO.projects).to_string());
    assert_eq!(stats[1].label, "Categories");
}

#[test]
fn stats_keep_the_fixed_figures() {
    let stats = project_stats(&[]);
    assert_eq!(stats[0].value, "0+");
    assert_eq!(stats[1].value, "0");
    assert_eq!((stats[2].value.as_str(), stats[2].label), ("87%", "Success Rate"));
    assert_eq!((stats[3].value.as_str(), stats[3].label), ("500+", "Users Helped"));
}
