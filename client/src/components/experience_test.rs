use super::*;
use crate::content::{Certificate, Internship};

const INTERNSHIP: ExperienceItem = ExperienceItem::Internship(Internship {
    id: 1,
    title: "ML Intern",
    company: "Acme",
    duration: "Jun 2023 - Aug 2023",
    description: "Built models.",
    technologies: &["Python"],
});

const CERTIFICATE: ExperienceItem = ExperienceItem::Certificate(Certificate {
    id: 2,
    title: "Cloud Practitioner",
    issuer: "AWS",
    date: "2024",
    credential_id: "ABC-123",
    description: "Cloud fundamentals.",
});

#[test]
fn timeline_alternates_starting_left() {
    assert_eq!(TimelineSide::for_index(0), TimelineSide::Left);
    assert_eq!(TimelineSide::for_index(1), TimelineSide::Right);
    assert_eq!(TimelineSide::for_index(2), TimelineSide::Left);
}

#[test]
fn timeline_is_reversed() {
    let order: Vec<u32> = timeline(&[INTERNSHIP, CERTIFICATE]).iter().map(ExperienceItem::id).collect();
    assert_eq!(order, vec![2, 1]);
}

#[test]
fn each_variant_has_its_own_style() {
    assert_eq!(card_style(&INTERNSHIP), ("internship", "💼"));
    assert_eq!(card_style(&CERTIFICATE), ("certificate", "🏅"));
}

#[test]
fn stats_count_variants_and_derive_latest_year() {
    let stats = experience_stats(&[INTERNSHIP, CERTIFICATE, INTERNSHIP]);
    let values: Vec<&str> = stats.iter().map(|tile| tile.value.as_str()).collect();
    assert_eq!(values, vec!["2", "1", "2024", "100%"]);
}

#[test]
fn stats_without_experience_show_placeholder_year() {
    let stats = experience_stats(&[]);
    assert_eq!(stats[0].value, "0");
    assert_eq!(stats[1].value, "0");
    assert_eq!(stats[2].value, "N/A");
}
